use crate::models::error::AppError;

/// Joins `base` and `path`, appending only the parameters that carry a non-empty value.
///
/// Values are percent-encoded. Parameters are emitted in the order given and no `?`
/// is added when none are present.
pub fn build_url<K, V>(base: &str, path: &str, params: &[(K, Option<V>)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut url = format!("{}{}", base.trim_end_matches('/'), path);

    let query: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| {
            let value = value.as_ref()?.as_ref();
            (!value.is_empty())
                .then(|| format!("{}={}", key.as_ref(), urlencoding::encode(value)))
        })
        .collect();

    if !query.is_empty() {
        url.push('?');
        url.push_str(&query.join("&"));
    }

    url
}

/// Returns the configured backend root, or a configuration error when it is absent or blank.
pub fn require_base(base_url: Option<&str>) -> Result<&str, AppError> {
    match base_url.map(str::trim) {
        Some(base) if !base.is_empty() => Ok(base),
        _ => Err(AppError::Config),
    }
}
