use super::error::AppError;
use super::provider::{CredentialField, Provider, ProviderDescriptor};
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// Default date range: first day of `today`'s month through `today`.
pub fn default_date_range(today: NaiveDate) -> (String, String) {
    let first = today.with_day(1).unwrap_or(today);
    (
        first.format("%Y-%m-%d").to_string(),
        today.format("%Y-%m-%d").to_string(),
    )
}

/// In-memory form state of one provider page. Never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct ProviderForm {
    provider: Provider,
    values: HashMap<CredentialField, String>,
}

impl ProviderForm {
    /// Creates a form with the default date range and granularity.
    pub fn new(provider: Provider, today: NaiveDate) -> Self {
        let (start, end) = default_date_range(today);
        let mut values = HashMap::new();
        values.insert(CredentialField::StartDate, start);
        values.insert(CredentialField::EndDate, end);
        if let Some(granularity) = provider.descriptor().default_granularity() {
            values.insert(CredentialField::Granularity, granularity.to_string());
        }
        Self { provider, values }
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn descriptor(&self) -> &'static ProviderDescriptor {
        self.provider.descriptor()
    }

    pub fn get(&self, field: CredentialField) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    pub fn set(&mut self, field: CredentialField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn with(mut self, field: CredentialField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Returns the first required field left empty.
    pub fn check_required(&self) -> Result<(), AppError> {
        match self
            .descriptor()
            .required
            .iter()
            .find(|f| self.get(**f).trim().is_empty())
        {
            Some(field) => Err(AppError::MissingField(field.label())),
            None => Ok(()),
        }
    }

    /// Sparse parameter list for the costs endpoint, in descriptor order.
    pub fn cost_params(&self) -> Vec<(&'static str, Option<String>)> {
        self.params_for(self.descriptor().cost_fields)
    }

    /// Sparse credential list for the test-connection endpoint.
    pub fn test_params(&self) -> Vec<(&'static str, Option<String>)> {
        self.params_for(self.descriptor().test_fields)
    }

    fn params_for(&self, fields: &[CredentialField]) -> Vec<(&'static str, Option<String>)> {
        fields
            .iter()
            .map(|f| (f.key(), self.values.get(f).cloned()))
            .collect()
    }
}

/// Form state of the aggregate dashboard: dates plus optional credentials for every provider.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SummaryForm {
    pub start_date: String,
    pub end_date: String,
    pub aws_role_arn: String,
    pub azure_subscription_id: String,
    pub azure_tenant_id: String,
    pub azure_client_id: String,
    pub azure_client_secret: String,
    pub gcp_project_id: String,
    pub gcp_service_account_key: String,
}

impl SummaryForm {
    pub fn new(today: NaiveDate) -> Self {
        let (start_date, end_date) = default_date_range(today);
        Self {
            start_date,
            end_date,
            ..Self::default()
        }
    }

    /// Sparse parameter list for the summary endpoint, in wire order.
    pub fn params(&self) -> Vec<(&'static str, Option<String>)> {
        [
            ("start_date", &self.start_date),
            ("end_date", &self.end_date),
            ("aws_role_arn", &self.aws_role_arn),
            ("azure_subscription_id", &self.azure_subscription_id),
            ("azure_tenant_id", &self.azure_tenant_id),
            ("azure_client_id", &self.azure_client_id),
            ("azure_client_secret", &self.azure_client_secret),
            ("gcp_project_id", &self.gcp_project_id),
            ("gcp_service_account_key", &self.gcp_service_account_key),
        ]
        .into_iter()
        .map(|(key, value)| (key, Some(value.clone())))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn july_29() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 29).unwrap()
    }

    #[test]
    fn test_default_date_range() {
        let (start, end) = default_date_range(july_29());
        assert_eq!(start, "2025-07-01");
        assert_eq!(end, "2025-07-29");
    }

    #[test]
    fn test_new_form_defaults_granularity() {
        let form = ProviderForm::new(Provider::Gcp, july_29());
        assert_eq!(form.get(CredentialField::Granularity), "MONTHLY");

        let aws = ProviderForm::new(Provider::Aws, july_29());
        assert_eq!(aws.get(CredentialField::Granularity), "");
    }

    #[test]
    fn test_required_field_guard() {
        let form = ProviderForm::new(Provider::Azure, july_29());
        assert_eq!(
            form.check_required(),
            Err(AppError::MissingField("Subscription ID"))
        );
        assert_eq!(
            form.check_required().unwrap_err().to_string(),
            "Subscription ID is required"
        );

        let form = form.with(CredentialField::SubscriptionId, "sub-1");
        assert!(form.check_required().is_ok());
    }

    #[test]
    fn test_whitespace_does_not_satisfy_required_field() {
        let form = ProviderForm::new(Provider::Aws, july_29()).with(CredentialField::RoleArn, "  ");
        assert!(form.check_required().is_err());
    }

    #[test]
    fn test_cost_params_follow_descriptor_order() {
        let form = ProviderForm::new(Provider::Aws, july_29())
            .with(CredentialField::RoleArn, "arn:aws:iam::1:role/x")
            .with(CredentialField::AccessKey, "AKIA");
        let keys: Vec<&str> = form.cost_params().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["start_date", "end_date", "role_arn"]);
    }

    #[test]
    fn test_summary_params_order() {
        let form = SummaryForm::new(july_29());
        let keys: Vec<&str> = form.params().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.first(), Some(&"start_date"));
        assert_eq!(keys.last(), Some(&"gcp_service_account_key"));
        assert_eq!(keys.len(), 9);
    }
}
