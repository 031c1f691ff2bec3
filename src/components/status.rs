use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub loading: bool,
    pub error: Option<String>,
    /// Shown when there is neither data, an error nor a request in flight.
    #[prop_or_default]
    pub empty_hint: Option<AttrValue>,
    #[prop_or(false)]
    pub has_data: bool,
}

/// Loading spinner, error card or empty-state hint for a page's fetch cycle.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    if props.loading {
        return html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading data..."}</p>
            </div>
        };
    }

    match (&props.error, &props.empty_hint) {
        (Some(msg), _) => html! {
            <div class="card status error">
                <p><strong>{"Error: "}</strong>{msg}</p>
            </div>
        },
        (None, Some(hint)) if !props.has_data => html! {
            <div class="card status empty">
                <p>{hint}</p>
            </div>
        },
        _ => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusLineProps {
    pub message: Option<String>,
}

/// Single-line result of a connection test.
#[function_component(StatusLine)]
pub fn status_line(props: &StatusLineProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div class="status-line">
                <p>{message}</p>
            </div>
        },
        None => html! {},
    }
}
