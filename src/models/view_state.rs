//! Fetch-cycle state shared by every page.
//!
//! A cycle runs `Idle -> Loading -> Success | Failure -> Idle`. Each dispatch is tagged
//! with a [`RequestToken`]; only the completion carrying the most recently issued token
//! is applied, so a slow response can never overwrite a newer one.

use super::cost::{CostRecord, Costs, DashboardSummary};
use super::error::{AppError, UNEXPECTED_RESPONSE, backend_error};
use super::form::ProviderForm;
use serde_json::Value;
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

const FALLBACK_ERROR: &str = "Failed to fetch data";

/// Identifies one dispatched request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Issues strictly increasing request tokens.
#[derive(Debug, Default)]
pub struct TokenCounter(Cell<u64>);

impl TokenCounter {
    pub fn issue(&self) -> RequestToken {
        let next = self.0.get() + 1;
        self.0.set(next);
        RequestToken(next)
    }
}

/// Interprets a resolved cost fetch.
///
/// A JSON array of records is a success. An object with a string `error` field yields
/// that message; any other body yields the generic shape error. A rejected call yields
/// its message, or a fallback when the message is empty.
pub fn classify(outcome: Result<Value, AppError>) -> Result<Vec<CostRecord>, String> {
    match outcome {
        Ok(list @ Value::Array(_)) => {
            serde_json::from_value(list).map_err(|_| UNEXPECTED_RESPONSE.to_string())
        }
        Ok(value) => Err(backend_error(&value).unwrap_or_else(|| UNEXPECTED_RESPONSE.to_string())),
        Err(e) => Err(error_message(&e)),
    }
}

fn error_message(error: &AppError) -> String {
    let message = error.to_string();
    if message.is_empty() {
        FALLBACK_ERROR.to_string()
    } else {
        message
    }
}

/// View state of a provider page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CostViewState {
    pub costs: Rc<Costs>,
    pub loading: bool,
    pub error: Option<String>,
    latest: Option<RequestToken>,
}

impl CostViewState {
    /// Records a validation failure without touching the network or the record list.
    pub fn reject(&mut self, error: &AppError) {
        self.error = Some(error_message(error));
    }

    /// Marks `token` as the request whose result will be displayed.
    pub fn start(&mut self, token: RequestToken) {
        self.latest = Some(token);
        self.loading = true;
        self.error = None;
    }

    /// Applies the result of `token`'s request. Returns `false` if the token is stale.
    pub fn complete(&mut self, token: RequestToken, outcome: Result<Value, AppError>) -> bool {
        if self.latest != Some(token) {
            return false;
        }

        match classify(outcome) {
            Ok(records) => {
                self.costs = Rc::new(Costs::new(records));
                self.error = None;
            }
            Err(message) => {
                self.costs = Rc::new(Costs::default());
                self.error = Some(message);
            }
        }
        self.loading = false;
        true
    }

    pub fn total_cost(&self) -> f64 {
        self.costs.total()
    }

    /// Applies `action`. Returns `false` when it was a stale completion and nothing changed.
    pub fn apply(&mut self, action: CostAction) -> bool {
        match action {
            CostAction::Rejected(e) => self.reject(&e),
            CostAction::Started(token) => self.start(token),
            CostAction::Completed(token, outcome) => return self.complete(token, outcome),
        }
        true
    }
}

/// Step of a cost fetch cycle, as seen by whoever owns the [`CostViewState`].
#[derive(Debug)]
pub enum CostAction {
    Rejected(AppError),
    Started(RequestToken),
    Completed(RequestToken, Result<Value, AppError>),
}

/// Runs one fetch cycle for `form`, reporting each step through `dispatch`.
///
/// The required-field guard runs first; when it fails `fetch` is never called and
/// no token is issued.
pub async fn refresh<D, F, Fut>(form: ProviderForm, tokens: &TokenCounter, dispatch: D, fetch: F)
where
    D: Fn(CostAction),
    F: FnOnce(ProviderForm) -> Fut,
    Fut: Future<Output = Result<Value, AppError>>,
{
    if let Err(e) = form.check_required() {
        dispatch(CostAction::Rejected(e));
        return;
    }

    let token = tokens.issue();
    dispatch(CostAction::Started(token));
    let outcome = fetch(form).await;
    dispatch(CostAction::Completed(token, outcome));
}

/// Status of the aggregate dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SummaryStatus {
    #[default]
    Idle,
    Loading,
    Loaded(Rc<DashboardSummary>),
    Error(String),
}

/// Token-fenced state of the aggregate dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SummaryState {
    pub status: SummaryStatus,
    latest: Option<RequestToken>,
}

impl SummaryState {
    pub fn start(&mut self, token: RequestToken) {
        self.latest = Some(token);
        self.status = SummaryStatus::Loading;
    }

    /// Applies the result of `token`'s request. Returns `false` if the token is stale.
    pub fn complete(
        &mut self,
        token: RequestToken,
        outcome: Result<DashboardSummary, AppError>,
    ) -> bool {
        if self.latest != Some(token) {
            return false;
        }

        self.status = match outcome {
            Ok(summary) => SummaryStatus::Loaded(Rc::new(summary)),
            Err(e) => SummaryStatus::Error(error_message(&e)),
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, SummaryStatus::Loading)
    }

    pub fn data(&self) -> Option<&Rc<DashboardSummary>> {
        match &self.status {
            SummaryStatus::Loaded(summary) => Some(summary),
            _ => None,
        }
    }
}
