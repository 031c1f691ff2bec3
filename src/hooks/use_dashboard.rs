use chrono::Local;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{
    cost::DashboardSummary,
    error::AppError,
    form::SummaryForm,
    view_state::{RequestToken, SummaryState, TokenCounter},
};
use crate::services::api::fetch_dashboard_summary;

#[derive(Debug)]
pub enum SummaryAction {
    Started(RequestToken),
    Completed(RequestToken, Result<DashboardSummary, AppError>),
}

impl Reducible for SummaryState {
    type Action = SummaryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SummaryAction::Started(token) => next.start(token),
            SummaryAction::Completed(token, outcome) => {
                if !next.complete(token, outcome) {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

/// Handle returned by `use_dashboard`
#[derive(Clone, PartialEq)]
pub struct DashboardHandle {
    pub state: UseReducerHandle<SummaryState>,
    pub form: SummaryForm,
    pub set_form: Callback<SummaryForm>,
    pub refresh: Callback<()>,
}

/// Form and fetch state for the aggregate dashboard.
#[hook]
pub fn use_dashboard() -> DashboardHandle {
    let state = use_reducer(SummaryState::default);
    let form = use_state(|| SummaryForm::new(Local::now().date_naive()));
    let tokens = use_memo((), |_| TokenCounter::default());
    let unmounted = use_mut_ref(|| false);

    {
        let unmounted = unmounted.clone();
        use_effect_with((), move |_| move || *unmounted.borrow_mut() = true);
    }

    let set_form = {
        let form = form.clone();
        Callback::from(move |next: SummaryForm| form.set(next))
    };

    let refresh = {
        let state = state.clone();
        let form = form.clone();
        Callback::from(move |()| {
            let params = form.params();
            let token = tokens.issue();
            state.dispatch(SummaryAction::Started(token));

            let state = state.clone();
            let unmounted = unmounted.clone();
            spawn_local(async move {
                let outcome = fetch_dashboard_summary(params).await;
                if !*unmounted.borrow() {
                    state.dispatch(SummaryAction::Completed(token, outcome));
                }
            });
        })
    };

    DashboardHandle {
        state,
        form: (*form).clone(),
        set_form,
        refresh,
    }
}
