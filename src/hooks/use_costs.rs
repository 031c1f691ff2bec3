use chrono::Local;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{
    form::ProviderForm,
    provider::{CredentialField, Provider},
    view_state::{CostAction, CostViewState, TokenCounter, refresh as run_refresh},
};
use crate::services::api::fetch_costs;

impl Reducible for CostViewState {
    type Action = CostAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if !next.apply(action) {
            log::debug!("Dropping stale cost response");
            return self;
        }
        Rc::new(next)
    }
}

/// Handle returned by `use_costs`
#[derive(Clone, PartialEq)]
pub struct CostsHandle {
    pub state: UseReducerHandle<CostViewState>,
    pub form: ProviderForm,
    pub set_field: Callback<(CredentialField, String)>,
    pub refresh: Callback<()>,
}

/// Form and fetch state for one provider page.
#[hook]
pub fn use_costs(provider: Provider) -> CostsHandle {
    let state = use_reducer(CostViewState::default);
    let form = use_state(|| ProviderForm::new(provider, Local::now().date_naive()));
    let tokens = use_memo((), |_| TokenCounter::default());
    let unmounted = use_mut_ref(|| false);

    {
        let unmounted = unmounted.clone();
        use_effect_with((), move |_| move || *unmounted.borrow_mut() = true);
    }

    let set_field = {
        let form = form.clone();
        Callback::from(move |(field, value): (CredentialField, String)| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        })
    };

    let refresh = {
        let state = state.clone();
        let form = form.clone();
        Callback::from(move |()| {
            let form = (*form).clone();
            let tokens = tokens.clone();
            let dispatch = {
                let state = state.clone();
                let unmounted = unmounted.clone();
                move |action| {
                    if !*unmounted.borrow() {
                        state.dispatch(action);
                    }
                }
            };

            spawn_local(async move {
                run_refresh(form, &tokens, dispatch, |form| async move {
                    fetch_costs(form.provider(), form.cost_params()).await
                })
                .await;
            });
        })
    };

    CostsHandle {
        state,
        form: (*form).clone(),
        set_field,
        refresh,
    }
}
