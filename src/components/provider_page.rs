use std::rc::Rc;
use yew::prelude::*;

use crate::components::{
    chart::{Chart, ChartKind, SeriesData},
    cost_table::CostTable,
    credential_form::CredentialForm,
    status::{Status, StatusLine},
    summary::Summary,
};
use crate::config::Config;
use crate::hooks::{use_connection_test::use_connection_test, use_costs::use_costs};
use crate::models::provider::{CredentialField, Provider};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Overview,
    Services,
}

#[derive(Properties, PartialEq)]
pub struct ProviderPageProps {
    pub provider: Provider,
}

/// Cost page of a single provider. Mount with `key = provider.code()` so that
/// switching providers starts from a fresh form and state.
#[function_component(ProviderPage)]
pub fn provider_page(props: &ProviderPageProps) -> Html {
    let provider = props.provider;
    let theme = provider.descriptor().theme;
    let palette: &'static [&'static str] = &provider.descriptor().theme.palette;
    let costs = use_costs(provider);
    let connection = use_connection_test();
    let tab = use_state(|| Tab::Overview);

    let state = costs.state.clone();

    let charts = use_memo(state.costs.clone(), |costs| {
        let (labels, values) = costs.series_data();
        let by_service = Rc::new(SeriesData::new(labels, values));

        let top = costs.top_services(Config::TOP_SERVICES);
        let top_services = Rc::new(SeriesData::new(
            top.iter().map(|r| r.service.clone()).collect(),
            top.iter().map(|r| r.amount).collect(),
        ));
        (by_service, top_services)
    });
    let (by_service, top_services) = &*charts;

    let on_fetch = costs.refresh.reform(|_: MouseEvent| ());
    let on_test = {
        let form = costs.form.clone();
        connection.test.reform(move |_: MouseEvent| form.clone())
    };
    let select_tab = |target: Tab| {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(target))
    };

    let start_date = costs.form.get(CredentialField::StartDate).to_string();
    let end_date = costs.form.get(CredentialField::EndDate).to_string();
    let empty_hint = format!(
        "Enter your {} credentials and click \"Fetch {} Costs\" to load data.",
        provider.display_name(),
        provider.display_name()
    );

    html! {
        <section class="provider-page" style={format!("--accent: {}", theme.accent)}>
            <h1>{format!("{} {}", provider.icon(), provider.title())}</h1>

            <div class="card">
                <CredentialForm form={costs.form.clone()} on_change={costs.set_field.clone()} />
                <div class="form-actions">
                    <button class="btn" onclick={on_test}>{"Test Connection"}</button>
                    <button class="btn btn-primary" onclick={on_fetch} disabled={state.loading}>
                        {
                            if state.loading {
                                "Loading...".to_string()
                            } else {
                                format!("Fetch {} Costs", provider.display_name())
                            }
                        }
                    </button>
                </div>
                <StatusLine message={connection.status.message()} />
            </div>

            <Status
                loading={state.loading}
                error={state.error.clone()}
                empty_hint={AttrValue::from(empty_hint)}
                has_data={!state.costs.is_empty()}
            />

            if !state.costs.is_empty() {
                <div class="tabs">
                    <button
                        class={classes!("tab", (*tab == Tab::Overview).then_some("active"))}
                        onclick={select_tab(Tab::Overview)}
                    >
                        {"Overview"}
                    </button>
                    <button
                        class={classes!("tab", (*tab == Tab::Services).then_some("active"))}
                        onclick={select_tab(Tab::Services)}
                    >
                        {"Services"}
                    </button>
                </div>

                if *tab == Tab::Overview {
                    <section class="data-section">
                        <Summary
                            costs={state.costs.clone()}
                            start_date={AttrValue::from(start_date)}
                            end_date={AttrValue::from(end_date)}
                        />
                    </section>
                    <section class="chart-section">
                        <Chart
                            id={format!("{}-cost-by-service", provider.code())}
                            title="Cost by Service"
                            kind={ChartKind::Bar}
                            data={by_service.clone()}
                            {palette}
                        />
                        <Chart
                            id={format!("{}-top-services", provider.code())}
                            title="Top Services"
                            kind={ChartKind::Share}
                            data={top_services.clone()}
                            {palette}
                        />
                    </section>
                } else {
                    <section class="data-section">
                        <h2>{"Service Breakdown"}</h2>
                        <CostTable costs={state.costs.clone()} />
                    </section>
                }
            }
        </section>
    }
}
