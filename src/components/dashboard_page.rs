use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::status::Status;
use crate::config::Config;
use crate::hooks::use_dashboard::{DashboardHandle, use_dashboard};
use crate::models::{
    cost::{DashboardSummary, format_amount},
    form::SummaryForm,
    view_state::SummaryStatus,
};

type Setter = fn(&mut SummaryForm, String);

/// Aggregate view over every provider the user supplied credentials for.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let dashboard = use_dashboard();
    let on_fetch = dashboard.refresh.reform(|_: MouseEvent| ());
    let loading = dashboard.state.is_loading();
    let error = match &dashboard.state.status {
        SummaryStatus::Error(msg) => Some(msg.clone()),
        _ => None,
    };

    html! {
        <section class="dashboard-page">
            <h1>{"📊 Multi-Cloud Dashboard"}</h1>

            <div class="card">
                <div class="credential-form">
                    {input(&dashboard, "Start Date", "date", &dashboard.form.start_date, |f, v| f.start_date = v)}
                    {input(&dashboard, "End Date", "date", &dashboard.form.end_date, |f, v| f.end_date = v)}
                </div>
                <details class="credential-group">
                    <summary>{"☁️ AWS"}</summary>
                    <div class="credential-form">
                        {input(&dashboard, "Role ARN", "text", &dashboard.form.aws_role_arn, |f, v| f.aws_role_arn = v)}
                    </div>
                </details>
                <details class="credential-group">
                    <summary>{"🔷 Azure"}</summary>
                    <div class="credential-form">
                        {input(&dashboard, "Subscription ID", "text", &dashboard.form.azure_subscription_id, |f, v| f.azure_subscription_id = v)}
                        {input(&dashboard, "Tenant ID", "text", &dashboard.form.azure_tenant_id, |f, v| f.azure_tenant_id = v)}
                        {input(&dashboard, "Client ID", "text", &dashboard.form.azure_client_id, |f, v| f.azure_client_id = v)}
                        {input(&dashboard, "Client Secret", "password", &dashboard.form.azure_client_secret, |f, v| f.azure_client_secret = v)}
                    </div>
                </details>
                <details class="credential-group">
                    <summary>{"🌐 GCP"}</summary>
                    <div class="credential-form">
                        {input(&dashboard, "Project ID", "text", &dashboard.form.gcp_project_id, |f, v| f.gcp_project_id = v)}
                        {service_account_input(&dashboard)}
                    </div>
                </details>
                <div class="form-actions">
                    <button class="btn btn-primary" onclick={on_fetch} disabled={loading}>
                        { if loading { "Loading..." } else { "Fetch Dashboard" } }
                    </button>
                </div>
            </div>

            <Status
                {loading}
                {error}
                empty_hint={AttrValue::from("Fill in credentials for any provider and click \"Fetch Dashboard\".")}
                has_data={dashboard.state.data().is_some()}
            />

            if let Some(summary) = dashboard.state.data() {
                {summary_view(summary)}
            }
        </section>
    }
}

fn input(
    dashboard: &DashboardHandle,
    label: &'static str,
    input_type: &'static str,
    value: &str,
    set: Setter,
) -> Html {
    let oninput = {
        let form = dashboard.form.clone();
        dashboard.set_form.reform(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            let mut next = form.clone();
            set(&mut next, target.value());
            next
        })
    };

    html! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <input type={input_type} value={value.to_string()} {oninput} />
        </label>
    }
}

fn service_account_input(dashboard: &DashboardHandle) -> Html {
    let oninput = {
        let form = dashboard.form.clone();
        dashboard.set_form.reform(move |e: InputEvent| {
            let target: HtmlTextAreaElement = e.target_unchecked_into();
            SummaryForm {
                gcp_service_account_key: target.value(),
                ..form.clone()
            }
        })
    };

    html! {
        <label class="form-field">
            <span class="form-label">{"Service Account Key"}</span>
            <textarea rows="6" value={dashboard.form.gcp_service_account_key.clone()} {oninput} />
        </label>
    }
}

fn summary_view(summary: &DashboardSummary) -> Html {
    html! {
        <>
            <section class="data-section">
                <div class="summary-grid">
                    <div class="summary-item">
                        <h3>{"Total Cost"}</h3>
                        <p class="summary-value">{format_amount(summary.total_cost)}</p>
                    </div>
                    {
                        summary.cost_by_provider.iter().map(|(provider, cost)| html! {
                            <div class="summary-item" key={provider.clone()}>
                                <h3>{provider.to_uppercase()}</h3>
                                <p class="summary-value">{format_amount(*cost)}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="data-section">
                <h2>{"Cost by Provider"}</h2>
                {
                    summary.cost_by_provider.iter().map(|(provider, cost)| {
                        let share = summary.share_of_total(*cost);
                        html! {
                            <div class="share-row" key={provider.clone()}>
                                <span class="share-label">{provider.to_uppercase()}</span>
                                <div class="share-bar">
                                    <div class="share-fill" style={format!("width: {:.1}%", share.clamp(0.0, 100.0))}></div>
                                </div>
                                <span class="share-value">{format!("{share:.1}%")}</span>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </section>

            <section class="data-section">
                <h2>{format!("Top {} Services", Config::SUMMARY_SERVICES)}</h2>
                <table class="cost-table">
                    <thead>
                        <tr>
                            <th>{"Service"}</th>
                            <th>{"Cost"}</th>
                            <th>{"% of Total"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            summary.top_services(Config::SUMMARY_SERVICES).iter().map(|record| html! {
                                <tr>
                                    <td>{&record.service}</td>
                                    <td>{format_amount(record.amount)}</td>
                                    <td>{format!("{:.1}%", summary.share_of_total(record.amount))}</td>
                                </tr>
                            }).collect::<Html>()
                        }
                    </tbody>
                </table>
            </section>

            <p class="summary-note">
                {format!("Period: {} | Last updated: {}", summary.period, summary.last_updated)}
            </p>
        </>
    }
}
