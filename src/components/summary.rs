use crate::models::cost::{Costs, format_amount};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryProps {
    pub costs: Rc<Costs>,
    pub start_date: AttrValue,
    pub end_date: AttrValue,
}

/// Summary cards above a provider's charts.
#[function_component(Summary)]
pub fn summary(props: &SummaryProps) -> Html {
    let stats = props.costs.stats(&props.start_date, &props.end_date);

    html! {
        <div class="data-summary">
            <div class="summary-grid">
                <div class="summary-item">
                    <h3>{"Total Cost"}</h3>
                    <p class="summary-value">{format_amount(stats.total)}</p>
                    <p class="summary-note">{format!("{} to {}", props.start_date, props.end_date)}</p>
                </div>
                <div class="summary-item">
                    <h3>{"Top Service"}</h3>
                    {
                        match &stats.top_service {
                            Some(top) => html! {
                                <>
                                    <p class="summary-value">{&top.service}</p>
                                    <p class="summary-note">{format!("{} this period", format_amount(top.amount))}</p>
                                </>
                            },
                            None => html! { <p class="summary-value">{"N/A"}</p> },
                        }
                    }
                </div>
                <div class="summary-item">
                    <h3>{"Daily Average"}</h3>
                    <p class="summary-value">
                        {stats.daily_average.map_or_else(|| "N/A".to_string(), format_amount)}
                    </p>
                </div>
                <div class="summary-item">
                    <h3>{"Services"}</h3>
                    <p class="summary-value">{stats.record_count}</p>
                </div>
            </div>
        </div>
    }
}
