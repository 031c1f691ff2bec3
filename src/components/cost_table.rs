use crate::models::cost::{Costs, format_amount};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CostTableProps {
    pub costs: Rc<Costs>,
}

/// Per-service breakdown with each record's share of the total.
#[function_component(CostTable)]
pub fn cost_table(props: &CostTableProps) -> Html {
    let costs = &props.costs;
    let show_dates = costs.has_dates();
    let shares = costs.shares();

    html! {
        <table class="cost-table">
            <thead>
                <tr>
                    <th>{"Service"}</th>
                    <th>{"Cost"}</th>
                    <th>{"Unit"}</th>
                    if show_dates {
                        <th>{"Date"}</th>
                    }
                    <th>{"% of Total"}</th>
                </tr>
            </thead>
            <tbody>
                {
                    costs.records().iter().zip(shares).map(|(record, share)| {
                        let amount_class = if record.is_credit() { "amount credit" } else { "amount" };
                        html! {
                            <tr>
                                <td>{&record.service}</td>
                                <td class={amount_class}>{format_amount(record.amount)}</td>
                                <td>{&record.unit}</td>
                                if show_dates {
                                    <td>{record.date.as_deref().unwrap_or("-")}</td>
                                }
                                <td>{format!("{share:.1}%")}</td>
                            </tr>
                        }
                    }).collect::<Html>()
                }
            </tbody>
        </table>
    }
}
