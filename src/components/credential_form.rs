use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::models::{
    form::ProviderForm,
    provider::{CredentialField, InputKind},
};

#[derive(Properties, PartialEq)]
pub struct CredentialFormProps {
    pub form: ProviderForm,
    pub on_change: Callback<(CredentialField, String)>,
}

/// Date range, granularity and credential inputs of a provider page.
#[function_component(CredentialForm)]
pub fn credential_form(props: &CredentialFormProps) -> Html {
    let descriptor = props.form.descriptor();

    let mut fields = vec![CredentialField::StartDate, CredentialField::EndDate];
    if !descriptor.granularities.is_empty() {
        fields.push(CredentialField::Granularity);
    }
    fields.extend(descriptor.credential_inputs());

    html! {
        <div class="credential-form">
            {
                fields.into_iter().map(|field| {
                    let required = descriptor.is_required(field);
                    let label = if required {
                        format!("{} *", field.label())
                    } else {
                        field.label().to_string()
                    };
                    html! {
                        <label class="form-field" key={field.key()}>
                            <span class="form-label">{label}</span>
                            {field_input(&props.form, field, &props.on_change)}
                        </label>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

fn field_input(
    form: &ProviderForm,
    field: CredentialField,
    on_change: &Callback<(CredentialField, String)>,
) -> Html {
    let value = form.get(field).to_string();

    match field.input_kind() {
        InputKind::Select => {
            let onchange = on_change.reform(move |e: Event| {
                let target: HtmlSelectElement = e.target_unchecked_into();
                (field, target.value())
            });
            html! {
                <select {onchange}>
                    {
                        form.descriptor().granularities.iter().map(|g| {
                            let selected = *g == value;
                            html! { <option value={*g} {selected}>{*g}</option> }
                        }).collect::<Html>()
                    }
                </select>
            }
        }
        InputKind::Multiline => {
            let oninput = on_change.reform(move |e: InputEvent| {
                let target: HtmlTextAreaElement = e.target_unchecked_into();
                (field, target.value())
            });
            html! {
                <textarea rows="6" placeholder={field.placeholder()} {value} {oninput} />
            }
        }
        kind => {
            let input_type = match kind {
                InputKind::Date => "date",
                InputKind::Secret => "password",
                _ => "text",
            };
            let oninput = on_change.reform(move |e: InputEvent| {
                let target: HtmlInputElement = e.target_unchecked_into();
                (field, target.value())
            });
            html! {
                <input
                    type={input_type}
                    placeholder={field.placeholder()}
                    {value}
                    {oninput}
                />
            }
        }
    }
}
