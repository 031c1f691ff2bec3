use yew::prelude::*;

use crate::hooks::use_page::Page;
use crate::models::provider::Provider;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let open_dashboard = props.on_navigate.reform(|_: MouseEvent| Page::Dashboard);

    html! {
        <section class="home">
            <h1>{"CloudSpy"}</h1>
            <p class="tagline">{"Track what AWS, Azure and Google Cloud cost you, side by side."}</p>

            <div class="provider-cards">
                {
                    Provider::all().iter().copied().map(|provider| {
                        let onclick = props.on_navigate.reform(move |_: MouseEvent| Page::Provider(provider));
                        let accent = provider.descriptor().theme.accent;
                        html! {
                            <div
                                class="card provider-card"
                                key={provider.code()}
                                style={format!("border-top-color: {accent}")}
                            >
                                <h2>{format!("{} {}", provider.icon(), provider.display_name())}</h2>
                                <p>{provider.title()}</p>
                                <button class="btn" {onclick}>{"Open"}</button>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>

            <button class="btn btn-primary" onclick={open_dashboard}>{"📊 Open Dashboard"}</button>
        </section>
    }
}
