use yew::prelude::*;

use cloudspy_dashboard::components::{DashboardPage, Home, Layout, ProviderPage};
use cloudspy_dashboard::hooks::use_page::{Page, use_page};
use cloudspy_dashboard::logging;

#[function_component(App)]
fn app() -> Html {
    let page = use_page();

    html! {
        <>
            <Layout page={page.page} on_navigate={page.set_page.clone()}>
                {
                    match page.page {
                        Page::Home => html! { <Home on_navigate={page.set_page.clone()} /> },
                        Page::Dashboard => html! { <DashboardPage /> },
                        Page::Provider(provider) => html! {
                            <ProviderPage key={provider.code()} {provider} />
                        },
                    }
                }
            </Layout>

            <style>
                {include_str!("style.css")}
            </style>
        </>
    }
}

fn main() {
    logging::init();
    yew::Renderer::<App>::new().render();
}
