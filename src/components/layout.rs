use yew::prelude::*;

use crate::hooks::use_page::Page;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub page: Page,
    pub on_navigate: Callback<Page>,
    pub children: Html,
}

/// Navigation bar, page frame and footer shared by every page.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="app-container">
            <nav class="app-nav">
                <span class="brand">{"☁️ CloudSpy"}</span>
                <ul class="nav-links">
                    {
                        Page::all().into_iter().map(|page| {
                            let onclick = props.on_navigate.reform(move |_: MouseEvent| page);
                            let class = if page == props.page { "nav-link active" } else { "nav-link" };
                            html! {
                                <li key={page.label()}>
                                    <button {class} {onclick}>
                                        {format!("{} {}", page.icon(), page.label())}
                                    </button>
                                </li>
                            }
                        }).collect::<Html>()
                    }
                </ul>
            </nav>

            <main class="app-main">
                {props.children.clone()}
            </main>

            <footer class="app-footer">
                <p>{"🔐 Privacy first | 🌐 Cloud-agnostic | ⚡ Fast, clean, actionable UI"}</p>
            </footer>
        </div>
    }
}
