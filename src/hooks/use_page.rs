use gloo_storage::Storage;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

use crate::config::Config;
use crate::models::{error::AppError, provider::Provider};

/// Top-level pages reachable from the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Home,
    Dashboard,
    Provider(Provider),
}

impl Page {
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Dashboard => "Dashboard",
            Page::Provider(provider) => provider.display_name(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Home => "🏠",
            Page::Dashboard => "📊",
            Page::Provider(provider) => provider.icon(),
        }
    }

    /// Pages in navigation order.
    pub fn all() -> Vec<Page> {
        let mut pages = vec![Page::Home, Page::Dashboard];
        pages.extend(Provider::all().iter().copied().map(Page::Provider));
        pages
    }
}

/// Handle returned by `use_page` hook
#[derive(Clone, PartialEq)]
pub struct PageHandle {
    pub page: Page,
    pub set_page: Callback<Page>,
}

/// Custom hook for page selection with localStorage persistence
#[hook]
pub fn use_page() -> PageHandle {
    // Load last page from localStorage, fallback to the home page
    let page = use_state(|| load_page_preference().unwrap_or_default());

    // Effect: Persist page to localStorage on change
    {
        let page_value = *page;
        use_effect_with(page_value, move |page| {
            if let Err(e) = save_page_preference(*page) {
                log::warn!("{e}");
            }
            || ()
        });
    }

    let set_page = {
        let page = page.clone();
        Callback::from(move |new_page| page.set(new_page))
    };

    PageHandle {
        page: *page,
        set_page,
    }
}

/// Load page preference from localStorage
fn load_page_preference() -> Option<Page> {
    gloo_storage::LocalStorage::get(Config::PAGE_STORAGE_KEY).ok()
}

/// Save page preference to localStorage
fn save_page_preference(page: Page) -> Result<(), AppError> {
    gloo_storage::LocalStorage::set(Config::PAGE_STORAGE_KEY, page)
        .map_err(|e| AppError::Storage(format!("Failed to save page: {e}")))
}
