pub mod chart;
pub mod cost_table;
pub mod credential_form;
pub mod dashboard_page;
pub mod home;
pub mod layout;
pub mod provider_page;
pub mod status;
pub mod summary;

pub use dashboard_page::DashboardPage;
pub use home::Home;
pub use layout::Layout;
pub use provider_page::ProviderPage;
