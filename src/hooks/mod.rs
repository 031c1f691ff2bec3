pub mod use_costs;
pub mod use_dashboard;
pub mod use_page;
