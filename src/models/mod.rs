pub mod cost;
pub mod error;
pub mod form;
pub mod provider;
pub mod view_state;
