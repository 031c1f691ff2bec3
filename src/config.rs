/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Backend root address, baked in at build time from `CLOUDSPY_API_URL`.
    pub const API_URL: Option<&'static str> = option_env!("CLOUDSPY_API_URL");

    /// Number of services shown in the share chart of a provider page
    pub const TOP_SERVICES: usize = 5;

    /// Number of services listed in the aggregate dashboard table
    pub const SUMMARY_SERVICES: usize = 10;

    /// Delay before charts re-render after the window stops resizing
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// localStorage key for the last visited page
    pub const PAGE_STORAGE_KEY: &'static str = "cloudspy.page";
}
