pub mod preferences;
pub mod tracker_service;

pub use preferences::{THEME_STORAGE_KEY, load_dark_mode, persist_dark_mode};
pub use tracker_service::{PriceTrackerService, TickOutcome, countdowns};
