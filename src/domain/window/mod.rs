pub mod services;
pub mod tracker;

pub use services::{REFERENCE_TZ, countdown_seconds, next_boundary, to_reference_time, window_start};
pub use tracker::{TRACKER_STORAGE_KEY, WindowState, WindowTracker};
