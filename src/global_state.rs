use crate::domain::market_data::{PriceSnapshot, Timeframe};
use crate::domain::window::WindowState;
use leptos::*;
#[cfg(target_arch = "wasm32")]
use once_cell::sync::OnceCell;
use std::collections::HashMap;

pub struct Globals {
    pub prices: RwSignal<Option<PriceSnapshot>>,
    pub windows: RwSignal<HashMap<Timeframe, WindowState>>,
    pub countdowns: RwSignal<HashMap<Timeframe, u64>>,
    pub dark_mode: RwSignal<bool>,
    pub refreshing: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    pub last_update: RwSignal<Option<u64>>,
}

#[cfg(target_arch = "wasm32")]
static GLOBALS: OnceCell<Globals> = OnceCell::new();

fn init_globals() -> Globals {
    Globals {
        prices: create_rw_signal(None),
        windows: create_rw_signal(HashMap::new()),
        countdowns: create_rw_signal(HashMap::new()),
        dark_mode: create_rw_signal(true),
        refreshing: create_rw_signal(false),
        loading: create_rw_signal(true),
        last_update: create_rw_signal(None),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(init_globals)
}

// On native (test harness only), the leptos CSR runtime is thread-local and
// libtest runs every test on its own thread, so the globals must live
// per-thread alongside the runtime that owns their signals.
#[cfg(not(target_arch = "wasm32"))]
pub fn globals() -> &'static Globals {
    thread_local! {
        static GLOBALS: &'static Globals = Box::leak(Box::new(init_globals()));
    }
    GLOBALS.with(|g| *g)
}

crate::global_signals! {
    pub prices_signal => prices: Option<crate::domain::market_data::PriceSnapshot>,
    pub windows_signal => windows: std::collections::HashMap<crate::domain::market_data::Timeframe, crate::domain::window::WindowState>,
    pub countdowns_signal => countdowns: std::collections::HashMap<crate::domain::market_data::Timeframe, u64>,
    pub dark_mode_signal => dark_mode: bool,
    pub refreshing_signal => refreshing: bool,
    pub loading_signal => loading: bool,
    pub last_update_signal => last_update: Option<u64>,
}
