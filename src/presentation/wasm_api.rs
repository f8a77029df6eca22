use std::str::FromStr;
use wasm_bindgen::prelude::*;

use crate::domain::links::build_event_url;
use crate::domain::market_data::{Timeframe, Timestamp, Token};
use crate::domain::window;

/// WASM bridge to the window/link logic - minimal glue, no business rules.
#[wasm_bindgen]
pub struct PolyTrackerApi;

#[wasm_bindgen]
impl PolyTrackerApi {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self
    }

    /// Unix-millis start of the window in effect for `label` at `now_ms`,
    /// or NaN for an unknown label.
    #[wasm_bindgen(js_name = windowStart)]
    pub fn window_start(&self, label: String, now_ms: f64) -> f64 {
        Timeframe::from_str(&label)
            .ok()
            .and_then(|timeframe| window::window_start(Timestamp::from_millis(now_ms as u64), timeframe))
            .map(|start| start.as_f64())
            .unwrap_or(f64::NAN)
    }

    /// Whole seconds until the next boundary, clamped to zero.
    #[wasm_bindgen(js_name = countdownSeconds)]
    pub fn countdown_seconds(&self, label: String, now_ms: f64) -> f64 {
        Timeframe::from_str(&label)
            .ok()
            .map(|timeframe| {
                window::countdown_seconds(Timestamp::from_millis(now_ms as u64), timeframe) as f64
            })
            .unwrap_or(0.0)
    }

    /// Event page deep link for the window in effect at `now_ms`.
    /// Unknown symbols or labels yield null.
    #[wasm_bindgen(js_name = eventUrl)]
    pub fn event_url(&self, symbol: String, label: String, now_ms: f64) -> Option<String> {
        let token = Token::from_str(&symbol).ok()?;
        let timeframe = Timeframe::from_str(&label).ok()?;
        let start = window::window_start(Timestamp::from_millis(now_ms as u64), timeframe)?;
        build_event_url(token, timeframe, start)
    }
}

impl Default for PolyTrackerApi {
    fn default() -> Self {
        Self::new()
    }
}
