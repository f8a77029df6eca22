use leptos::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::StreamExt;
use gloo_timers::future::{IntervalStream, TimeoutFuture};
use strum::IntoEnumIterator;

use crate::application::{self, PriceTrackerService, load_dark_mode, persist_dark_mode};
use crate::domain::links::build_event_url;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{Timeframe, Token, biggest_mover};
use crate::global_state::{
    countdowns_signal, dark_mode_signal, last_update_signal, loading_signal, prices_signal,
    refreshing_signal, windows_signal,
};
use crate::infrastructure::http::PriceFeedClient;
use crate::infrastructure::services;
use crate::infrastructure::services::BrowserTimeProvider;
use crate::infrastructure::storage::LocalStorageStore;
use crate::time_utils::{format_countdown, format_percent, format_price};

/// Fetch cycle interval
const FETCH_INTERVAL_MS: u32 = 15_000;
/// Countdown refresh interval
const COUNTDOWN_INTERVAL_MS: u32 = 1_000;

type AppService = PriceTrackerService<PriceFeedClient, LocalStorageStore>;

/// Board color palette
#[derive(Clone, Copy)]
struct Theme {
    bg: &'static str,
    card_bg: &'static str,
    text: &'static str,
    text_secondary: &'static str,
    border: &'static str,
    accent: &'static str,
}

fn theme(dark: bool) -> Theme {
    if dark {
        Theme {
            bg: "#0B0E14",
            card_bg: "#1A1D26",
            text: "#F9FAFB",
            text_secondary: "#9CA3AF",
            border: "#2D3139",
            accent: "#A78BFA",
        }
    } else {
        Theme {
            bg: "#F3F4F6",
            card_bg: "#FFFFFF",
            text: "#111827",
            text_secondary: "#6B7280",
            border: "#E5E7EB",
            accent: "#7C3AED",
        }
    }
}

/// 🦀 Root component of the tracker board
#[component]
pub fn App() -> impl IntoView {
    dark_mode_signal().set(load_dark_mode(&LocalStorageStore::new()));

    start_price_polling();
    start_countdown_loop();

    let theme_vars = move || {
        let t = theme(dark_mode_signal().get());
        format!(
            "--bg:{};--card:{};--text:{};--muted:{};--border:{};--accent:{}",
            t.bg, t.card_bg, t.text, t.text_secondary, t.border, t.accent
        )
    };

    view! {
        <style>
            {r#"
            .tracker-app {
                font-family: system-ui, -apple-system, sans-serif;
                background: var(--bg);
                color: var(--text);
                min-height: 100vh;
                padding: 20px 12px;
                transition: background 0.3s ease;
            }
            .tracker-inner { max-width: 1100px; margin: 0 auto; }
            .header {
                display: flex;
                justify-content: space-between;
                align-items: center;
                flex-wrap: wrap;
                gap: 16px;
                margin-bottom: 32px;
            }
            .header h1 { margin: 0 0 4px 0; font-size: clamp(24px, 5vw, 36px); }
            .subtitle { margin: 0; font-size: 14px; color: var(--muted); }
            .header-right { display: flex; align-items: center; gap: 12px; }
            .status { font-size: 13px; color: var(--muted); }
            .theme-btn {
                background: var(--card);
                color: var(--text);
                border: 1px solid var(--border);
                border-radius: 8px;
                padding: 10px 16px;
                cursor: pointer;
            }
            .section {
                background: var(--card);
                border: 1px solid var(--border);
                border-radius: 12px;
                margin-bottom: 20px;
                overflow: hidden;
            }
            .section-header {
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 14px 18px;
                border-bottom: 1px solid var(--border);
            }
            .section-header h2 { margin: 0; font-size: 18px; }
            .countdown {
                font-family: 'Courier New', monospace;
                font-size: 15px;
                color: var(--accent);
            }
            .row {
                display: grid;
                grid-template-columns: 14px 1fr 1fr 1fr auto;
                gap: 12px;
                align-items: center;
                padding: 12px 18px;
                border-bottom: 1px solid var(--border);
            }
            .row:last-child { border-bottom: none; }
            .row.mover { box-shadow: inset 3px 0 0 var(--accent); }
            .dot { width: 10px; height: 10px; border-radius: 50%; display: inline-block; }
            .asset { font-weight: 600; }
            .price { font-family: 'Courier New', monospace; }
            .change { font-weight: 600; }
            .market-link { color: var(--accent); text-decoration: none; font-size: 13px; }
            .market-link:hover { text-decoration: underline; }
            .loading { text-align: center; padding: 80px 0; font-size: 20px; color: var(--muted); }
            "#}
        </style>
        <div class="tracker-app" style=theme_vars>
            <div class="tracker-inner">
                <Header />
                <MarketBoard />
            </div>
        </div>
    }
}

/// 📊 Title bar with refresh status and theme toggle
#[component]
fn Header() -> impl IntoView {
    let status = move || {
        if refreshing_signal().get() {
            "⟳ Refreshing...".to_string()
        } else {
            match last_update_signal().get() {
                Some(ts) => {
                    use crate::domain::logging::TimeProvider;
                    format!("Updated {}", BrowserTimeProvider::new().format_timestamp(ts))
                }
                None => String::new(),
            }
        }
    };

    let toggle_theme = move |_| {
        let next = !dark_mode_signal().get();
        dark_mode_signal().set(next);
        persist_dark_mode(&LocalStorageStore::new(), next);
    };

    view! {
        <div class="header">
            <div>
                <h1>"Polymarket Tracker"</h1>
                <p class="subtitle">"Real-time price tracking synced with Polymarket"</p>
            </div>
            <div class="header-right">
                <span class="status">{status}</span>
                <button class="theme-btn" on:click=toggle_theme>
                    {move || if dark_mode_signal().get() { "☀️ Light" } else { "🌙 Dark" }}
                </button>
            </div>
        </div>
    }
}

/// One card per configured timeframe, three token rows each
#[component]
fn MarketBoard() -> impl IntoView {
    view! {
        <Show
            when=move || !loading_signal().get()
            fallback=|| view! { <div class="loading">"Loading markets..."</div> }
        >
            {Timeframe::iter()
                .map(|timeframe| view! { <TimeframeSection timeframe=timeframe /> })
                .collect_view()}
        </Show>
    }
}

#[component]
fn TimeframeSection(timeframe: Timeframe) -> impl IntoView {
    let countdown =
        move || format_countdown(countdowns_signal().get().get(&timeframe).copied().unwrap_or(0));

    view! {
        <div class="section">
            <div class="section-header">
                <h2>{timeframe.display_name()}</h2>
                <span class="countdown">{countdown}</span>
            </div>
            <div class="rows">
                {Token::iter()
                    .map(|token| view! { <TokenRow token=token timeframe=timeframe /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn TokenRow(token: Token, timeframe: Timeframe) -> impl IntoView {
    let price_text = move || {
        prices_signal()
            .get()
            .map(|snapshot| format_price(snapshot.price(token).value()))
            .unwrap_or_else(|| "$0.00".to_string())
    };

    let change = move || match (prices_signal().get(), windows_signal().get().get(&timeframe)) {
        (Some(current), Some(state)) => state.baseline.change_percent_since(&current, token),
        _ => 0.0,
    };

    let change_style = move || {
        let color = if change() >= 0.0 { "#22c55e" } else { "#ef4444" };
        format!("color: {}", color)
    };

    let href = move || {
        windows_signal()
            .get()
            .get(&timeframe)
            .and_then(|state| build_event_url(token, timeframe, state.window_start))
            .unwrap_or_else(|| "#".to_string())
    };

    let is_mover = move || match (prices_signal().get(), windows_signal().get().get(&timeframe)) {
        (Some(current), Some(state)) => biggest_mover(&current, &state.baseline) == Some(token),
        _ => false,
    };

    view! {
        <div class="row" class:mover=is_mover>
            <span class="dot" style=format!("background: {}", token.accent_color())></span>
            <span class="asset">{token.display_name()}</span>
            <span class="price">{price_text}</span>
            <span class="change" style=change_style>{move || format_percent(change())}</span>
            <a class="market-link" href=href target="_blank" rel="noreferrer">"View market ↗"</a>
        </div>
    }
}

/// 🌐 Periodic fetch loop. One writer for price/window state; re-entrant
/// fetches are skipped while one is in flight.
fn start_price_polling() {
    let service: Rc<RefCell<AppService>> = Rc::new(RefCell::new(PriceTrackerService::new(
        PriceFeedClient::new(),
        LocalStorageStore::new(),
    )));

    let stopped = Rc::new(Cell::new(false));
    {
        let stopped = Rc::clone(&stopped);
        on_cleanup(move || stopped.set(true));
    }

    spawn_local(async move {
        loop {
            if stopped.get() {
                break;
            }
            run_fetch_tick(&service).await;
            TimeoutFuture::new(FETCH_INTERVAL_MS).await;
        }
    });
}

async fn run_fetch_tick(service: &Rc<RefCell<AppService>>) {
    if refreshing_signal().get_untracked() {
        return;
    }
    refreshing_signal().set(true);

    let now = services::now();
    let result = service.borrow_mut().tick(now).await;
    match result {
        Ok(outcome) => {
            windows_signal().set(service.borrow().tracker().states().clone());
            prices_signal().set(Some(outcome.snapshot));
            last_update_signal().set(Some(now.value()));
            loading_signal().set(false);
        }
        Err(error) => {
            crate::log_error!(
                LogComponent::Application("FetchLoop"),
                "❌ Price fetch failed: {}",
                error
            );
        }
    }

    refreshing_signal().set(false);
}

/// ⏱ One-second countdown loop, independent of fetch cycles.
fn start_countdown_loop() {
    let stopped = Rc::new(Cell::new(false));
    {
        let stopped = Rc::clone(&stopped);
        on_cleanup(move || stopped.set(true));
    }

    spawn_local(async move {
        countdowns_signal().set(application::countdowns(services::now()));
        let mut ticks = IntervalStream::new(COUNTDOWN_INTERVAL_MS);
        while ticks.next().await.is_some() {
            if stopped.get() {
                break;
            }
            countdowns_signal().set(application::countdowns(services::now()));
        }
    });
}
