pub use super::value_objects::{Price, Timestamp, Token};
use crate::domain::errors::FeedError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::IntoEnumIterator;

/// Domain entity - complete price snapshot for the fixed token set.
///
/// Replaced wholesale on every fetch, never merged field-by-field. The
/// constructor rejects partial or non-positive data, so holding a snapshot
/// guarantees a valid price for every token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    fetched_at: Timestamp,
    prices: HashMap<Token, Price>,
}

impl PriceSnapshot {
    pub fn new(fetched_at: Timestamp, prices: HashMap<Token, Price>) -> Result<Self, FeedError> {
        for token in Token::iter() {
            match prices.get(&token) {
                Some(price) if price.is_valid() => {}
                _ => return Err(FeedError::MissingSymbol(token)),
            }
        }
        Ok(Self { fetched_at, prices })
    }

    pub fn fetched_at(&self) -> Timestamp {
        self.fetched_at
    }

    /// Infallible after construction: every token has a valid price.
    pub fn price(&self, token: Token) -> Price {
        self.prices.get(&token).copied().unwrap_or_else(|| Price::from(0.0))
    }

    /// Percentage change of `token` relative to this snapshot as baseline.
    pub fn change_percent_since(&self, current: &PriceSnapshot, token: Token) -> f64 {
        let start = self.price(token).value();
        if start == 0.0 {
            return 0.0;
        }
        (current.price(token).value() - start) / start * 100.0
    }
}

/// Token with the largest absolute percentage move since `baseline`.
pub fn biggest_mover(current: &PriceSnapshot, baseline: &PriceSnapshot) -> Option<Token> {
    let mut max_change = 0.0_f64;
    let mut biggest = None;
    for token in Token::iter() {
        let change = baseline.change_percent_since(current, token).abs();
        if change > max_change {
            max_change = change;
            biggest = Some(token);
        }
    }
    biggest
}
