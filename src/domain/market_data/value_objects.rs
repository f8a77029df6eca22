use derive_more::{From, Into, Deref, DerefMut, Constructor};
use strum::{EnumIter, EnumString, AsRefStr, IntoStaticStr, Display as StrumDisplay};
use serde::{Serialize, Deserialize};
use std::cmp::Ordering;

/// Value Object - Цена с автогенерацией
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, DerefMut, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Positive, finite USD price
    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - Временная метка (unix millis)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Deref, DerefMut, Constructor, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    pub fn from_millis(value: u64) -> Self {
        Self(value)
    }

    pub fn as_unix_seconds(&self) -> u64 {
        self.0 / 1000
    }
}

/// Value Object - Отслеживаемый токен (fixed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr, IntoStaticStr, Serialize, Deserialize)]
pub enum Token {
    #[strum(serialize = "BTC")]
    #[serde(rename = "BTC")]
    Btc,

    #[strum(serialize = "ETH")]
    #[serde(rename = "ETH")]
    Eth,

    #[strum(serialize = "SOL")]
    #[serde(rename = "SOL")]
    Sol,
}

impl Token {
    /// Ticker as used by the price feed ("BTC")
    pub fn ticker(&self) -> &'static str {
        (*self).into()
    }

    /// Full asset name as used in hourly/daily market slugs
    pub fn asset_name(&self) -> &'static str {
        match self {
            Self::Btc => "bitcoin",
            Self::Eth => "ethereum",
            Self::Sol => "solana",
        }
    }

    /// Display name for the board
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Btc => "Bitcoin",
            Self::Eth => "Ethereum",
            Self::Sol => "Solana",
        }
    }

    /// Brand accent color
    pub fn accent_color(&self) -> &'static str {
        match self {
            Self::Btc => "#f7931a",
            Self::Eth => "#627eea",
            Self::Sol => "#14f195",
        }
    }
}

/// Value Object - Rolling window duration with fixed clock alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr, IntoStaticStr, Serialize, Deserialize)]
pub enum Timeframe {
    #[strum(serialize = "15m")]
    #[serde(rename = "15m")]
    FifteenMinutes,

    #[strum(serialize = "1h")]
    #[serde(rename = "1h")]
    OneHour,

    #[strum(serialize = "4h")]
    #[serde(rename = "4h")]
    FourHours,

    #[strum(serialize = "1d")]
    #[serde(rename = "1d")]
    OneDay,
}

impl Timeframe {
    pub fn label(&self) -> &'static str {
        (*self).into()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::FifteenMinutes => "15 Minute",
            Self::OneHour => "1 Hour",
            Self::FourHours => "4 Hour",
            Self::OneDay => "1 Day",
        }
    }

    pub fn duration_minutes(&self) -> u64 {
        match self {
            Self::FifteenMinutes => 15,
            Self::OneHour => 60,
            Self::FourHours => 240,
            Self::OneDay => 1440,
        }
    }

    pub fn duration_secs(&self) -> u64 {
        self.duration_minutes() * 60
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_minutes() * 60 * 1000
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn timeframe_labels_round_trip() {
        for tf in Timeframe::iter() {
            assert_eq!(Timeframe::from_str(tf.label()), Ok(tf));
        }
        assert!(Timeframe::from_str("2h").is_err());
    }

    #[test]
    fn token_names() {
        assert_eq!(Token::Btc.ticker(), "BTC");
        assert_eq!(Token::Sol.asset_name(), "solana");
    }

    #[test]
    fn price_validity() {
        assert!(Price::from(42.5).is_valid());
        assert!(!Price::from(0.0).is_valid());
        assert!(!Price::from(-1.0).is_valid());
        assert!(!Price::from(f64::NAN).is_valid());
    }
}
