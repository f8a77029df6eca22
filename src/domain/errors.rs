use crate::domain::market_data::Token;

/// Simplified error system - no over-engineering!
#[derive(Debug, Clone, PartialEq)]
pub enum FeedError {
    /// Upstream could not be reached at all
    Unreachable(String),
    /// Upstream answered with something we cannot parse
    Malformed(String),
    /// A symbol was absent or invalid in the payload (treated as total failure)
    MissingSymbol(Token),
    /// Upstream answered with an explicit error payload
    Upstream(String),
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::Unreachable(msg) => write!(f, "Upstream unreachable: {}", msg),
            FeedError::Malformed(msg) => write!(f, "Malformed response: {}", msg),
            FeedError::MissingSymbol(token) => write!(f, "Missing price for {}", token.ticker()),
            FeedError::Upstream(msg) => write!(f, "Upstream error: {}", msg),
        }
    }
}

impl std::error::Error for FeedError {}

// Simple convenience type alias
pub type FeedResult<T> = Result<T, FeedError>;
