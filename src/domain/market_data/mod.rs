pub mod entities;
pub mod value_objects;

pub use entities::{PriceSnapshot, biggest_mover};
pub use value_objects::{Price, Timeframe, Timestamp, Token};
