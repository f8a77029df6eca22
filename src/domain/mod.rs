pub mod errors;
pub mod links;
pub mod logging;
pub mod market_data;
pub mod storage;
pub mod window;
