pub mod config;
pub mod fetcher;
pub mod logging;
pub mod output;

pub use config::FetchConfig;
pub use fetcher::{FetchError, Fetcher};
