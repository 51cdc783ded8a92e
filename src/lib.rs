pub mod cli;
pub mod config;
pub mod logging;
pub mod split;

pub use config::Config;
pub use split::{Span, Split, SplitMode};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown split mode: {0} (expected `quoted` or `plain`)")]
    UnknownMode(String),

    #[error("unknown output format: {0} (expected `text` or `json`)")]
    UnknownFormat(String),
}
