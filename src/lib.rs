pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::EnvConfig;

pub use crate::core::engine::SortEngine;
pub use crate::core::openai::OpenAiSorter;
pub use crate::core::vibesort;
pub use utils::error::{Result, SortError};
