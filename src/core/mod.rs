pub mod engine;
pub mod openai;

pub use crate::domain::model::{SortOrder, SortReply, SortRequest};
pub use crate::domain::ports::{ConfigProvider, NumberSorter};
pub use crate::utils::error::Result;

use crate::config::EnvConfig;
use crate::core::engine::SortEngine;
use crate::core::openai::OpenAiSorter;
use crate::utils::validation::Validate;

/// Sort numbers by delegating the comparison to the configured remote model.
/// Wires the environment configuration into the default adapter; callers who
/// need a different strategy construct a [`SortEngine`] directly.
pub async fn vibesort(numbers: &[f64]) -> Result<Vec<f64>> {
    let config = EnvConfig::load()?;
    config.validate()?;

    let engine = SortEngine::new(OpenAiSorter::new(config));
    engine.sort(numbers).await
}
