use crate::domain::model::{SortReply, SortRequest};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Sorting strategy seam. The production implementation delegates to a remote
/// model; tests substitute a local mock without touching the validation shell.
#[async_trait]
pub trait NumberSorter: Send + Sync {
    async fn sort(&self, request: &SortRequest) -> Result<SortReply>;
}

pub trait ConfigProvider: Send + Sync {
    fn credential(&self) -> Option<&str>;
    fn model(&self) -> &str;
    fn base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}
