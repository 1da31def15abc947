use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// A lookup service answering text queries with zone-file style lines.
#[async_trait]
pub trait Service: Send + Sync {
    fn name(&self) -> &str;
    async fn query(&self, q: &str) -> Result<Vec<String>>;
    async fn dump(&self) -> Result<Vec<u8>>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout(&self) -> Duration;
}
