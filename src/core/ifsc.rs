use crate::core::{BranchDetails, ConfigProvider, IfscCode, Service, TxtRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://ifsc.razorpay.com/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// IFSC lookups against the Razorpay IFSC API.
///
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct IfscService {
    client: Client,
    base_url: String,
}

impl IfscService {
    pub fn new() -> Result<Self> {
        Self::with_settings(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::with_settings(config.base_url(), config.timeout())
    }

    fn with_settings(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Uses an existing client as-is, including its timeout.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        let mut base_url = base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Looks up a raw query and returns its TXT records.
    ///
    /// A non-2xx upstream status is not an error: it yields a single
    /// "not found" record.
    pub async fn lookup(&self, query: &str) -> Result<Vec<TxtRecord>> {
        let code = IfscCode::parse(query)?;
        let url = format!("{}{}", self.base_url, code);

        tracing::debug!("Making IFSC request to: {}", url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("IFSC response status: {}", status);

        let body = response.bytes().await?;

        if !status.is_success() {
            tracing::warn!("IFSC code {} not found (upstream status {})", code, status);
            return Ok(vec![TxtRecord::not_found(&code)]);
        }

        let details = BranchDetails::from_slice(&body)?;
        Ok(details.to_records(&code))
    }
}

#[async_trait]
impl Service for IfscService {
    fn name(&self) -> &str {
        "ifsc"
    }

    async fn query(&self, q: &str) -> Result<Vec<String>> {
        let records = self.lookup(q).await?;
        Ok(records.iter().map(ToString::to_string).collect())
    }

    async fn dump(&self) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }
}
