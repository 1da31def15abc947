use crate::core::Service;
use crate::utils::error::Result;
use std::time::Instant;

pub struct LookupEngine<S: Service> {
    service: S,
}

impl<S: Service> LookupEngine<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub async fn run(&self, query: &str) -> Result<Vec<String>> {
        tracing::info!("Looking up {} via {} service", query, self.service.name());
        let started = Instant::now();

        match self.service.query(query).await {
            Ok(lines) => {
                tracing::debug!(
                    "Lookup produced {} record(s) in {:?}",
                    lines.len(),
                    started.elapsed()
                );
                Ok(lines)
            }
            Err(e) => {
                tracing::error!("Lookup for {} failed: {}", query, e);
                Err(e)
            }
        }
    }
}
