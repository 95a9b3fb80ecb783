use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use crate::clamp01;
use crate::config::ReputationConfig;

pub type ProbeFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ReputationSample, String>> + Send + 'a>>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReputationSample {
    pub transaction_count: u64,
    pub balance: f64,
}

pub trait ReputationProbe: Send + Sync {
    fn sample<'a>(&'a self, address: &'a str) -> ProbeFuture<'a>;
}

pub fn reputation_bonus(sample: &ReputationSample, config: &ReputationConfig) -> f64 {
    let tx_score = clamp01(sample.transaction_count as f64 / config.tx_saturation);
    let balance_score = clamp01(sample.balance / config.balance_saturation);
    (tx_score + balance_score) / 2.0
}

#[derive(Clone)]
pub struct HttpReputationProbe {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpReputationProbe {
    pub fn from_config(config: &ReputationConfig) -> Result<Self, String> {
        let timeout = Duration::from_millis(config.timeout_ms);
        HttpReputationProbe::new(config.endpoint.clone(), timeout)
    }

    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| format!("failed to build reputation client: {}", err))?;
        Ok(Self { endpoint, client })
    }

    async fn fetch(&self, address: &str) -> Result<ReputationSample, String> {
        let url = format!(
            "{}/account/{}",
            self.endpoint.trim_end_matches('/'),
            address
        );
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| format!("reputation request failed: {}", err))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("reputation error {}: {}", status, body));
        }

        response
            .json::<ReputationSample>()
            .await
            .map_err(|err| format!("reputation response parse failed: {}", err))
    }
}

impl ReputationProbe for HttpReputationProbe {
    fn sample<'a>(&'a self, address: &'a str) -> ProbeFuture<'a> {
        Box::pin(self.fetch(address))
    }
}
