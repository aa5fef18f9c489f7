//! OpenFEMA `DeclarationDenials` fetch.
//!
//! One best-effort GET: no query parameters, no authentication, no retries and
//! no timeout. Failures are printed and turned into `None`; nothing escapes
//! this module as an error.

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, warn};

pub struct FemaClient {
    client: Client,
    endpoint: String,
}

impl FemaClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetch the payload and return it unmodified, or `None` on any failure.
    pub fn fetch(&self) -> Option<Value> {
        match self.try_fetch() {
            Ok(body) => Some(body),
            Err(e) => {
                println!("Error fetching data: {e}");
                warn!(endpoint = %self.endpoint, error = %e, "fetch failed");
                None
            }
        }
    }

    fn try_fetch(&self) -> Result<Value, reqwest::Error> {
        debug!(endpoint = %self.endpoint, "requesting declaration denials");
        let resp = self.client.get(&self.endpoint).send()?.error_for_status()?;
        debug!(status = %resp.status(), "response received");
        resp.json::<Value>()
    }
}
