use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::Client;

/// Options for fetching model bytes.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Upper bound for establishing an HTTP connection.
    pub connect_timeout: Duration,
    /// Upper bound for a whole HTTP model download. `None` lets large models
    /// take as long as they need.
    pub request_timeout: Option<Duration>,
    /// Honour `HTTP_PROXY` / `HTTPS_PROXY` from the environment.
    pub use_env_proxy: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            request_timeout: None,
            use_env_proxy: true,
        }
    }
}

/// Read a model file from disk.
pub(crate) async fn read_file(path: &str) -> Result<Vec<u8>> {
    Ok(tokio::fs::read(path).await?)
}

/// Fetches model bytes over HTTP(S).
pub(crate) struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub(crate) fn new(options: &LoaderOptions) -> Result<Self> {
        let mut builder = Client::builder().connect_timeout(options.connect_timeout);
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }
        if !options.use_env_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    pub(crate) async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            bail!("Model request to {} failed with status {}", url, status);
        }

        Ok(resp.bytes().await?.to_vec())
    }
}
