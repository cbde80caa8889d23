use std::time::Duration;

use rquest::Client;
use rquest_util::Emulation;
use tracing::{debug, error};

use crate::error::{Error, Result};

/// HTTP client with a browser TLS fingerprint. The brands endpoint rejects
/// or degrades requests that don't look like a real browser, so the
/// emulation matters as much as the header set callers pass in.
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .emulation(Emulation::Chrome133)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    pub async fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        params: &[(&str, String)],
    ) -> Result<serde_json::Value> {
        debug!(url = url, "Making GET request");

        let mut request = self.client.get(url);

        for (key, value) in headers {
            request = request.header(*key, *value);
        }

        request = request.query(&params);

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), url = url, "Request failed");
            return Err(Error::Status(status));
        }

        let json = response.json().await?;
        Ok(json)
    }
}
