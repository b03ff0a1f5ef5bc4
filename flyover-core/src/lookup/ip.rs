///! Public IP discovery via an IP echo service

use serde::Deserialize;

use super::FlyoverClient;
use crate::error::LookupError;

const WHAT: &str = "IP";

/// Success body shape: `{ "ip": "<string>" }`
#[derive(Debug, Deserialize)]
struct IpEchoResponse {
    ip: String,
}

impl FlyoverClient {
    /// Ask the IP echo service for the caller's apparent public IP.
    ///
    /// The address is passed through exactly as the service reports it,
    /// with no validation of its shape.
    pub async fn public_ip(&self) -> Result<String, LookupError> {
        let url = format!("{}/?format=json", self.endpoints.ip_echo);
        tracing::debug!("Fetching public IP from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Transport {
                what: WHAT,
                source: e,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Transport {
                what: WHAT,
                source: e,
            })?;

        if status != reqwest::StatusCode::OK {
            return Err(LookupError::Status {
                what: WHAT,
                status: status.as_u16(),
                body,
            });
        }

        let echo: IpEchoResponse =
            serde_json::from_str(&body).map_err(|e| LookupError::Decode {
                what: WHAT,
                source: e,
            })?;

        Ok(echo.ip)
    }
}
