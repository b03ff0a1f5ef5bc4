///! ISS pass time prediction

use serde::Deserialize;

use super::{Coordinates, FlyoverClient, PassTime};
use crate::error::LookupError;

const WHAT: &str = "pass times";

/// Success body shape: `{ "response": [ { "risetime": .., "duration": .. }, .. ] }`
#[derive(Debug, Deserialize)]
struct PassesResponse {
    response: Vec<PassTime>,
}

impl FlyoverClient {
    /// Fetch upcoming ISS passes over the given coordinates.
    ///
    /// Records come back in the order the service produced them; nothing
    /// is re-sorted or reshaped.
    pub async fn upcoming_passes(
        &self,
        coords: Coordinates,
    ) -> Result<Vec<PassTime>, LookupError> {
        let url = format!(
            "{}/json/?lat={}&lon={}",
            self.endpoints.passes, coords.latitude, coords.longitude
        );
        tracing::debug!("Fetching pass times from {}", url);

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

        let parsed: PassesResponse =
            serde_json::from_str(&body).map_err(|e| LookupError::Decode {
                what: WHAT,
                source: e,
            })?;

        Ok(parsed.response)
    }
}
