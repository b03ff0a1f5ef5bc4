///! Overhead pass lookup chain
///!
///! One submodule per remote data source, each feeding the next:
///! - `ip`: public IP discovery (IP echo service)
///! - `geo`: IP geolocation
///! - `passes`: ISS pass prediction
///!
///! `FlyoverClient` owns the HTTP client and the service endpoints and
///! exposes the composed operation [`FlyoverClient::next_passes`].

mod geo;
mod ip;
mod passes;
mod types;

pub use types::{Coordinates, PassTime};

use std::time::Duration;

use crate::error::LookupError;

const REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Base URLs of the three remote services.
///
/// Defaults point at the public instances; the CLI config and the test
/// suite substitute their own.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// IP echo service, queried as `{base}/?format=json`
    pub ip_echo: String,
    /// Geolocation service, queried as `{base}/{ip}`
    pub geo: String,
    /// Pass prediction service, queried as `{base}/json/?lat=..&lon=..`
    pub passes: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            ip_echo: "https://api.ipify.org".to_string(),
            geo: "http://ipwho.is".to_string(),
            passes: "https://iss-flyover.herokuapp.com".to_string(),
        }
    }
}

/// Lookup chain client – owns the HTTP client and the service endpoints.
pub struct FlyoverClient {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl FlyoverClient {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
                .user_agent(concat!("flyover/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("Failed to build reqwest client"),
            endpoints,
        }
    }

    /// Run the full chain: public IP → coordinates → upcoming passes.
    ///
    /// Strictly sequential, each step consumes the previous step's
    /// result. The first failing step ends the chain and its error is
    /// returned unchanged; later steps are never attempted.
    pub async fn next_passes(&self) -> Result<Vec<PassTime>, LookupError> {
        let ip = self.public_ip().await?;
        tracing::info!("Public IP resolved: {}", ip);

        let coords = self.locate(&ip).await?;
        tracing::info!(
            "Coordinates resolved: latitude {}, longitude {}",
            coords.latitude,
            coords.longitude
        );

        let passes = self.upcoming_passes(coords).await?;
        tracing::info!("Fetched {} upcoming passes", passes.len());

        Ok(passes)
    }
}

impl Default for FlyoverClient {
    fn default() -> Self {
        Self::new(Endpoints::default())
    }
}
