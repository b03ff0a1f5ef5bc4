///! flyover-core – ISS pass prediction for the caller's own location
///!
///! Chains three remote lookups: an IP echo service (what is my public
///! IP), an IP geolocation service (where is that IP), and a pass
///! prediction service (when is the ISS visible overhead there). Each
///! step feeds the next; the first failure ends the chain.

pub mod error;
pub mod lookup;

pub use error::LookupError;
pub use lookup::{Coordinates, Endpoints, FlyoverClient, PassTime};
