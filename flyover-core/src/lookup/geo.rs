///! IP geolocation lookup

use serde_json::Value;

use super::{Coordinates, FlyoverClient};
use crate::error::LookupError;

const WHAT: &str = "coordinates";

impl FlyoverClient {
    /// Map an IP address to approximate geographic coordinates.
    ///
    /// The geolocation service reports failure through a `success` flag
    /// in the body rather than the HTTP status line, so the body is
    /// decoded regardless of status code and the flag is checked before
    /// any field extraction.
    pub async fn locate(&self, ip: &str) -> Result<Coordinates, LookupError> {
        let url = format!("{}/{}", self.endpoints.geo, ip);
        tracing::debug!("Fetching coordinates for {} from {}", ip, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Transport {
                what: WHAT,
                source: e,
            })?;

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Transport {
                what: WHAT,
                source: e,
            })?;

        let parsed: Value =
            serde_json::from_str(&body).map_err(|e| LookupError::Decode {
                what: WHAT,
                source: e,
            })?;

        let success = parsed
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        if !success {
            tracing::debug!("Geolocation rejected the query: {}", body);
            return Err(LookupError::Rejected {
                success,
                message: parsed
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("(no message)")
                    .to_string(),
                ip: parsed
                    .get("ip")
                    .and_then(Value::as_str)
                    .unwrap_or(ip)
                    .to_string(),
            });
        }

        serde_json::from_value(parsed).map_err(|e| LookupError::Decode {
            what: WHAT,
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::error::LookupError;
    use crate::lookup::{Endpoints, FlyoverClient};

    fn client_for(server: &MockServer) -> FlyoverClient {
        FlyoverClient::new(Endpoints {
            geo: server.uri(),
            ..Endpoints::default()
        })
    }

    #[tokio::test]
    async fn test_locate_extracts_coordinates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/162.245.144.188"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"success":true,"latitude":38.7,"longitude":-90.2}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let coords = client_for(&server)
            .locate("162.245.144.188")
            .await
            .unwrap();
        assert_eq!(coords.latitude, 38.7);
        assert_eq!(coords.longitude, -90.2);
    }

    #[tokio::test]
    async fn test_locate_rejected_carries_message_and_ip() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/0.0.0.0"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"success":false,"message":"invalid IP","ip":"0.0.0.0"}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let err = client_for(&server).locate("0.0.0.0").await.unwrap_err();
        match &err {
            LookupError::Rejected {
                success,
                message,
                ip,
            } => {
                assert!(!success);
                assert_eq!(message, "invalid IP");
                assert_eq!(ip, "0.0.0.0");
            }
            other => panic!("expected Rejected error, got {other:?}"),
        }

        let rendered = err.to_string();
        assert!(rendered.contains("invalid IP"));
        assert!(rendered.contains("0.0.0.0"));
    }

    // The service embeds failure in the body, so a missing flag counts
    // as a rejection even on a 200 response.
    #[tokio::test]
    async fn test_locate_missing_success_flag_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/1.2.3.4"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"{"latitude":1.0,"longitude":2.0}"#, "application/json"),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).locate("1.2.3.4").await.unwrap_err();
        match err {
            LookupError::Rejected { success, ip, .. } => {
                assert!(!success);
                // Falls back to the queried address when the body has none
                assert_eq!(ip, "1.2.3.4");
            }
            other => panic!("expected Rejected error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_locate_decodes_body_despite_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/5.6.7.8"))
            .respond_with(ResponseTemplate::new(403).set_body_raw(
                r#"{"success":false,"message":"quota exceeded","ip":"5.6.7.8"}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let err = client_for(&server).locate("5.6.7.8").await.unwrap_err();
        match err {
            LookupError::Rejected { message, .. } => {
                assert_eq!(message, "quota exceeded");
            }
            other => panic!("expected Rejected error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_locate_unreachable_is_transport_error() {
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let client = FlyoverClient::new(Endpoints {
            geo: uri,
            ..Endpoints::default()
        });
        let err = client.locate("1.2.3.4").await.unwrap_err();
        assert!(matches!(err, LookupError::Transport { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn test_locate_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/1.2.3.4"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).locate("1.2.3.4").await.unwrap_err();
        assert!(matches!(err, LookupError::Decode { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn test_locate_success_with_missing_fields_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/1.2.3.4"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"{"success":true,"latitude":38.7}"#, "application/json"),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).locate("1.2.3.4").await.unwrap_err();
        assert!(matches!(err, LookupError::Decode { .. }), "got {err:?}");
    }
}
