//! BillLookupProxy: authorized bill status lookups against CFMS.

use crate::transport::{BillTransport, TransportError};
use cfms_core::config::CfmsConfig;
use cfms_core::lookup::{ErrorKind, LookupRequest, LookupResult};
use cfms_core::session::Session;
use std::sync::Arc;

/// Builds target URLs and classifies the remote answer for a lookup.
///
/// The proxy is stateless apart from its configuration; session and
/// history side effects belong to the caller.
#[derive(Clone)]
pub struct BillLookupProxy {
    transport: Arc<dyn BillTransport>,
    endpoint: String,
    sap_client: String,
}

impl BillLookupProxy {
    pub fn new(transport: Arc<dyn BillTransport>, config: &CfmsConfig) -> Self {
        Self {
            transport,
            endpoint: config.endpoint.clone(),
            sap_client: config.sap_client.clone(),
        }
    }

    /// Bill status page for `request`.
    ///
    /// Both query values are ASCII alphanumerics or `-` (guaranteed by
    /// `LookupValidator` and `CfmsConfig::validate`), so no escaping is needed.
    pub fn target_url(&self, request: &LookupRequest) -> String {
        format!(
            "{}?sap-client={}&billNum={}",
            self.endpoint,
            self.sap_client,
            request.bill_number()
        )
    }

    /// Issues an authorized GET for `request` and classifies the outcome.
    ///
    /// A session with an empty credential is answered with
    /// [`ErrorKind::Unauthorized`] without touching the network.
    pub async fn lookup(&self, request: &LookupRequest, session: &Session) -> LookupResult {
        if session.credential.is_empty() {
            tracing::warn!("[BillLookupProxy] Empty credential for user '{}'", session.user);
            return LookupResult::Failed(ErrorKind::Unauthorized);
        }

        let target_url = self.target_url(request);
        let outcome = self
            .transport
            .get(&target_url, &session.credential.authorization_header())
            .await;

        let result = classify(outcome, target_url);
        match &result {
            LookupResult::Found { .. } => {
                tracing::info!("[BillLookupProxy] Bill {} found", request);
            }
            LookupResult::Failed(kind) => {
                tracing::warn!("[BillLookupProxy] Bill {} failed: {}", request, kind);
            }
        }
        result
    }
}

/// Maps a transport outcome to exactly one [`LookupResult`].
pub(crate) fn classify(outcome: Result<u16, TransportError>, target_url: String) -> LookupResult {
    match outcome {
        Ok(status) => match ErrorKind::from_status(status) {
            Some(kind) => LookupResult::Failed(kind),
            None => LookupResult::Found { target_url },
        },
        Err(e) => {
            tracing::debug!("[BillLookupProxy] Transport error: {}", e);
            LookupResult::Failed(ErrorKind::TransportFailure)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use cfms_core::lookup::LookupValidator;
    use cfms_core::session::{Credential, CredentialCodec};
    use std::sync::Mutex;

    /// Transport answering every request with a fixed outcome.
    pub(crate) struct StubTransport {
        outcome: Result<u16, TransportError>,
        pub(crate) calls: Mutex<Vec<(String, String)>>,
    }

    impl StubTransport {
        pub(crate) fn status(status: u16) -> Self {
            Self {
                outcome: Ok(status),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn unreachable() -> Self {
            Self {
                outcome: Err(TransportError::NoResponse("connection refused".to_string())),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl BillTransport for StubTransport {
        async fn get(&self, url: &str, authorization: &str) -> Result<u16, TransportError> {
            self.calls
                .lock()
                .unwrap()
                .push((url.to_string(), authorization.to_string()));
            self.outcome.clone()
        }
    }

    fn session() -> Session {
        Session::new("alice", CredentialCodec::encode("alice", "secret"))
    }

    async fn lookup_with(transport: Arc<StubTransport>) -> LookupResult {
        let proxy = BillLookupProxy::new(transport, &CfmsConfig::default());
        let request = LookupValidator::validate("2025", "0000001").unwrap();
        proxy.lookup(&request, &session()).await
    }

    #[tokio::test]
    async fn test_401_is_unauthorized() {
        let result = lookup_with(Arc::new(StubTransport::status(401))).await;
        assert_eq!(result, LookupResult::Failed(ErrorKind::Unauthorized));
    }

    #[tokio::test]
    async fn test_503_is_remote_unavailable() {
        let result = lookup_with(Arc::new(StubTransport::status(503))).await;
        assert_eq!(result, LookupResult::Failed(ErrorKind::RemoteUnavailable));
    }

    #[tokio::test]
    async fn test_404_is_remote_rejected() {
        let result = lookup_with(Arc::new(StubTransport::status(404))).await;
        assert_eq!(result, LookupResult::Failed(ErrorKind::RemoteRejected));
    }

    #[tokio::test]
    async fn test_unreachable_is_transport_failure() {
        let result = lookup_with(Arc::new(StubTransport::unreachable())).await;
        assert_eq!(result, LookupResult::Failed(ErrorKind::TransportFailure));
    }

    #[tokio::test]
    async fn test_200_is_found_with_bill_url() {
        let transport = Arc::new(StubTransport::status(200));
        let result = lookup_with(transport.clone()).await;

        let url = result.target_url().unwrap();
        assert!(url.contains("billNum=2025-0000001"));
        assert!(url.contains("sap-client=350"));

        let calls = transport.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, url);
        assert_eq!(calls[0].1, "Basic YWxpY2U6c2VjcmV0");
    }

    #[tokio::test]
    async fn test_redirect_status_is_found() {
        let result = lookup_with(Arc::new(StubTransport::status(302))).await;
        assert!(result.success());
    }

    #[tokio::test]
    async fn test_empty_credential_fails_closed() {
        let transport = Arc::new(StubTransport::status(200));
        let proxy = BillLookupProxy::new(transport.clone(), &CfmsConfig::default());
        let request = LookupValidator::validate("2025", "12345").unwrap();
        let session = Session::new("alice", Credential::from_token(""));

        let result = proxy.lookup(&request, &session).await;

        assert_eq!(result, LookupResult::Failed(ErrorKind::Unauthorized));
        assert!(transport.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_target_url_uses_config() {
        let config = CfmsConfig {
            endpoint: "http://127.0.0.1:8080/status".to_string(),
            sap_client: "351".to_string(),
            ..CfmsConfig::default()
        };
        let proxy = BillLookupProxy::new(Arc::new(StubTransport::status(200)), &config);
        let request = LookupValidator::validate("2024", "12345678").unwrap();

        assert_eq!(
            proxy.target_url(&request),
            "http://127.0.0.1:8080/status?sap-client=351&billNum=2024-12345678"
        );
    }
}
