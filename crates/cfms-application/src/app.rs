//! Wiring of the lookup core from on-disk state.

use crate::auth_usecase::AuthUseCase;
use crate::history_usecase::HistoryUseCase;
use crate::lookup_usecase::LookupUseCase;
use anyhow::{Context, Result};
use cfms_core::config::CfmsConfig;
use cfms_core::history::HistoryRepository;
use cfms_core::session::SessionRepository;
use cfms_infrastructure::{CfmsPaths, ConfigService, SlotHistoryRepository, SlotSessionRepository};
use cfms_interaction::{BillLookupProxy, BillTransport, LoginExchange, ReqwestTransport};
use std::sync::Arc;

/// All use cases sharing one session slot, one history slot and one
/// transport.
pub struct CfmsApp {
    pub config: CfmsConfig,
    pub auth: AuthUseCase,
    pub lookup: LookupUseCase,
    pub history: HistoryUseCase,
}

impl CfmsApp {
    /// Loads `config.toml` and opens the persisted slots under `paths`.
    pub fn open(paths: &CfmsPaths) -> Result<Self> {
        let config = ConfigService::new(paths)
            .and_then(|service| service.load())
            .context("failed to load CFMS configuration")?;
        let sessions =
            SlotSessionRepository::open(paths).context("failed to open session store")?;
        let history =
            SlotHistoryRepository::open(paths).context("failed to open history store")?;

        let transport = ReqwestTransport::new().context("failed to build HTTP client")?;

        tracing::info!("[CfmsApp] Using endpoint {}", config.endpoint);
        Self::from_parts(
            config,
            Arc::new(transport),
            Arc::new(sessions),
            Arc::new(history),
        )
    }

    pub fn from_parts(
        config: CfmsConfig,
        transport: Arc<dyn BillTransport>,
        sessions: Arc<dyn SessionRepository>,
        history: Arc<dyn HistoryRepository>,
    ) -> Result<Self> {
        config.validate().context("invalid CFMS configuration")?;

        let proxy = BillLookupProxy::new(transport.clone(), &config);
        let exchange = LoginExchange::new(transport, &config)?;

        Ok(Self {
            auth: AuthUseCase::new(exchange, sessions.clone()),
            lookup: LookupUseCase::new(proxy.clone(), sessions, history.clone()),
            history: HistoryUseCase::new(history, proxy),
            config,
        })
    }
}
