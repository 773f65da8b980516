//! Bill lookup orchestration.
//!
//! Order of a lookup: validate, load the session, ask the remote authority,
//! then apply side effects. A 401 clears the session; a found bill is
//! recorded in history. Retryable failures touch nothing.

use cfms_core::history::{HistoryEntry, HistoryRepository};
use cfms_core::lookup::{ErrorKind, LookupForm, LookupRequest, LookupResult, LookupValidator};
use cfms_core::session::SessionRepository;
use cfms_core::{CfmsError, Result};
use cfms_interaction::BillLookupProxy;
use chrono::Utc;
use std::sync::Arc;

/// A lookup result together with the fate of its history write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOutcome {
    pub result: LookupResult,
    /// Set when the bill was found but could not be recorded.
    pub history_error: Option<CfmsError>,
}

impl LookupOutcome {
    fn new(result: LookupResult) -> Self {
        Self {
            result,
            history_error: None,
        }
    }

    pub fn success(&self) -> bool {
        self.result.success()
    }

    pub fn target_url(&self) -> Option<&str> {
        self.result.target_url()
    }

    /// `true` for a found bill that is now in history.
    pub fn recorded(&self) -> bool {
        self.success() && self.history_error.is_none()
    }
}

pub struct LookupUseCase {
    proxy: BillLookupProxy,
    sessions: Arc<dyn SessionRepository>,
    history: Arc<dyn HistoryRepository>,
}

impl LookupUseCase {
    pub fn new(
        proxy: BillLookupProxy,
        sessions: Arc<dyn SessionRepository>,
        history: Arc<dyn HistoryRepository>,
    ) -> Self {
        Self {
            proxy,
            sessions,
            history,
        }
    }

    /// Looks up one bill for the current session.
    ///
    /// # Errors
    ///
    /// - `Validation` if either field is malformed (no network call)
    /// - `NotLoggedIn` if no valid session is stored (no network call)
    /// - storage errors while clearing the session after a 401
    ///
    /// Remote failures are returned as `LookupResult::Failed`. A history
    /// write failure after a found bill is reported in
    /// [`LookupOutcome::history_error`] next to the `Found` result.
    pub async fn submit(&self, year: &str, bill_no: &str) -> Result<LookupOutcome> {
        let request = LookupValidator::validate(year, bill_no)?;
        self.run(request).await
    }

    /// Submits the form fields and clears them after a successful lookup.
    pub async fn submit_form(&self, form: &mut LookupForm) -> Result<LookupOutcome> {
        let request = form.submit()?;
        let outcome = self.run(request).await?;
        if outcome.success() {
            form.clear();
        }
        Ok(outcome)
    }

    async fn run(&self, request: LookupRequest) -> Result<LookupOutcome> {
        let session = self.sessions.get().await?.ok_or(CfmsError::NotLoggedIn)?;

        let mut outcome = LookupOutcome::new(self.proxy.lookup(&request, &session).await);

        match &outcome.result {
            LookupResult::Found { .. } => {
                let entry = HistoryEntry::from_request(&request, Utc::now());
                if let Err(e) = self.history.record(entry).await {
                    tracing::warn!("[LookupUseCase] Failed to record {} in history: {}", request, e);
                    outcome.history_error = Some(e);
                }
            }
            LookupResult::Failed(ErrorKind::Unauthorized) => {
                tracing::info!(
                    "[LookupUseCase] Session for '{}' rejected, clearing it",
                    session.user
                );
                self.sessions.clear().await?;
            }
            LookupResult::Failed(kind) => {
                tracing::debug!("[LookupUseCase] {} left state untouched ({})", request, kind);
            }
        }

        Ok(outcome)
    }
}
