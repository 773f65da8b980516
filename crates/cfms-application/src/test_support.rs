//! Shared fixtures for use case tests.

use async_trait::async_trait;
use cfms_core::config::CfmsConfig;
use cfms_core::storage::MemorySlot;
use cfms_infrastructure::{SlotHistoryRepository, SlotSessionRepository};
use cfms_interaction::{BillTransport, TransportError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Transport replaying queued statuses, then answering 200.
pub(crate) struct ScriptedTransport {
    statuses: Mutex<VecDeque<Result<u16, TransportError>>>,
    pub(crate) calls: Mutex<usize>,
}

impl ScriptedTransport {
    pub(crate) fn with(statuses: Vec<Result<u16, TransportError>>) -> Arc<Self> {
        Arc::new(Self {
            statuses: Mutex::new(statuses.into()),
            calls: Mutex::new(0),
        })
    }

    pub(crate) fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl BillTransport for ScriptedTransport {
    async fn get(&self, _url: &str, _authorization: &str) -> Result<u16, TransportError> {
        *self.calls.lock().unwrap() += 1;
        self.statuses.lock().unwrap().pop_front().unwrap_or(Ok(200))
    }
}

pub(crate) struct Fixture {
    pub(crate) config: CfmsConfig,
    pub(crate) sessions: Arc<SlotSessionRepository>,
    pub(crate) history: Arc<SlotHistoryRepository>,
}

impl Fixture {
    pub(crate) fn new() -> Self {
        Self {
            config: CfmsConfig::default(),
            sessions: Arc::new(SlotSessionRepository::new(Arc::new(MemorySlot::new("session")))),
            history: Arc::new(SlotHistoryRepository::new(Arc::new(MemorySlot::new("history")))),
        }
    }
}
