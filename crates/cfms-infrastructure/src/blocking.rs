use cfms_core::storage::SlotStore;
use cfms_core::{CfmsError, Result};
use std::sync::Arc;

/// Runs a blocking slot operation off the async executor.
pub(crate) async fn with_slot<T, F>(slot: &Arc<dyn SlotStore>, f: F) -> Result<T>
where
    F: FnOnce(&dyn SlotStore) -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    let slot = Arc::clone(slot);
    tokio::task::spawn_blocking(move || f(slot.as_ref()))
        .await
        .map_err(|e| CfmsError::internal(format!("Failed to join task: {}", e)))?
}
