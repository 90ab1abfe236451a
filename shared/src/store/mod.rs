use async_trait::async_trait;

use crate::error::Result;
use crate::models::{CaptureOutcome, LocalEvent, SyncEntryResult, SyncRequest};

// Expose the in-memory store module
pub mod memory;

/// CaptureStore trait defining the interface for per-device offline capture queues
#[async_trait]
pub trait CaptureStore: Send + Sync + 'static {
    /// Parses a scanned payload and queues it, unless the event is already queued
    async fn add_scanned(&self, device_id: &str, payload: &str) -> Result<CaptureOutcome>;

    /// Lists captures for a device in scan order
    async fn list(&self, device_id: &str) -> Result<Vec<LocalEvent>>;

    /// Builds the backend sync request for every pending capture
    async fn sync_request(&self, device_id: &str) -> Result<SyncRequest>;

    /// Applies backend results; `entry_index` refers to the pending list in scan order
    async fn apply_sync_results(
        &self,
        device_id: &str,
        results: &[SyncEntryResult],
    ) -> Result<Vec<LocalEvent>>;

    /// Marks pending captures for events the backend already knows about as synced
    async fn mark_synced(&self, device_id: &str, event_ids: &[String]) -> Result<Vec<LocalEvent>>;

    /// Removes every capture for a device
    async fn clear(&self, device_id: &str) -> Result<()>;
}
