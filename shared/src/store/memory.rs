use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use super::CaptureStore;
use crate::error::{Result, ServiceError};
use crate::models::{
    now_millis, CaptureOutcome, LocalEvent, LocalEventStatus, SyncEntry, SyncEntryResult,
    SyncLocalStatus, SyncRequest,
};
use crate::offline::parse_qr_payload;

const DEFAULT_SYNC_ERROR: &str = "Sync failed";

/// In-memory implementation of CaptureStore, keyed by device id
#[derive(Default)]
pub struct MemoryCaptureStore {
    captures: Arc<RwLock<HashMap<String, Vec<LocalEvent>>>>,
}

impl MemoryCaptureStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn write_lock_error() -> ServiceError {
        ServiceError::InternalError("Failed to acquire write lock".into())
    }

    fn read_lock_error() -> ServiceError {
        ServiceError::InternalError("Failed to acquire read lock".into())
    }
}

#[async_trait]
impl CaptureStore for MemoryCaptureStore {
    async fn add_scanned(&self, device_id: &str, payload: &str) -> Result<CaptureOutcome> {
        let parsed = parse_qr_payload(payload).ok_or_else(|| {
            ServiceError::ValidationError("QR payload is not a recognised event code".into())
        })?;

        let mut captures = self.captures.write().map_err(|_| Self::write_lock_error())?;
        let queue = captures.entry(device_id.to_string()).or_default();

        if let Some(existing) = queue
            .iter()
            .find(|e| e.event_id == parsed.event_id && e.status != LocalEventStatus::Error)
        {
            log::debug!(
                "Device {} already queued event {}, skipping",
                device_id,
                parsed.event_id
            );
            return Ok(CaptureOutcome::Duplicate(existing.clone()));
        }

        let event = LocalEvent::pending(Uuid::new_v4().to_string(), parsed, now_millis());
        log::info!("Queued event {} for device {}", event.event_id, device_id);
        queue.push(event.clone());
        Ok(CaptureOutcome::Added(event))
    }

    async fn list(&self, device_id: &str) -> Result<Vec<LocalEvent>> {
        let captures = self.captures.read().map_err(|_| Self::read_lock_error())?;
        Ok(captures.get(device_id).cloned().unwrap_or_default())
    }

    async fn sync_request(&self, device_id: &str) -> Result<SyncRequest> {
        let captures = self.captures.read().map_err(|_| Self::read_lock_error())?;
        let entries: Vec<SyncEntry> = captures
            .get(device_id)
            .map(|queue| {
                queue
                    .iter()
                    .filter(|e| e.status == LocalEventStatus::Pending)
                    .map(|e| SyncEntry {
                        yaml: e.raw_payload.clone(),
                        local_status: SyncLocalStatus::Scanned,
                        scanned_at: e.scanned_at,
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(SyncRequest {
            device_id: device_id.to_string(),
            entries,
        })
    }

    async fn apply_sync_results(
        &self,
        device_id: &str,
        results: &[SyncEntryResult],
    ) -> Result<Vec<LocalEvent>> {
        let mut captures = self.captures.write().map_err(|_| Self::write_lock_error())?;
        let Some(queue) = captures.get_mut(device_id) else {
            return Ok(Vec::new());
        };

        // Positions of pending captures, matching the order sync_request produced
        let pending: Vec<usize> = queue
            .iter()
            .enumerate()
            .filter(|(_, e)| e.status == LocalEventStatus::Pending)
            .map(|(idx, _)| idx)
            .collect();

        let now = now_millis();
        for result in results {
            let Some(&position) = pending.get(result.entry_index) else {
                log::warn!(
                    "Ignoring sync result with out-of-range entry_index {} for device {}",
                    result.entry_index,
                    device_id
                );
                continue;
            };
            let event = &mut queue[position];
            if result.success {
                event.status = LocalEventStatus::Synced;
                event.synced_at = Some(now);
                event.error_message = None;
            } else {
                event.status = LocalEventStatus::Error;
                event.error_message = Some(
                    result
                        .error
                        .clone()
                        .unwrap_or_else(|| DEFAULT_SYNC_ERROR.to_string()),
                );
            }
        }

        Ok(queue.clone())
    }

    async fn mark_synced(&self, device_id: &str, event_ids: &[String]) -> Result<Vec<LocalEvent>> {
        let mut captures = self.captures.write().map_err(|_| Self::write_lock_error())?;
        let Some(queue) = captures.get_mut(device_id) else {
            return Ok(Vec::new());
        };

        let now = now_millis();
        for event in queue
            .iter_mut()
            .filter(|e| e.status == LocalEventStatus::Pending && event_ids.contains(&e.event_id))
        {
            event.status = LocalEventStatus::Synced;
            event.synced_at = Some(now);
        }

        Ok(queue.clone())
    }

    async fn clear(&self, device_id: &str) -> Result<()> {
        let mut captures = self.captures.write().map_err(|_| Self::write_lock_error())?;
        captures.remove(device_id);
        Ok(())
    }
}
