//! In-process record store.

use std::sync::Mutex;

use crate::error::{EngineError, EngineResult};
use crate::models::WorkRecord;

use super::RecordStore;

/// A [`RecordStore`] holding the collection in memory.
///
/// Used by tests and by the server when no data file is configured.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: Mutex<Vec<WorkRecord>>,
}

impl MemoryRecordStore {
    /// Creates a store seeded with `records`.
    pub fn new(records: Vec<WorkRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

fn poisoned() -> EngineError {
    EngineError::StoreError {
        path: "memory".to_string(),
        message: "record lock poisoned".to_string(),
    }
}

impl RecordStore for MemoryRecordStore {
    fn load(&self) -> EngineResult<Vec<WorkRecord>> {
        let records = self.records.lock().map_err(|_| poisoned())?;
        Ok(records.clone())
    }

    fn save(&self, records: &[WorkRecord]) -> EngineResult<()> {
        let mut stored = self.records.lock().map_err(|_| poisoned())?;
        *stored = records.to_vec();
        Ok(())
    }
}
