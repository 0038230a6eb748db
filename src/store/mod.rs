//! Persistence of the work record collection.
//!
//! The analyzer keeps one flat collection of [`WorkRecord`]s. A
//! [`RecordStore`] loads the whole collection and replaces it wholesale on
//! save; there is no partial update.

mod csv_store;
mod memory;

pub use csv_store::CsvRecordStore;
pub use memory::MemoryRecordStore;

use crate::error::EngineResult;
use crate::models::WorkRecord;

/// Loads and saves the full record collection.
pub trait RecordStore: Send + Sync {
    /// Returns every stored record in stored order.
    fn load(&self) -> EngineResult<Vec<WorkRecord>>;

    /// Replaces the stored collection with `records`.
    fn save(&self, records: &[WorkRecord]) -> EngineResult<()>;
}
