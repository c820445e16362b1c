// Tue Feb 10 2026 - Alex

pub mod error;
pub mod fields;
pub mod metrics;
pub mod reader;
pub mod region;
pub mod segment;
pub mod snapshot;

pub use error::MemoryError;
pub use metrics::{MetricsScope, ReadMetrics};
pub use reader::{LiveReader, MemoryReader, SnapshotReader};
pub use region::MemoryRegion;
pub use segment::CapturedSegment;
pub use snapshot::MemorySnapshot;
