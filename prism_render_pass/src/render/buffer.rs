/// Uniform buffer ranges and the resource registry that hands them out

use std::sync::Arc;
use crate::error::Result;

/// Buffer usage flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    /// Uniform/constant buffer
    Uniform,
    /// Storage buffer
    Storage,
}

/// Descriptor for a buffer range request
#[derive(Debug, Clone)]
pub struct BufferRangeDesc {
    /// Debug label
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Buffer usage
    pub usage: BufferUsage,
}

/// A sub-allocated, GPU-visible buffer range
///
/// Implemented by the resource registry's backend. The range is released
/// when the last `Arc` is dropped.
pub trait BufferRange: Send + Sync {
    /// Size of the range in bytes
    fn size(&self) -> u64;

    /// Update range data
    ///
    /// # Arguments
    ///
    /// * `offset` - Offset into the range in bytes
    /// * `data` - Data to write
    fn update(&self, offset: u64, data: &[u8]) -> Result<()>;
}

/// Allocator for GPU-visible buffer ranges
///
/// The registry owns its own thread-safety; allocation is a blocking call
/// with no cancellation. A failed allocation is returned as an error and
/// never retried by the caller.
pub trait ResourceRegistry {
    /// Allocate (or re-allocate) a buffer range
    fn allocate_buffer_range(&mut self, desc: BufferRangeDesc) -> Result<Arc<dyn BufferRange>>;
}
