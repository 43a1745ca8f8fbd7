//! Best-effort heap accounting.
//!
//! The numbers are only meaningful when [`INSTRUMENTED_SYSTEM`] is installed
//! as the global allocator, which the binary does. They are informational
//! and depend on platform and allocation patterns.

use std::alloc::System;

use stats_alloc::{Stats, StatsAlloc};

pub use stats_alloc::INSTRUMENTED_SYSTEM;

/// System allocator that counts allocated and freed bytes.
///
/// ```ignore
/// use u_tsp_brute::memory::{CountingAlloc, INSTRUMENTED_SYSTEM};
///
/// #[global_allocator]
/// static GLOBAL: &CountingAlloc = &INSTRUMENTED_SYSTEM;
/// ```
pub type CountingAlloc = StatsAlloc<System>;

/// Live heap bytes at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemorySnapshot {
    pub live_bytes: usize,
}

impl MemorySnapshot {
    /// `None` unless [`INSTRUMENTED_SYSTEM`] is the global allocator.
    pub fn take() -> Option<Self> {
        Self::from_stats(&INSTRUMENTED_SYSTEM.stats())
    }

    /// A counter that never saw an allocation was not installed.
    fn from_stats(stats: &Stats) -> Option<Self> {
        if stats.allocations == 0 {
            return None;
        }
        let live = stats.bytes_allocated as isize - stats.bytes_deallocated as isize
            + stats.bytes_reallocated;
        Some(Self {
            live_bytes: live.max(0) as usize,
        })
    }

    pub fn usage_until(self, later: MemorySnapshot) -> MemoryUsage {
        MemoryUsage {
            before: self.live_bytes,
            after: later.live_bytes,
        }
    }
}

/// Heap in use before and after a measured section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryUsage {
    pub before: usize,
    pub after: usize,
}

impl MemoryUsage {
    /// `after - before` in bytes; negative when the section freed memory.
    pub fn delta(&self) -> isize {
        self.after as isize - self.before as isize
    }
}
