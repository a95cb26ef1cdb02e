//! Allocation counters for benchmark reporting.
//!
//! [`CountingAlloc`] wraps the system allocator and keeps process-wide
//! atomic counters. Binaries and bench targets install it with
//! `#[global_allocator]`; the harness reads [`snapshot`] deltas around each
//! measured pass. When the wrapper is not installed the counters simply
//! stay at zero.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicU64, Ordering};

static ALLOCATION_COUNT: AtomicU64 = AtomicU64::new(0);
static ALLOCATED_BYTES: AtomicU64 = AtomicU64::new(0);

/// System allocator wrapper counting allocations and allocated bytes.
pub struct CountingAlloc;

// SAFETY: All allocation work is delegated to `System`; the wrapper only
// bumps atomic counters and never touches the returned memory.
unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        ALLOCATION_COUNT.fetch_add(1, Ordering::Relaxed);
        ALLOCATED_BYTES.fetch_add(layout.size() as u64, Ordering::Relaxed);
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        ALLOCATION_COUNT.fetch_add(1, Ordering::Relaxed);
        if new_size > layout.size() {
            ALLOCATED_BYTES.fetch_add((new_size - layout.size()) as u64, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

/// Point-in-time view of the process allocation counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AllocSnapshot {
    /// Number of allocation calls (including growth reallocations).
    pub allocations: u64,
    /// Total bytes requested from the allocator.
    pub bytes: u64,
}

impl AllocSnapshot {
    /// Counter movement between `earlier` and this snapshot.
    pub fn delta_since(self, earlier: AllocSnapshot) -> AllocSnapshot {
        AllocSnapshot {
            allocations: self.allocations.saturating_sub(earlier.allocations),
            bytes: self.bytes.saturating_sub(earlier.bytes),
        }
    }
}

/// Reads the current allocation counters.
pub fn snapshot() -> AllocSnapshot {
    AllocSnapshot {
        allocations: ALLOCATION_COUNT.load(Ordering::Relaxed),
        bytes: ALLOCATED_BYTES.load(Ordering::Relaxed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_subtracts_counterwise() {
        let earlier = AllocSnapshot {
            allocations: 10,
            bytes: 4096,
        };
        let later = AllocSnapshot {
            allocations: 25,
            bytes: 10_240,
        };
        assert_eq!(
            later.delta_since(earlier),
            AllocSnapshot {
                allocations: 15,
                bytes: 6144,
            }
        );
    }

    /// Snapshots taken out of order must not underflow.
    #[test]
    fn delta_saturates_at_zero() {
        let earlier = AllocSnapshot {
            allocations: 5,
            bytes: 100,
        };
        assert_eq!(
            AllocSnapshot::default().delta_since(earlier),
            AllocSnapshot::default()
        );
    }

    #[test]
    fn snapshots_are_monotonic() {
        let a = snapshot();
        let b = snapshot();
        assert!(b.allocations >= a.allocations);
        assert!(b.bytes >= a.bytes);
    }
}
