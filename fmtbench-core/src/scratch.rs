//! Reusable scratch buffer with a bounded retained capacity.

/// Capacity retained across items, in bytes.
///
/// A reset clears the buffer's length and, when a large item has grown the
/// allocation past this ceiling, shrinks the capacity back to it. This
/// bounds the peak memory held between generation calls without forcing a
/// reallocation on every call.
pub const CAPACITY_CEILING: usize = 10_240;

/// Initial capacity of a fresh scratch buffer.
const INITIAL_CAPACITY: usize = 1024;

/// Growable text buffer reused across template renders.
///
/// Owned by the corpus assembler and passed by mutable reference into the
/// template renderer; an explicitly scoped resource, not shared global
/// state.
#[derive(Debug, Default)]
pub struct Scratch {
    buf: String,
}

impl Scratch {
    /// Creates a scratch buffer with the standard initial capacity.
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates a scratch buffer with the given initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    /// Mutable access to the underlying text buffer.
    pub fn buf_mut(&mut self) -> &mut String {
        &mut self.buf
    }

    /// Current content length in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the buffer currently holds no content.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Currently retained capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Copies the current content out into an owned string.
    pub fn snapshot(&self) -> String {
        self.buf.clone()
    }

    /// Clears the content and clamps the retained capacity.
    ///
    /// The length is always reset to zero. The capacity is shrunk back to
    /// [`CAPACITY_CEILING`] only when it has grown beyond it, so typical
    /// items keep reusing the existing allocation.
    pub fn reset(&mut self) {
        self.buf.clear();
        if self.buf.capacity() > CAPACITY_CEILING {
            self.buf.shrink_to(CAPACITY_CEILING);
        }
    }
}
