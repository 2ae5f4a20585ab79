//! Sequential counter for file and folder IDs.
//!
//! IDs start at 1 so that 0 stays available as a sentinel in serialized
//! snapshots. Exhaustion is reported instead of panicking: a long-running
//! IDE session refreshes resources many times.

use std::num::NonZeroU32;

/// Counter handing out non-zero IDs in increasing order.
#[derive(Debug, Clone)]
pub struct IdCounter {
    next_id: Option<NonZeroU32>,
}

impl IdCounter {
    /// Creates a new counter starting at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: NonZeroU32::new(1),
        }
    }

    /// Returns the next raw ID, or `None` once the `u32` space is used up.
    pub fn next_raw(&mut self) -> Option<u32> {
        let current = self.next_id?;
        self.next_id = current.get().checked_add(1).and_then(NonZeroU32::new);
        Some(current.get())
    }

    pub fn next_file_id(&mut self) -> Option<super::FileId> {
        self.next_raw().map(super::FileId)
    }

    pub fn next_folder_id(&mut self) -> Option<super::FolderId> {
        self.next_raw().map(super::FolderId)
    }
}

impl Default for IdCounter {
    fn default() -> Self {
        Self::new()
    }
}
