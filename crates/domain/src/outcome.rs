//! Outcome descriptors for write operations.
//!
//! Delete and update endpoints respond with what storage reported (counts)
//! rather than the written document, so the counts are first-class domain
//! values instead of driver-specific result objects.

/// Result of a delete operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// Number of documents removed (0 when nothing matched).
    pub deleted_count: u64,
}

/// Result of an update or upsert operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Number of documents the filter matched.
    pub matched_count: u64,
    /// Number of documents actually modified.
    pub modified_count: u64,
    /// Number of documents inserted because nothing matched (0 or 1).
    pub upserted_count: u64,
}

impl UpdateOutcome {
    /// Outcome for an update that matched `count` existing documents.
    #[must_use]
    pub fn matched(count: u64) -> Self {
        Self {
            matched_count: count,
            modified_count: count,
            upserted_count: 0,
        }
    }

    /// Outcome for an upsert that inserted a new document.
    #[must_use]
    pub fn upserted() -> Self {
        Self {
            matched_count: 0,
            modified_count: 0,
            upserted_count: 1,
        }
    }
}
