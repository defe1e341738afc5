//! Local mirror of a remote record collection.
//!
//! The mirror is the only state the presentation layer reads. It is mutated
//! exclusively through the apply operations below, each of which completes
//! atomically from an observer's point of view, and it upholds one
//! invariant: no two records share a key.

use crate::types::Keyed;
use tracing::warn;

/// Result of an apply operation on the mirror.
///
/// `Rejected` covers the no-op cases: an absent key on update/delete, or a
/// duplicate key on create. Callers that care (controllers, tests) can log
/// or report the inconsistency; presentation just re-renders whatever the
/// mirror now holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The mirror changed.
    Applied,
    /// The operation did not match and the mirror is unchanged.
    Rejected,
}

impl ApplyOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, ApplyOutcome::Applied)
    }
}

/// Ordered, key-unique sequence of records mirroring a remote collection.
///
/// The loading flag is true only during the initial bulk fetch; individual
/// create/update/delete submissions are tracked by the owning dialog's
/// submitting flag, not here.
#[derive(Debug, Clone)]
pub struct Mirror<R: Keyed> {
    records: Vec<R>,
    loading: bool,
}

impl<R: Keyed> Default for Mirror<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Keyed> Mirror<R> {
    /// Create an empty mirror. The initial fetch has not started yet, so
    /// the loading flag is down.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            loading: false,
        }
    }

    /// Mark the initial bulk fetch as in flight.
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Resolve the initial fetch with the server's collection, replacing
    /// whatever the mirror held (a submission may have completed first;
    /// the server's list wins).
    pub fn finish_load(&mut self, records: Vec<R>) {
        self.records = records;
        self.loading = false;
    }

    /// Resolve a failed initial fetch: the sequence stays empty and the
    /// loading flag still comes down.
    pub fn fail_load(&mut self) {
        self.records.clear();
        self.loading = false;
    }

    /// Append a newly created record in insertion order.
    ///
    /// A record whose key is already present is rejected; the server is
    /// authoritative for identifier uniqueness and a duplicate here means a
    /// race or a stale submission, not a new row.
    pub fn apply_create(&mut self, record: R) -> ApplyOutcome {
        if self.position(record.key()).is_some() {
            warn!(key = record.key(), "create ignored: key already mirrored");
            return ApplyOutcome::Rejected;
        }
        self.records.push(record);
        ApplyOutcome::Applied
    }

    /// Replace the record at `key` with the server's canonical
    /// representation, keeping its position.
    ///
    /// An absent key is a no-op rather than an insert, so a late update
    /// completion can never duplicate a row that was deleted meanwhile.
    /// The replacement must carry the same key: identifiers are immutable.
    pub fn apply_update(&mut self, key: &str, record: R) -> ApplyOutcome {
        if record.key() != key {
            warn!(
                key,
                returned_key = record.key(),
                "update ignored: replacement changes the identifier"
            );
            return ApplyOutcome::Rejected;
        }
        match self.position(key) {
            Some(index) => {
                self.records[index] = record;
                ApplyOutcome::Applied
            }
            None => {
                warn!(key, "update ignored: key not mirrored");
                ApplyOutcome::Rejected
            }
        }
    }

    /// Remove the record at `key`. Absent keys are a no-op, which makes
    /// the operation idempotent.
    pub fn apply_delete(&mut self, key: &str) -> ApplyOutcome {
        match self.position(key) {
            Some(index) => {
                self.records.remove(index);
                ApplyOutcome::Applied
            }
            None => ApplyOutcome::Rejected,
        }
    }

    /// Reinsert a record at its prior position, clamped to the current
    /// length. Used to undo an optimistic delete after the server refused
    /// it. A record whose key is already present is rejected.
    pub fn restore(&mut self, index: usize, record: R) -> ApplyOutcome {
        if self.position(record.key()).is_some() {
            warn!(key = record.key(), "restore ignored: key already mirrored");
            return ApplyOutcome::Rejected;
        }
        let index = index.min(self.records.len());
        self.records.insert(index, record);
        ApplyOutcome::Applied
    }

    /// The mirrored sequence, in presentation order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Look up a record by key.
    pub fn get(&self, key: &str) -> Option<&R> {
        self.records.iter().find(|r| r.key() == key)
    }

    /// Position of a key in the sequence, if present.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.records.iter().position(|r| r.key() == key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True only while the initial bulk fetch is unresolved.
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
