//! Single-flight coordination for overlapping generation requests.
//!
//! A UI issues generations faster than they complete: the user drags the
//! size slider, three requests overlap, and the slowest one must not
//! clobber the newest result. The policy here is the reference behaviour:
//! newest request wins, stale completions are discarded, never shown.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use image::DynamicImage;

use crate::error::Result;

use super::{generate, Generation, GenerationRequest};

/// A claim on one generation, ordered by issue time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Owns the "current result" slot for one invocation context.
///
/// `begin` issues a monotonically increasing ticket; `complete` publishes
/// a result only when its ticket is still the latest issued. A caller that
/// suspends (decoding on an async host, a worker thread) holds its ticket
/// across the gap and lets the session arbitrate at completion time.
#[derive(Debug, Default)]
pub struct Session {
    issued: AtomicU64,
    slot: Mutex<Option<(u64, Arc<Generation>)>>,
}

impl Session {
    /// Create a session with no result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the next generation. Any ticket issued earlier becomes stale.
    pub fn begin(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` is still the latest issued.
    ///
    /// Long-running callers can poll this between pipeline stages to
    /// abandon superseded work early.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket.0
    }

    /// Publish a finished generation.
    ///
    /// Returns the published result, or `None` when the ticket was
    /// superseded by a newer `begin` — the stale result is dropped, and
    /// the current slot keeps whatever the newest completed request put
    /// there.
    pub fn complete(&self, ticket: Ticket, generation: Generation) -> Option<Arc<Generation>> {
        if !self.is_current(ticket) {
            tracing::debug!(ticket = ticket.0, "discarding stale generation");
            return None;
        }

        let generation = Arc::new(generation);
        let mut slot = self.slot.lock().expect("session slot poisoned");
        *slot = Some((ticket.0, Arc::clone(&generation)));
        Some(generation)
    }

    /// The most recently published result, if any.
    pub fn latest(&self) -> Option<Arc<Generation>> {
        self.slot
            .lock()
            .expect("session slot poisoned")
            .as_ref()
            .map(|(_, generation)| Arc::clone(generation))
    }

    /// Run the pipeline under this session's single-flight policy.
    ///
    /// `Ok(None)` means the run finished but was superseded mid-flight and
    /// its result was discarded. Errors propagate without touching the
    /// current slot.
    pub fn generate(
        &self,
        image: &DynamicImage,
        request: &GenerationRequest,
    ) -> Result<Option<Arc<Generation>>> {
        let ticket = self.begin();
        let generation = generate(image, request)?;
        Ok(self.complete(ticket, generation))
    }
}
