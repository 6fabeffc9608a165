//! Owned byte storage with an exact capacity and a live-length cursor.
//!
//! [`RawBuffer`] is the only place that converts between "a buffer" and
//! "bytes in it". Its backing `Vec<u8>` is always fully initialised and its
//! length *is* the capacity, so the capacity is exactly what was requested
//! and never what the host allocator chose to round up to.
//!
//! ```text
//! 0                    live               data.len()
//! |                     |                     |
//! V                     V                     V
//! +-------------------------------------------+
//! |    ... live ...     |      spare          |
//! +-------------------------------------------+
//! ```
//!
//! Every reallocating method allocates the new buffer before touching the
//! old one, so a failed allocation leaves the buffer unchanged.

use stride_core::SequenceError;

/// Allocate a zero-filled buffer of exactly `bytes` bytes.
///
/// Goes through `try_reserve_exact` so an out-of-memory condition is
/// reported as [`SequenceError::AllocationFailed`] instead of aborting.
pub(crate) fn alloc_zeroed(bytes: usize) -> Result<Vec<u8>, SequenceError> {
    let mut data = Vec::new();
    data.try_reserve_exact(bytes)
        .map_err(|_| SequenceError::AllocationFailed { bytes })?;
    data.resize(bytes, 0);
    Ok(data)
}

/// Geometric growth: capacity for `live + inserted` bytes times `factor`.
pub(crate) fn grown_capacity(
    live: usize,
    inserted: usize,
    factor: usize,
) -> Result<usize, SequenceError> {
    live.checked_add(inserted)
        .and_then(|needed| needed.checked_mul(factor))
        .ok_or(SequenceError::AllocationFailed { bytes: usize::MAX })
}

#[derive(Clone)]
pub(crate) struct RawBuffer {
    /// Backing storage. `data.len()` is the capacity in bytes.
    data: Vec<u8>,
    /// Logical end, in bytes.
    live: usize,
}

impl RawBuffer {
    /// A buffer that has never been allocated.
    pub(crate) const fn unallocated() -> Self {
        Self {
            data: Vec::new(),
            live: 0,
        }
    }

    pub(crate) fn with_capacity(bytes: usize) -> Result<Self, SequenceError> {
        Ok(Self {
            data: alloc_zeroed(bytes)?,
            live: 0,
        })
    }

    /// Capacity in bytes.
    pub(crate) fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Live length in bytes.
    pub(crate) fn live(&self) -> usize {
        self.live
    }

    pub(crate) fn spare(&self) -> usize {
        self.data.len() - self.live
    }

    pub(crate) fn is_allocated(&self) -> bool {
        !self.data.is_empty()
    }

    pub(crate) fn bytes(&self) -> &[u8] {
        &self.data[..self.live]
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data[..self.live]
    }

    /// Move the logical end back to `live` bytes. Never grows.
    pub(crate) fn truncate(&mut self, live: usize) {
        debug_assert!(live <= self.live);
        self.live = live;
    }

    /// Swap in a new buffer of exactly `bytes` bytes, keeping as much of
    /// the live prefix as fits. Returns the number of live bytes dropped.
    pub(crate) fn reallocate_exact(&mut self, bytes: usize) -> Result<usize, SequenceError> {
        let mut next = alloc_zeroed(bytes)?;
        let keep = self.live.min(bytes);
        next[..keep].copy_from_slice(&self.data[..keep]);
        let dropped = self.live - keep;
        tracing::trace!(
            from_bytes = self.data.len(),
            to_bytes = bytes,
            reason = "exact",
            "reallocated vector buffer"
        );
        self.data = next;
        self.live = keep;
        Ok(dropped)
    }

    /// Replace the contents with `count` bytes left for the caller to
    /// overwrite, reallocating to exactly `count` bytes only if the current
    /// capacity is too small. Returns the new live region.
    pub(crate) fn overwrite(&mut self, count: usize) -> Result<&mut [u8], SequenceError> {
        if count > self.data.len() {
            let next = alloc_zeroed(count)?;
            tracing::trace!(
                from_bytes = self.data.len(),
                to_bytes = count,
                reason = "overwrite",
                "reallocated vector buffer"
            );
            self.data = next;
        }
        self.live = count;
        Ok(&mut self.data[..count])
    }

    /// Open a gap of `gap` bytes at byte offset `at` and return it.
    ///
    /// If the spare capacity holds the gap, the tail `[at, live)` is moved
    /// up in place (`copy_within` is overlap-safe). Otherwise a new buffer
    /// of `new_capacity` bytes is allocated, the prefix and tail are copied
    /// around the gap, and the old buffer is released. The gap contents are
    /// unspecified; the caller overwrites them.
    pub(crate) fn open_gap(
        &mut self,
        at: usize,
        gap: usize,
        new_capacity: impl FnOnce(usize, usize) -> Result<usize, SequenceError>,
    ) -> Result<&mut [u8], SequenceError> {
        debug_assert!(at <= self.live);
        let live = self.live;

        if gap <= self.spare() {
            self.data.copy_within(at..live, at + gap);
        } else {
            let capacity = new_capacity(live, gap)?;
            let mut next = alloc_zeroed(capacity)?;
            next[..at].copy_from_slice(&self.data[..at]);
            next[at + gap..live + gap].copy_from_slice(&self.data[at..live]);
            tracing::trace!(
                from_bytes = self.data.len(),
                to_bytes = capacity,
                reason = "grow",
                "reallocated vector buffer"
            );
            self.data = next;
        }

        self.live = live + gap;
        Ok(&mut self.data[at..at + gap])
    }

    /// Remove bytes `[first, last)` by sliding the tail down over them.
    /// Capacity is retained.
    pub(crate) fn close_gap(&mut self, first: usize, last: usize) {
        debug_assert!(first <= last && last <= self.live);
        self.data.copy_within(last..self.live, first);
        self.live -= last - first;
    }
}
