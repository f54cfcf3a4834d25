//! One-shot timers advanced by the frame loop
//!
//! Timers never fire on their own: the owner advances the queue with the
//! frame delta and receives the payloads of every timer whose deadline was
//! reached. A cancelled timer is removed immediately and can never fire.

/// Handle returned by `TimerQueue::schedule`, used to cancel a pending timer
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct TimerHandle(u64);

struct PendingTimer<T> {
    handle: TimerHandle,
    remaining: f64,
    payload: T,
}

/// Cancellable one-shot timers. Time units are whatever the caller advances
/// with (the particle engine uses milliseconds).
pub struct TimerQueue<T> {
    pending: Vec<PendingTimer<T>>,
    next_handle: u64,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_handle: 1,
        }
    }

    /// Schedule `payload` to fire once `delay` has elapsed.
    /// A delay of zero, less, or a non-finite delay fires on the next `advance`.
    pub fn schedule(&mut self, delay: f64, payload: T) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(PendingTimer {
            handle,
            remaining: if delay.is_finite() { delay } else { 0.0 },
            payload,
        });
        handle
    }

    /// Cancel a pending timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.handle != handle);
        self.pending.len() != before
    }

    /// Time left before `handle` fires
    pub fn remaining(&self, handle: TimerHandle) -> Option<f64> {
        self.pending
            .iter()
            .find(|t| t.handle == handle)
            .map(|t| t.remaining.max(0.0))
    }

    /// Advance all timers by `dt`, returning fired payloads in deadline order.
    /// A negative or non-finite `dt` counts as zero.
    pub fn advance(&mut self, dt: f64) -> Vec<T> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let mut fired = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            self.pending[i].remaining -= dt;
            if self.pending[i].remaining <= 0.0 {
                fired.push(self.pending.swap_remove(i));
                // Don't increment i: the swapped-in timer needs advancing
            } else {
                i += 1;
            }
        }

        fired.sort_by(|a, b| {
            a.remaining
                .partial_cmp(&b.remaining)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.handle.0.cmp(&b.handle.0))
        });
        fired.into_iter().map(|t| t.payload).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
