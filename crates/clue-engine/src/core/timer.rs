// core/timer.rs
//
// Cancellable one-shot timers driven by the host frame clock.
// Nothing here sleeps or blocks: the runner advances the queue each tick and
// handles whatever payloads come due.
//
// Usage:
//   let mut timers = TimerQueue::new();
//   let id = timers.schedule(3000.0, payload);
//   timers.cancel(id);                  // drops it if still pending
//   for (id, payload) in timers.advance(dt_ms) { ... }

/// Handle for a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

#[derive(Debug, Clone)]
struct Entry<T> {
    id: TimerId,
    due_ms: f64,
    payload: T,
}

/// A set of pending one-shot timers keyed by `TimerId`.
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    now_ms: f64,
    next_id: u64,
    pending: Vec<Entry<T>>,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            now_ms: 0.0,
            next_id: 1,
            pending: Vec::new(),
        }
    }

    /// Schedule `payload` to fire `delay_ms` from now. Negative delays fire on
    /// the next advance.
    pub fn schedule(&mut self, delay_ms: f64, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Entry {
            id,
            due_ms: self.now_ms + delay_ms.max(0.0),
            payload,
        });
        id
    }

    /// Cancel a pending timer. Returns its payload if it had not fired yet.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let idx = self.pending.iter().position(|e| e.id == id)?;
        Some(self.pending.swap_remove(idx).payload)
    }

    /// Advance the clock and return every timer that came due, ordered by due
    /// time and then by scheduling order.
    pub fn advance(&mut self, dt_ms: f64) -> Vec<(TimerId, T)> {
        // NaN and negative deltas would move the clock backwards
        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.now_ms += dt_ms;
        }

        let now = self.now_ms;
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|e| e.due_ms <= now);
        self.pending = pending;

        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms).then(a.id.cmp(&b.id)));
        due.into_iter().map(|e| (e.id, e.payload)).collect()
    }

    /// Milliseconds elapsed since the queue was created.
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|e| e.id == id)
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
