use std::cell::RefCell;
use std::rc::Rc;

/// Handle to a scheduled task, usable for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerId(u64);

struct Entry {
    id: u64,
    due_ms: u64,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

struct Inner {
    now_ms: u64,
    next_id: u64,
    entries: Vec<Entry>,
}

/// Single-threaded task queue standing in for the host event loop: deferred
/// tasks (`post`) and timers (`set_timeout`) over a virtual clock. Tests and
/// the harness drive time explicitly with `advance` / `run_until_idle`.
///
/// Tasks run outside the queue borrow, so a running task may schedule or
/// cancel other tasks.
pub struct Scheduler {
    inner: RefCell<Inner>,
}

impl Scheduler {
    pub fn new() -> Rc<Self> {
        Rc::new(Scheduler {
            inner: RefCell::new(Inner {
                now_ms: 0,
                next_id: 0,
                entries: Vec::new(),
            }),
        })
    }

    pub fn now_ms(&self) -> u64 {
        self.inner.borrow().now_ms
    }

    /// Queue a task to run on the next turn (a zero-delay timeout).
    pub fn post(&self, task: impl FnOnce() + 'static) -> TimerId {
        self.set_timeout(0, task)
    }

    /// Queue a task to run once `delay_ms` of virtual time has elapsed.
    pub fn set_timeout(&self, delay_ms: u64, task: impl FnOnce() + 'static) -> TimerId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let due_ms = inner.now_ms + delay_ms;
        inner.entries.push(Entry {
            id,
            due_ms,
            seq: id,
            task: Box::new(task),
        });
        TimerId(id)
    }

    /// Cancel a pending task. Returns false if it already ran or was
    /// cancelled.
    pub fn cancel(&self, id: TimerId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.entries.len();
        inner.entries.retain(|e| e.id != id.0);
        inner.entries.len() != before
    }

    pub fn pending(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Run every task queued for the current instant without moving the
    /// clock.
    pub fn run_ready(&self) {
        self.advance(0);
    }

    /// Move the clock forward by `delta_ms`, running every task that comes
    /// due on the way in (due time, queue order). Tasks scheduled while
    /// advancing run too if they fall inside the window.
    pub fn advance(&self, delta_ms: u64) {
        let target_ms = self.inner.borrow().now_ms + delta_ms;

        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let idx = inner
                    .entries
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.due_ms <= target_ms)
                    .min_by_key(|(_, e)| (e.due_ms, e.seq))
                    .map(|(i, _)| i);

                match idx {
                    Some(i) => {
                        let entry = inner.entries.remove(i);
                        inner.now_ms = inner.now_ms.max(entry.due_ms);
                        Some(entry)
                    }
                    None => None,
                }
            };

            match next {
                Some(entry) => (entry.task)(),
                None => break,
            }
        }

        self.inner.borrow_mut().now_ms = target_ms;
    }

    /// Fast-forward until no tasks remain.
    pub fn run_until_idle(&self) {
        loop {
            let next_due = {
                let inner = self.inner.borrow();
                inner.entries.iter().map(|e| e.due_ms).min()
            };
            match next_due {
                Some(due) => {
                    let now = self.now_ms();
                    self.advance(due.saturating_sub(now));
                }
                None => break,
            }
        }
    }
}
