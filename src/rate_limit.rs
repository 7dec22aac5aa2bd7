//! Rate Limiters
//!
//! `Throttle` and `Debounce` hold the timing state as plain values driven by
//! a millisecond clock, so the scheduling rules are testable off the browser.
//! `throttle` and `debounce` wrap callbacks for DOM event listeners.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// At most one fire per interval; extra calls are dropped
#[derive(Debug, Clone)]
pub struct Throttle {
    interval_ms: f64,
    /// End of the current cooldown window
    open_at: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: f64::from(interval_ms),
            open_at: None,
        }
    }

    /// Returns true when the call should run. A fired call opens a new window.
    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        match self.open_at {
            Some(open_at) if now_ms < open_at => false,
            _ => {
                self.open_at = Some(now_ms + self.interval_ms);
                true
            }
        }
    }
}

/// Fires once after a quiet period; every trigger pushes the deadline back
#[derive(Debug, Clone)]
pub struct Debounce {
    wait_ms: f64,
    deadline: Option<f64>,
}

impl Debounce {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms: f64::from(wait_ms),
            deadline: None,
        }
    }

    pub fn trigger(&mut self, now_ms: f64) {
        self.deadline = Some(now_ms + self.wait_ms);
    }

    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    /// Returns true exactly once when the deadline has passed
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Wrap `callback` so it runs at most once per `interval_ms`
pub fn throttle<E, F>(mut callback: F, interval_ms: u32) -> impl FnMut(E) + 'static
where
    E: 'static,
    F: FnMut(E) + 'static,
{
    let mut gate = Throttle::new(interval_ms);
    move |ev: E| {
        if gate.try_fire(js_sys::Date::now()) {
            callback(ev);
        }
    }
}

/// Wrap `callback` so it runs `wait_ms` after the last call, with that call's argument
pub fn debounce<E, F>(callback: F, wait_ms: u32) -> impl FnMut(E) + 'static
where
    E: 'static,
    F: FnMut(E) + 'static,
{
    let callback = Rc::new(RefCell::new(callback));
    let quiet = Rc::new(RefCell::new(Debounce::new(wait_ms)));
    let slot = TimerSlot::default();
    move |ev: E| {
        quiet.borrow_mut().trigger(js_sys::Date::now());
        let Some(deadline) = quiet.borrow().deadline() else {
            return;
        };
        let callback = Rc::clone(&callback);
        let quiet = Rc::clone(&quiet);
        slot.schedule(wait_ms, move || {
            // A later trigger moved the deadline; this timer is stale
            if quiet.borrow_mut().poll(deadline) {
                (callback.borrow_mut())(ev);
            }
        });
    }
}

/// Holds at most one handle; storing a new one drops the previous
struct HandleSlot<T> {
    held: Rc<RefCell<Option<T>>>,
}

impl<T> HandleSlot<T> {
    fn store(&self, handle: T) {
        let previous = self.held.replace(Some(handle));
        drop(previous);
    }

    fn take(&self) -> Option<T> {
        self.held.borrow_mut().take()
    }
}

impl<T> Clone for HandleSlot<T> {
    fn clone(&self) -> Self {
        Self {
            held: Rc::clone(&self.held),
        }
    }
}

impl<T> Default for HandleSlot<T> {
    fn default() -> Self {
        Self {
            held: Rc::new(RefCell::new(None)),
        }
    }
}

/// One pending timeout per owner. Scheduling replaces (and cancels) the
/// previous one, so delayed work never overlaps.
#[derive(Clone, Default)]
pub struct TimerSlot {
    pending: HandleSlot<Timeout>,
}

impl TimerSlot {
    pub fn schedule<F>(&self, delay_ms: u32, f: F)
    where
        F: FnOnce() + 'static,
    {
        let slot = self.pending.clone();
        let timeout = Timeout::new(delay_ms, move || {
            // Only a live timer fires, so the slot still holds this handle.
            // `f` may schedule into the emptied slot; the fired handle and its
            // closure are freed when this call unwinds.
            let fired = slot.take();
            f();
            drop(fired);
        });
        // Dropping the previous Timeout cancels it
        self.pending.store(timeout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttle_drops_calls_in_window() {
        let mut gate = Throttle::new(100);
        let fired: Vec<f64> = [0.0, 10.0, 50.0, 120.0]
            .into_iter()
            .filter(|t| gate.try_fire(*t))
            .collect();
        assert_eq!(fired, vec![0.0, 120.0]);
    }

    #[test]
    fn test_throttle_window_restarts_after_fire() {
        let mut gate = Throttle::new(100);
        assert!(gate.try_fire(0.0));
        assert!(gate.try_fire(100.0));
        assert!(!gate.try_fire(199.0));
        assert!(gate.try_fire(200.0));
    }

    #[test]
    fn test_debounce_fires_once_after_quiet_period() {
        let mut debounce = Debounce::new(50);
        let mut fired = Vec::new();
        let triggers = [0.0, 10.0, 20.0];
        for now in 0..=200 {
            let now = f64::from(now);
            if triggers.contains(&now) {
                debounce.trigger(now);
            }
            if debounce.poll(now) {
                fired.push(now);
            }
        }
        assert_eq!(fired, vec![70.0]);
    }

    /// Counts its own drops
    struct Tracked(Rc<std::cell::Cell<u32>>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_handle_slot_replacing_drops_previous() {
        let drops = Rc::new(std::cell::Cell::new(0));
        let slot = HandleSlot::default();
        slot.store(Tracked(Rc::clone(&drops)));
        assert_eq!(drops.get(), 0);

        slot.store(Tracked(Rc::clone(&drops)));
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_handle_slot_releases_fired_handle() {
        let drops = Rc::new(std::cell::Cell::new(0));
        let slot = HandleSlot::default();
        let shared = slot.clone();
        slot.store(Tracked(Rc::clone(&drops)));

        // Fire: take our own handle, reschedule, then release the fired one
        let fired = shared.take();
        assert!(fired.is_some());
        shared.store(Tracked(Rc::clone(&drops)));
        assert_eq!(drops.get(), 0);
        drop(fired);
        assert_eq!(drops.get(), 1);

        // Nothing is retained once the follow-up fires too
        drop(slot.take());
        assert_eq!(drops.get(), 2);
        assert!(slot.take().is_none());
    }

    #[test]
    fn test_debounce_has_no_leading_edge() {
        let mut debounce = Debounce::new(50);
        debounce.trigger(0.0);
        assert!(!debounce.poll(0.0));
        assert!(!debounce.poll(49.0));
        assert_eq!(debounce.deadline(), Some(50.0));
        assert!(debounce.poll(50.0));
        assert!(!debounce.poll(51.0));
    }
}
