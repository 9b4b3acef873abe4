use std::cell::RefCell;

use log::debug;
use web_sys::window;

/// Counts open modals so only the last release unlocks the page.
#[derive(Debug, Default)]
pub struct LockCount(usize);

impl LockCount {
    /// True when this is the first holder.
    pub fn acquire(&mut self) -> bool {
        self.0 += 1;
        self.0 == 1
    }

    /// True when this was the last holder.
    pub fn release(&mut self) -> bool {
        match self.0 {
            0 => false,
            n => {
                self.0 = n - 1;
                self.0 == 0
            }
        }
    }

    #[cfg(test)]
    pub fn holders(&self) -> usize {
        self.0
    }
}

thread_local! {
    static LOCKS: RefCell<LockCount> = RefCell::new(LockCount::default());
}

/// Keeps the page from scrolling behind a modal for as long as it is alive.
/// Dropping it, including on unmount, releases the lock.
#[derive(Debug)]
pub struct ScrollLock {
    _held: (),
}

impl ScrollLock {
    pub fn acquire() -> Self {
        if LOCKS.with(|locks| locks.borrow_mut().acquire()) {
            debug!("Locking page scroll");
            set_body_overflow("hidden");
        }
        Self { _held: () }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        if LOCKS.with(|locks| locks.borrow_mut().release()) {
            debug!("Unlocking page scroll");
            set_body_overflow("");
        }
    }
}

fn set_body_overflow(value: &str) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let style = body.style();
        let result = if value.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", value)
        };
        if result.is_err() {
            log::warn!("Could not update body overflow");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_holder_locks_and_unlocks() {
        let mut count = LockCount::default();
        assert!(count.acquire());
        assert!(count.release());
        assert_eq!(count.holders(), 0);
    }

    #[test]
    fn nested_holders_unlock_on_the_last_release() {
        let mut count = LockCount::default();
        assert!(count.acquire());
        assert!(!count.acquire());
        assert!(!count.release());
        assert!(count.release());
    }

    #[test]
    fn stray_release_is_harmless() {
        let mut count = LockCount::default();
        assert!(!count.release());
        assert!(count.acquire());
    }
}
