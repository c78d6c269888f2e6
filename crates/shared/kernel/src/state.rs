//! Shared-state seam between async drivers and whatever owns the model.
//!
//! Drivers mutate their model only through [`StateCell`], so the same driver runs
//! against a Dioxus signal in the page and an `Rc<RefCell<_>>` in tests.

use std::cell::RefCell;
use std::rc::Rc;

pub trait StateCell<T> {
    /// Reads the current value without subscribing to changes.
    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R;

    /// Mutates the value and notifies observers.
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R;
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }

    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

#[cfg(feature = "client")]
mod signal {
    use super::StateCell;
    use dioxus::prelude::*;

    impl<T: 'static> StateCell<T> for Signal<T> {
        fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
            f(&self.peek())
        }

        fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
            f(&mut self.write())
        }
    }
}
