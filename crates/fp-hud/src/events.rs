//! Host event wiring
//!
//! The host editor owns the pointer and selection handling; the HUD plugs
//! into it through two callback registries and reports back through a
//! shared redraw flag polled once per frame.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use fp_core::SharedItem;

/// Ordered registry of event handlers
///
/// Handlers run synchronously, in registration order, each independent of
/// the others.
pub struct Callbacks<A> {
    handlers: Vec<Box<dyn FnMut(&A)>>,
}

impl<A> Callbacks<A> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Registers a handler.
    pub fn add(&mut self, handler: impl FnMut(&A) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Invokes every registered handler with `arg`.
    pub fn emit(&mut self, arg: &A) {
        for handler in &mut self.handlers {
            handler(arg);
        }
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// True when no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<A> Default for Callbacks<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Selection notifications published by the host controller
#[derive(Default)]
pub struct SelectionEvents {
    /// Fired when an item becomes the current selection
    pub item_selected: Callbacks<SharedItem>,
    /// Fired when the current selection is cleared
    pub item_unselected: Callbacks<()>,
}

impl SelectionEvents {
    /// Creates empty registries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes an item-selected notification.
    pub fn emit_selected(&mut self, item: &SharedItem) {
        self.item_selected.emit(item);
    }

    /// Publishes an item-unselected notification.
    pub fn emit_unselected(&mut self) {
        self.item_unselected.emit(&());
    }
}

/// Clonable re-render request flag
///
/// The HUD raises it after any visible change; the host takes it once per
/// frame and schedules a redraw when set.
#[derive(Debug, Clone, Default)]
pub struct RedrawSignal(Arc<AtomicBool>);

impl RedrawSignal {
    /// Creates a lowered signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a redraw.
    pub fn request(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Takes the request, lowering the flag.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::Relaxed)
    }

    /// True when a redraw is pending.
    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_callbacks_run_in_registration_order() {
        let order = Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut callbacks = Callbacks::new();
        for tag in ["a", "b", "c"] {
            let order = Rc::clone(&order);
            callbacks.add(move |_: &()| order.borrow_mut().push(tag));
        }
        callbacks.emit(&());
        assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_emit_with_no_handlers_is_noop() {
        let mut events = SelectionEvents::new();
        events.emit_unselected();
        assert!(events.item_unselected.is_empty());
    }

    #[test]
    fn test_redraw_signal_take_lowers_flag() {
        let signal = RedrawSignal::new();
        assert!(!signal.is_requested());
        signal.request();
        assert!(signal.is_requested());
        assert!(signal.take());
        assert!(!signal.take());
    }

    #[test]
    fn test_redraw_signal_clones_share_state() {
        let signal = RedrawSignal::new();
        let other = signal.clone();
        signal.request();
        assert!(other.take());
        assert!(!signal.is_requested());
    }

    #[test]
    fn test_callbacks_receive_argument() {
        let seen = Rc::new(Cell::new(0u32));
        let mut callbacks = Callbacks::new();
        let seen_in = Rc::clone(&seen);
        callbacks.add(move |n: &u32| seen_in.set(*n));
        callbacks.emit(&7);
        assert_eq!(seen.get(), 7);
    }
}
