//! Scroll position tracking for the header.
//!
//! The page's scroll offset is an external signal, so it is read through the
//! [`ScrollSource`] trait. The browser implementation listens to `window`
//! scroll events; [`ManualScroll`] is driven by hand and is what the tests use.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use crate::config::SCROLL_THRESHOLD;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScrollError {
    #[error("no browser window available")]
    NoWindow,
    #[error("scroll listener rejected by the DOM: {0}")]
    Listener(String),
}

impl From<JsValue> for ScrollError {
    fn from(value: JsValue) -> Self {
        ScrollError::Listener(format!("{:?}", value))
    }
}

/// Whether the header should use its compact treatment at `offset`.
/// The threshold itself still counts as unscrolled.
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

pub trait ScrollSource {
    /// Current vertical offset.
    fn offset(&self) -> f64;

    /// Calls `listener` with the new offset on every scroll event until the
    /// returned guard is dropped.
    fn subscribe(&self, listener: Rc<dyn Fn(f64)>) -> Result<Subscription, ScrollError>;
}

/// Keeps a listener registered. Dropping it deregisters the listener.
#[must_use = "the listener is removed as soon as the subscription is dropped"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// The real page: `window.scrollY` and the window `scroll` event.
pub struct WindowScroll {
    window: Window,
}

impl WindowScroll {
    pub fn new() -> Result<Self, ScrollError> {
        web_sys::window()
            .map(|window| Self { window })
            .ok_or(ScrollError::NoWindow)
    }
}

impl ScrollSource for WindowScroll {
    fn offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn subscribe(&self, listener: Rc<dyn Fn(f64)>) -> Result<Subscription, ScrollError> {
        let reader = self.window.clone();
        let scroll_callback = Closure::wrap(Box::new(move || {
            listener(reader.scroll_y().unwrap_or(0.0));
        }) as Box<dyn FnMut()>);

        self.window
            .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())?;

        let window = self.window.clone();
        Ok(Subscription::new(move || {
            if let Err(err) = window
                .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
            {
                warn!("failed to detach scroll listener: {:?}", err);
            }
        }))
    }
}

/// A scroll signal driven by explicit [`ManualScroll::dispatch`] calls.
/// Clones share the same signal.
#[derive(Clone, Default)]
pub struct ManualScroll {
    inner: Rc<RefCell<Listeners>>,
}

#[derive(Default)]
struct Listeners {
    offset: f64,
    next_id: u64,
    entries: Vec<(u64, Rc<dyn Fn(f64)>)>,
}

impl ManualScroll {
    /// Moves the signal to `offset` and notifies every live listener.
    pub fn dispatch(&self, offset: f64) {
        let listeners: Vec<Rc<dyn Fn(f64)>> = {
            let mut inner = self.inner.borrow_mut();
            inner.offset = offset;
            inner.entries.iter().map(|(_, listener)| listener.clone()).collect()
        };
        for listener in listeners {
            listener(offset);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

impl ScrollSource for ManualScroll {
    fn offset(&self) -> f64 {
        self.inner.borrow().offset
    }

    fn subscribe(&self, listener: Rc<dyn Fn(f64)>) -> Result<Subscription, ScrollError> {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.entries.push((id, listener));
            id
        };

        let inner: Weak<RefCell<Listeners>> = Rc::downgrade(&self.inner);
        Ok(Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.borrow_mut().entries.retain(|(entry, _)| *entry != id);
            }
        }))
    }
}

/// Shared, injectable scroll source. Two handles are equal when they point at
/// the same source, which lets the handle travel as a component property.
#[derive(Clone)]
pub struct ScrollHandle(Rc<dyn ScrollSource>);

impl ScrollHandle {
    pub fn new(source: impl ScrollSource + 'static) -> Self {
        Self(Rc::new(source))
    }

    /// The window's scroll signal, or an inert manual source when there is no window.
    pub fn browser() -> Self {
        match WindowScroll::new() {
            Ok(window) => Self::new(window),
            Err(err) => {
                warn!("{}, header will stay in its expanded state", err);
                Self::new(ManualScroll::default())
            }
        }
    }

    pub fn source(&self) -> &dyn ScrollSource {
        self.0.as_ref()
    }
}

impl PartialEq for ScrollHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Live `is_scrolled` flag for one mounted view.
///
/// The flag starts out `false` and is recomputed on every scroll event;
/// `on_change` only hears about flips. Dropping the tracker unsubscribes.
pub struct ScrollTracker {
    scrolled: Rc<Cell<bool>>,
    _subscription: Subscription,
}

impl ScrollTracker {
    pub fn mount<F>(source: &dyn ScrollSource, on_change: F) -> Result<Self, ScrollError>
    where
        F: Fn(bool) + 'static,
    {
        let scrolled = Rc::new(Cell::new(false));
        let listener: Rc<dyn Fn(f64)> = {
            let scrolled = scrolled.clone();
            Rc::new(move |offset: f64| {
                let next = is_scrolled(offset);
                if scrolled.replace(next) != next {
                    debug!("header scrolled: {} (offset {})", next, offset);
                    on_change(next);
                }
            })
        };
        let subscription = source.subscribe(listener)?;

        Ok(Self {
            scrolled,
            _subscription: subscription,
        })
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting_tracker(source: &ManualScroll) -> (ScrollTracker, Rc<Cell<u32>>) {
        let changes = Rc::new(Cell::new(0));
        let tracker = {
            let changes = changes.clone();
            ScrollTracker::mount(source, move |_| changes.set(changes.get() + 1))
                .expect("manual source never fails")
        };
        (tracker, changes)
    }

    #[test]
    fn threshold_boundary_is_unscrolled() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(19.5));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.01));
        assert!(is_scrolled(21.0));
        assert!(is_scrolled(5_000.0));
    }

    #[test]
    fn negative_offsets_count_as_top() {
        // elastic overscroll on some browsers reports negative values
        assert!(!is_scrolled(-40.0));
    }

    #[test]
    fn tracker_starts_unscrolled_even_if_page_is_already_down() {
        let source = ManualScroll::default();
        source.dispatch(500.0);
        let (tracker, changes) = counting_tracker(&source);
        assert!(!tracker.is_scrolled());
        assert_eq!(changes.get(), 0);
    }

    #[test]
    fn scroll_scenario_0_21_20() {
        let source = ManualScroll::default();
        let (tracker, _) = counting_tracker(&source);

        source.dispatch(0.0);
        assert!(!tracker.is_scrolled());
        source.dispatch(21.0);
        assert!(tracker.is_scrolled());
        source.dispatch(20.0);
        assert!(!tracker.is_scrolled());
    }

    #[test]
    fn on_change_fires_only_on_flips() {
        let source = ManualScroll::default();
        let (tracker, changes) = counting_tracker(&source);

        for offset in [5.0, 10.0, 15.0, 20.0] {
            source.dispatch(offset);
        }
        assert_eq!(changes.get(), 0);

        for offset in [25.0, 100.0, 300.0] {
            source.dispatch(offset);
        }
        assert_eq!(changes.get(), 1);
        assert!(tracker.is_scrolled());

        source.dispatch(3.0);
        assert_eq!(changes.get(), 2);
        assert!(!tracker.is_scrolled());
    }

    #[test]
    fn unmount_removes_listener() {
        let source = ManualScroll::default();
        let (tracker, changes) = counting_tracker(&source);
        assert_eq!(source.listener_count(), 1);

        drop(tracker);
        assert_eq!(source.listener_count(), 0);

        source.dispatch(400.0);
        assert_eq!(changes.get(), 0);
    }

    #[test]
    fn trackers_on_one_source_are_independent() {
        let source = ManualScroll::default();
        let (first, first_changes) = counting_tracker(&source);
        let (second, second_changes) = counting_tracker(&source);
        assert_eq!(source.listener_count(), 2);

        source.dispatch(50.0);
        assert!(first.is_scrolled());
        assert!(second.is_scrolled());

        drop(first);
        assert_eq!(source.listener_count(), 1);

        source.dispatch(0.0);
        assert_eq!(first_changes.get(), 1);
        assert_eq!(second_changes.get(), 2);
        assert!(!second.is_scrolled());
    }

    #[test]
    fn separate_sources_do_not_leak_into_each_other() {
        let a = ManualScroll::default();
        let b = ManualScroll::default();
        let (on_a, _) = counting_tracker(&a);
        let (on_b, _) = counting_tracker(&b);

        a.dispatch(80.0);
        assert!(on_a.is_scrolled());
        assert!(!on_b.is_scrolled());
    }

    #[test]
    fn manual_source_remembers_offset_and_shares_state_across_clones() {
        let source = ManualScroll::default();
        let clone = source.clone();
        assert_eq!(source.offset(), 0.0);

        clone.dispatch(42.0);
        assert_eq!(source.offset(), 42.0);

        let (_tracker, _) = counting_tracker(&clone);
        assert_eq!(source.listener_count(), 1);
    }

    #[test]
    fn subscription_outliving_its_source_is_harmless() {
        let source = ManualScroll::default();
        let (tracker, _) = counting_tracker(&source);
        drop(source);
        drop(tracker);
    }

    #[test]
    fn listener_may_drop_its_own_subscription_mid_dispatch() {
        let source = ManualScroll::default();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let listener: Rc<dyn Fn(f64)> = {
            let slot = slot.clone();
            Rc::new(move |_| {
                slot.borrow_mut().take();
            })
        };
        *slot.borrow_mut() = Some(source.subscribe(listener).unwrap());
        assert_eq!(source.listener_count(), 1);

        source.dispatch(30.0);
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn handles_compare_by_source_identity() {
        let handle = ScrollHandle::new(ManualScroll::default());
        let same = handle.clone();
        let other = ScrollHandle::new(ManualScroll::default());
        assert!(handle == same);
        assert!(handle != other);
    }

    #[test]
    fn listener_error_carries_dom_message() {
        let err = ScrollError::Listener("TypeError".into());
        assert_eq!(err.to_string(), "scroll listener rejected by the DOM: TypeError");
        assert_eq!(ScrollError::NoWindow.to_string(), "no browser window available");
    }
}
