//! The process-wide routing state cell.
//!
//! One [`Router`] owns the observable fragment for the whole view tree. The
//! resolver and the navigation commands are its only writers; everything
//! else is a read-only subscriber. Fragment changes arrive two ways:
//!
//! - **Inbound**: the host observes an external change (back/forward, a
//!   typed URL) and calls [`Router::on_fragment_change`].
//! - **Outbound**: view code calls [`Router::navigate_to`] or
//!   [`Router::navigate_with_scroll`], which write the encoded fragment into
//!   the cell and run the same resolve-and-publish path.
//!
//! Either way the fragment is re-resolved synchronously and the new
//! [`Route`] is published to every subscriber before the call returns. The
//! initial route is computed at construction, so no observer can ever see a
//! router without a current route.
//!
//! The only suspension point in the whole component is the deferred scroll:
//! a detached thread sleeps through a short settle delay, then asks the view
//! layer to scroll the anchor into view.

use crate::route::{self, Route};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Anchor lookup implemented by the view layer.
///
/// Returns false when no element matches the selector; the router treats
/// that as a no-op, never an error.
pub trait ScrollTarget: Send + Sync {
    fn scroll_into_view(&self, selector: &str) -> bool;
}

type Subscriber = Box<dyn Fn(Route) + Send + Sync>;

struct Cell {
    fragment: String,
    route: Route,
}

/// Single-owner fragment cell with an explicit subscribe/notify contract.
///
/// Shared across the view tree as `Arc<Router>`. All entry points take
/// `&self`; the cell and subscriber list are independently locked.
pub struct Router {
    cell: Mutex<Cell>,
    subscribers: Mutex<Vec<Subscriber>>,
    scroll_delay: Duration,
}

impl Router {
    /// Settle delay between a navigation and its scroll attempt, long enough
    /// for the target view to mount.
    pub const SCROLL_SETTLE: Duration = Duration::from_millis(50);

    /// Create a router and resolve the fragment present at startup.
    pub fn new(initial_fragment: &str) -> Self {
        Self::with_scroll_delay(initial_fragment, Self::SCROLL_SETTLE)
    }

    /// Create a router with a custom scroll settle delay.
    pub fn with_scroll_delay(initial_fragment: &str, scroll_delay: Duration) -> Self {
        Self {
            cell: Mutex::new(Cell {
                fragment: initial_fragment.to_string(),
                route: route::resolve(initial_fragment),
            }),
            subscribers: Mutex::new(Vec::new()),
            scroll_delay,
        }
    }

    /// The last resolved route.
    pub fn current(&self) -> Route {
        self.cell.lock().unwrap().route
    }

    /// The raw fragment currently in the cell.
    pub fn fragment(&self) -> String {
        self.cell.lock().unwrap().fragment.clone()
    }

    /// Register an observer for published routes.
    ///
    /// Callbacks run on the thread that triggered the notification, with the
    /// subscriber list locked: do not subscribe from inside a callback.
    pub fn subscribe(&self, callback: impl Fn(Route) + Send + Sync + 'static) {
        self.subscribers.lock().unwrap().push(Box::new(callback));
    }

    /// Inbound notification: the observable fragment changed externally.
    ///
    /// Re-resolves and publishes on every call, even if the fragment value
    /// is unchanged. Subscribers own their own dedup.
    pub fn on_fragment_change(&self, fragment: &str) {
        let resolved = route::resolve(fragment);
        {
            let mut cell = self.cell.lock().unwrap();
            cell.fragment = fragment.to_string();
            cell.route = resolved;
        }
        self.publish(resolved);
    }

    /// Outbound navigation: encode the target route into the fragment cell.
    pub fn navigate_to(&self, target: Route) {
        self.on_fragment_change(&target.fragment());
    }

    /// Navigate, then scroll `anchor` into view once the new view has had
    /// the settle delay to mount.
    ///
    /// The scroll runs on a detached thread and is fire-and-forget: there is
    /// no cancellation, so a rapid sequence of navigations can fire a scroll
    /// targeting an anchor that is no longer on screen. A missing anchor is
    /// silently ignored.
    pub fn navigate_with_scroll(
        &self,
        target: Route,
        anchor: &str,
        view: Arc<dyn ScrollTarget>,
    ) {
        self.navigate_to(target);
        let anchor = anchor.to_string();
        let delay = self.scroll_delay;
        thread::spawn(move || {
            thread::sleep(delay);
            view.scroll_into_view(&anchor);
        });
    }

    fn publish(&self, route: Route) {
        let subscribers = self.subscribers.lock().unwrap();
        for callback in subscribers.iter() {
            callback(route);
        }
    }
}
