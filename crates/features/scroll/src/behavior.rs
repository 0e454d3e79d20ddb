use crate::dom::{ACTIVATION_EVENT, ActivationEvent, Anchor, ListenerTarget, Page};
use crate::geometry::{ScrollConfig, ScrollToOptions, fragment_id};
use std::fmt::{self, Debug};
use tracing::{debug, trace};

/// Turns in-page link activations into smooth viewport scrolls.
///
/// Stateless between activations; the same instance may be mounted on any
/// number of anchors.
#[derive(Clone)]
pub struct SmoothScroll<P> {
    page: P,
    config: ScrollConfig,
}

impl<P: Page> SmoothScroll<P> {
    pub fn new(page: P) -> Self {
        Self::with_config(page, ScrollConfig::default())
    }

    pub const fn with_config(page: P, config: ScrollConfig) -> Self {
        Self { page, config }
    }

    #[must_use]
    pub const fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Handles one activation of `anchor`.
    ///
    /// Default navigation is always suppressed. Returns the scroll request
    /// issued to the page, or `None` if the link is not an in-page link or
    /// its target does not exist.
    pub fn on_activate<A, E>(&self, anchor: &A, event: &mut E) -> Option<ScrollToOptions>
    where
        A: Anchor + ?Sized,
        E: ActivationEvent + ?Sized,
    {
        event.prevent_default();

        let href = anchor.href();
        let Some(id) = fragment_id(href.as_deref()) else {
            trace!(href = ?href, "Not an in-page link");
            return None;
        };

        let Some(target_top) = self.page.element_top(id) else {
            debug!(id, "Scroll target not found");
            return None;
        };

        let request = self.config.request(target_top, self.page.scroll_y());
        trace!(id, top = request.top, "Scrolling to target");
        self.page.scroll_to(request);
        Some(request)
    }
}

impl<P: Page + Clone + 'static> SmoothScroll<P> {
    /// Attaches the behavior to `element`, once per element lifecycle.
    ///
    /// The returned [`Listener`] detaches on [`Listener::detach`] or drop.
    pub fn mount<E>(&self, element: &E) -> Listener<E>
    where
        E: Anchor + ListenerTarget + Clone + 'static,
    {
        let behavior = self.clone();
        let anchor = element.clone();
        let handle = element.add_listener(
            ACTIVATION_EVENT,
            Box::new(move |event| {
                behavior.on_activate(&anchor, event);
            }),
        );

        Listener { target: element.clone(), handle: Some(handle) }
    }
}

impl<P> Debug for SmoothScroll<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmoothScroll").field("config", &self.config).finish_non_exhaustive()
    }
}

/// A mounted behavior. Removes its event listener when detached or dropped.
#[must_use = "dropping the listener detaches it immediately"]
pub struct Listener<T: ListenerTarget> {
    target: T,
    handle: Option<T::Handle>,
}

impl<T: ListenerTarget> Listener<T> {
    pub fn detach(mut self) {
        self.remove();
    }

    /// Keeps the listener attached for the element's whole lifetime.
    pub fn forget(mut self) {
        self.handle = None;
    }

    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    fn remove(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.target.remove_listener(ACTIVATION_EVENT, handle);
        }
    }
}

impl<T: ListenerTarget> Drop for Listener<T> {
    fn drop(&mut self) {
        self.remove();
    }
}

impl<T: ListenerTarget> Debug for Listener<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener").field("attached", &self.is_attached()).finish_non_exhaustive()
    }
}
