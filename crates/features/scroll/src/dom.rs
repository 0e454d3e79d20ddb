//! The slice of the DOM the scroll behavior needs.
//!
//! Hosts implement these traits over their own element and window handles
//! (web-sys, a webview bridge, or an in-memory fake in tests).

use crate::geometry::ScrollToOptions;

/// Event name the behavior listens for.
pub const ACTIVATION_EVENT: &str = "click";

/// The document and its viewport.
pub trait Page {
    /// Top edge of the element with the given id, relative to the viewport.
    fn element_top(&self, id: &str) -> Option<f64>;

    /// Current vertical scroll offset of the viewport.
    fn scroll_y(&self) -> f64;

    /// Starts a viewport scroll. Does not wait for it to finish.
    fn scroll_to(&self, options: ScrollToOptions);
}

/// A link element.
pub trait Anchor {
    /// Value of the `href` attribute as written in the markup.
    fn href(&self) -> Option<String>;
}

/// The event delivered when a link is activated.
pub trait ActivationEvent {
    fn prevent_default(&mut self);
}

pub type Callback = Box<dyn FnMut(&mut dyn ActivationEvent)>;

/// An element that accepts event listeners.
pub trait ListenerTarget {
    /// Token identifying one registration.
    type Handle;

    fn add_listener(&self, event: &'static str, callback: Callback) -> Self::Handle;

    fn remove_listener(&self, event: &'static str, handle: Self::Handle);
}
