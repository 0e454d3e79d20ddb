//! Smooth scrolling for in-page anchor links.
//!
//! Mounted on an `<a href="#section">`, the behavior cancels the default jump
//! and asks the page for a smooth scroll that leaves the target just below
//! the fixed header ([`HEADER_CLEARANCE`] pixels).
//!
//! This crate holds only the host-independent part: the scroll arithmetic,
//! the listener lifecycle and the [`Page`], [`Anchor`] and [`ListenerTarget`]
//! traits. It ships no concrete DOM binding. The web-sys (or webview bridge)
//! implementation of those traits lives out of tree with the SPA frontend,
//! which is the only place with a real document to bind to.
//!
//! ```rust,ignore
//! let scroll = SmoothScroll::new(window);
//! let listener = scroll.mount(&link);
//! // ... when the element unmounts
//! listener.detach();
//! ```

mod behavior;
mod dom;
mod geometry;

pub use crate::behavior::{Listener, SmoothScroll};
pub use crate::dom::{ACTIVATION_EVENT, ActivationEvent, Anchor, Callback, ListenerTarget, Page};
pub use crate::geometry::{
    HEADER_CLEARANCE, ScrollBehavior, ScrollConfig, ScrollToOptions, destination, fragment_id,
};
