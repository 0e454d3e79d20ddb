//! Scroll target resolution: fragment parsing and destination offsets.

use serde::{Deserialize, Serialize};

/// Height of the fixed page header, in CSS pixels.
pub const HEADER_CLEARANCE: f64 = 80.0;

/// How the viewport travels to its destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Auto,
    Instant,
    #[default]
    Smooth,
}

/// A viewport scroll request, shaped like the browser's `ScrollToOptions`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollToOptions {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// Tuning for [`SmoothScroll`](crate::SmoothScroll).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollConfig {
    /// Space kept free above the target for the fixed header.
    pub header_clearance: f64,
    pub behavior: ScrollBehavior,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { header_clearance: HEADER_CLEARANCE, behavior: ScrollBehavior::Smooth }
    }
}

impl ScrollConfig {
    /// Scroll request for a target at `target_top` (viewport-relative) while
    /// the page is scrolled by `scroll_y`.
    #[must_use]
    pub fn request(&self, target_top: f64, scroll_y: f64) -> ScrollToOptions {
        ScrollToOptions {
            top: target_top + scroll_y - self.header_clearance,
            behavior: self.behavior,
        }
    }
}

/// Element id referenced by an in-page link, if `href` is one.
///
/// `"#about"` yields `Some("about")`; absent hrefs and links to other pages
/// yield `None`. A bare `"#"` yields `Some("")`, which matches no element.
#[must_use]
pub fn fragment_id(href: Option<&str>) -> Option<&str> {
    href?.strip_prefix('#')
}

/// Document offset that brings a target just below the fixed header.
#[must_use]
pub fn destination(target_top: f64, scroll_y: f64) -> f64 {
    ScrollConfig::default().request(target_top, scroll_y).top
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_requires_leading_hash() {
        assert_eq!(fragment_id(Some("#about")), Some("about"));
        assert_eq!(fragment_id(Some("#")), Some(""));
        assert_eq!(fragment_id(Some("/about#team")), None);
        assert_eq!(fragment_id(Some("https://example.com")), None);
        assert_eq!(fragment_id(None), None);
    }

    #[test]
    fn destination_subtracts_header() {
        assert!((destination(500.0, 1200.0) - 1620.0).abs() < f64::EPSILON);
        assert!((destination(40.0, 0.0) + 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn custom_clearance_and_behavior() {
        let config = ScrollConfig { header_clearance: 0.0, behavior: ScrollBehavior::Instant };
        let request = config.request(100.0, 50.0);

        assert!((request.top - 150.0).abs() < f64::EPSILON);
        assert_eq!(request.behavior, ScrollBehavior::Instant);
    }

    #[test]
    fn default_config() {
        let config = ScrollConfig::default();
        assert!((config.header_clearance - HEADER_CLEARANCE).abs() < f64::EPSILON);
        assert_eq!(config.behavior, ScrollBehavior::Smooth);
    }
}
