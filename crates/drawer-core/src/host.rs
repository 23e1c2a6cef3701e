//! The document contract a drawer is bound against.
//!
//! The drawer never touches a concrete DOM. Everything it needs to discover
//! its parts, measure scrollable content and write styles goes through
//! [`DrawerHost`], so the same state machine runs against `web-sys` in the
//! browser and against a synthetic tree in tests.

use crate::style::{Transition, Translate};
use smallvec::SmallVec;
use std::fmt;

/// Small list of nodes; drawers rarely have more than a handful of triggers.
pub type NodeList<N> = SmallVec<[N; 4]>;

/// Structural role markers from the drawer markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Drawer,
    Backdrop,
    Container,
    Content,
}

impl Role {
    /// Value of the `data-role` attribute for this role.
    pub fn marker(&self) -> &'static str {
        match self {
            Role::Drawer => "drawer",
            Role::Backdrop => "drawer-background",
            Role::Container => "drawer-container",
            Role::Content => "drawer-content",
        }
    }

    /// CSS selector matching elements with this role.
    pub fn selector(&self) -> String {
        format!("[{}={}]", crate::ROLE_ATTRIBUTE, self.marker())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// Scroll geometry of a single element, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_height: f32,
    pub client_height: f32,
    pub scroll_top: f32,
}

impl ScrollMetrics {
    pub const fn new(scroll_height: f32, client_height: f32, scroll_top: f32) -> Self {
        Self {
            scroll_height,
            client_height,
            scroll_top,
        }
    }

    /// Content is taller than the visible box.
    pub fn is_scrollable(&self) -> bool {
        self.scroll_height > self.client_height
    }

    /// Scrolled all the way up. Negative values show up during rubber-band bounce.
    pub fn at_top(&self) -> bool {
        self.scroll_top <= 0.0
    }
}

/// Value of the `overscroll-behavior` hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverscrollBehavior {
    Auto,
    None,
}

impl OverscrollBehavior {
    pub fn css(&self) -> &'static str {
        match self {
            OverscrollBehavior::Auto => "auto",
            OverscrollBehavior::None => "none",
        }
    }
}

/// Read/write access to the scrollable ancestry of a node.
pub trait ScrollTree {
    type Node: Clone + PartialEq + fmt::Debug;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    fn scroll_metrics(&self, node: &Self::Node) -> ScrollMetrics;

    fn set_overscroll(&self, node: &Self::Node, behavior: OverscrollBehavior);
}

/// Everything a drawer instance needs from the page.
///
/// Methods take `&self`; implementations are expected to use interior
/// mutability the same way the DOM does.
pub trait DrawerHost: ScrollTree {
    // Discovery

    /// Every drawer root present in the document, in document order.
    fn drawer_roots(&self) -> Vec<Self::Node>;

    /// The element's `id`, if it has a non-empty one.
    fn element_id(&self, node: &Self::Node) -> Option<String>;

    /// First descendant of `root` carrying `role`.
    fn find_part(&self, root: &Self::Node, role: Role) -> Option<Self::Node>;

    /// Every element in the document whose trigger attribute equals `id`.
    fn find_triggers(&self, id: &str) -> NodeList<Self::Node>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    // Presentation

    /// Toggle whether the node is rendered at all (`display`).
    fn set_visible(&self, node: &Self::Node, visible: bool);

    fn set_translate(&self, node: &Self::Node, translate: Translate);

    fn set_opacity(&self, node: &Self::Node, opacity: f32);

    /// Declare a transition, or remove it with `None` so style writes apply instantly.
    fn set_transition(&self, node: &Self::Node, transition: Option<Transition>);

    /// Freeze or release scrolling of the page underneath every drawer.
    fn set_page_scroll_locked(&self, locked: bool);

    // Measurement

    /// Top edge of the node relative to the viewport, transforms included.
    fn viewport_top(&self, node: &Self::Node) -> f32;

    fn viewport_height(&self) -> f32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrollable_requires_overflowing_content() {
        assert!(ScrollMetrics::new(800.0, 400.0, 0.0).is_scrollable());
        assert!(!ScrollMetrics::new(400.0, 400.0, 0.0).is_scrollable());
    }

    #[test]
    fn bounce_counts_as_top() {
        assert!(ScrollMetrics::new(800.0, 400.0, -12.0).at_top());
        assert!(!ScrollMetrics::new(800.0, 400.0, 40.0).at_top());
    }

    #[test]
    fn role_selectors_match_markup() {
        assert_eq!(Role::Backdrop.selector(), "[data-role=drawer-background]");
        assert_eq!(Role::Content.to_string(), "drawer-content");
    }
}
