//! Scroll-versus-drag arbitration.
//!
//! A drawer that contains a long list must let the list scroll before the
//! sheet starts moving. For every move sample the arbiter walks from the
//! event target up to the drawer's content region and lets the first
//! scrollable element it meets decide:
//!
//! - pulling down on content already scrolled to its top drags the sheet,
//!   and the scrollable chain gets `overscroll-behavior: none` so the pull
//!   does not also bounce the page;
//! - anything else scrolls the content, and the chain gets
//!   `overscroll-behavior: auto` back.
//!
//! Targets with no scrollable element in between always drag.

use drawer_core::{OverscrollBehavior, ScrollTree};
use smallvec::SmallVec;
use std::fmt;

/// Direction of travel relative to where the gesture started.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragDecision {
    /// The sheet follows the pointer.
    Drag,
    /// Nested content scrolls; the sheet stays put.
    Scroll,
}

/// Decides drag-or-scroll for targets inside one drawer.
#[derive(Clone)]
pub struct ScrollArbiter<N> {
    root: N,
    content: Option<N>,
}

impl<N> ScrollArbiter<N>
where
    N: Clone + PartialEq + fmt::Debug,
{
    /// `root` bounds every walk from above. `content` is the last element
    /// examined when the target lies inside it.
    pub fn new(root: N, content: Option<N>) -> Self {
        Self { root, content }
    }

    pub fn decide<T>(&self, tree: &T, target: Option<&N>, direction: Direction) -> DragDecision
    where
        T: ScrollTree<Node = N>,
    {
        let Some(chain) = target.and_then(|target| self.chain(tree, target)) else {
            return DragDecision::Drag;
        };

        for (index, node) in chain.iter().enumerate() {
            let metrics = tree.scroll_metrics(node);
            if !metrics.is_scrollable() {
                continue;
            }
            let (decision, behavior) = if direction == Direction::Down && metrics.at_top() {
                (DragDecision::Drag, OverscrollBehavior::None)
            } else {
                (DragDecision::Scroll, OverscrollBehavior::Auto)
            };
            Self::mark(tree, &chain[index..], behavior);
            log::trace!("{node:?} is scrollable: {decision:?} ({direction:?})");
            return decision;
        }

        DragDecision::Drag
    }

    /// Ancestry of `target` inside the drawer, nearest first. `None` when the
    /// target is not inside this drawer's root.
    fn chain<T>(&self, tree: &T, target: &N) -> Option<SmallVec<[N; 8]>>
    where
        T: ScrollTree<Node = N>,
    {
        let mut chain = SmallVec::new();
        let mut current = Some(target.clone());
        while let Some(node) = current {
            if node == self.root {
                return Some(chain);
            }
            let is_content = self.content.as_ref() == Some(&node);
            current = tree.parent(&node);
            chain.push(node);
            if is_content {
                return Some(chain);
            }
        }
        None
    }

    fn mark<T>(tree: &T, nodes: &[N], behavior: OverscrollBehavior)
    where
        T: ScrollTree<Node = N>,
    {
        for node in nodes {
            if tree.scroll_metrics(node).is_scrollable() {
                tree.set_overscroll(node, behavior);
            }
        }
    }
}

impl<N: fmt::Debug> fmt::Debug for ScrollArbiter<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollArbiter")
            .field("root", &self.root)
            .field("content", &self.content)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawer_core::ScrollMetrics;
    use rustc_hash::FxHashMap;
    use std::cell::RefCell;

    /// node -> (parent, metrics)
    #[derive(Default)]
    struct Tree {
        nodes: FxHashMap<u32, (Option<u32>, ScrollMetrics)>,
        hints: RefCell<FxHashMap<u32, OverscrollBehavior>>,
    }

    impl Tree {
        fn node(mut self, id: u32, parent: Option<u32>, metrics: ScrollMetrics) -> Self {
            self.nodes.insert(id, (parent, metrics));
            self
        }

        fn hint(&self, id: u32) -> Option<OverscrollBehavior> {
            self.hints.borrow().get(&id).copied()
        }
    }

    impl ScrollTree for Tree {
        type Node = u32;

        fn parent(&self, node: &u32) -> Option<u32> {
            self.nodes.get(node).and_then(|(parent, _)| *parent)
        }

        fn scroll_metrics(&self, node: &u32) -> ScrollMetrics {
            self.nodes.get(node).map(|(_, metrics)| *metrics).unwrap_or_default()
        }

        fn set_overscroll(&self, node: &u32, behavior: OverscrollBehavior) {
            self.hints.borrow_mut().insert(*node, behavior);
        }
    }

    const FLAT: ScrollMetrics = ScrollMetrics::new(100.0, 100.0, 0.0);

    // 0 body (scrollable) > 1 root > 2 container > 3 content > 4 list > 5 row
    fn fixture(content: ScrollMetrics, list: ScrollMetrics) -> Tree {
        Tree::default()
            .node(0, None, ScrollMetrics::new(3000.0, 800.0, 0.0))
            .node(1, Some(0), FLAT)
            .node(2, Some(1), FLAT)
            .node(3, Some(2), content)
            .node(4, Some(3), list)
            .node(5, Some(4), FLAT)
    }

    fn arbiter() -> ScrollArbiter<u32> {
        ScrollArbiter::new(1, Some(3))
    }

    #[test]
    fn nothing_scrollable_drags() {
        let tree = fixture(FLAT, FLAT);
        assert_eq!(arbiter().decide(&tree, Some(&5), Direction::Down), DragDecision::Drag);
        assert_eq!(arbiter().decide(&tree, Some(&5), Direction::Up), DragDecision::Drag);
        assert!(tree.hints.borrow().is_empty());
    }

    #[test]
    fn scrolled_list_takes_downward_gesture() {
        let tree = fixture(FLAT, ScrollMetrics::new(2000.0, 600.0, 40.0));
        assert_eq!(
            arbiter().decide(&tree, Some(&5), Direction::Down),
            DragDecision::Scroll
        );
        assert_eq!(tree.hint(4), Some(OverscrollBehavior::Auto));
    }

    #[test]
    fn list_at_top_lets_sheet_drag_and_blocks_bounce() {
        let tree = fixture(
            ScrollMetrics::new(900.0, 700.0, 0.0),
            ScrollMetrics::new(2000.0, 600.0, 0.0),
        );
        assert_eq!(arbiter().decide(&tree, Some(&5), Direction::Down), DragDecision::Drag);
        assert_eq!(tree.hint(4), Some(OverscrollBehavior::None));
        assert_eq!(tree.hint(3), Some(OverscrollBehavior::None));
        assert_eq!(tree.hint(2), None);
        // The page body sits above the drawer root and is never touched.
        assert_eq!(tree.hint(0), None);
    }

    #[test]
    fn upward_gesture_scrolls_content_first() {
        let tree = fixture(ScrollMetrics::new(2000.0, 700.0, 0.0), FLAT);
        assert_eq!(
            arbiter().decide(&tree, Some(&5), Direction::Up),
            DragDecision::Scroll
        );
        assert_eq!(tree.hint(3), Some(OverscrollBehavior::Auto));
    }

    #[test]
    fn target_outside_content_ignores_page_scrollers() {
        let tree = fixture(FLAT, FLAT);
        // Container (2) climbs to root and stops; the scrollable body is never reached.
        assert_eq!(arbiter().decide(&tree, Some(&2), Direction::Up), DragDecision::Drag);
        // Body itself is outside the drawer.
        assert_eq!(arbiter().decide(&tree, Some(&0), Direction::Up), DragDecision::Drag);
        assert!(tree.hints.borrow().is_empty());
    }

    #[test]
    fn hints_skip_flat_wrappers_between_scrollables() {
        // 1 root > 2 container > 3 content (scrollable) > 4 wrapper > 5 list (scrollable) > 6 row
        let tree = Tree::default()
            .node(1, None, FLAT)
            .node(2, Some(1), FLAT)
            .node(3, Some(2), ScrollMetrics::new(1500.0, 700.0, 0.0))
            .node(4, Some(3), FLAT)
            .node(5, Some(4), ScrollMetrics::new(2000.0, 600.0, 0.0))
            .node(6, Some(5), FLAT);
        assert_eq!(arbiter().decide(&tree, Some(&6), Direction::Down), DragDecision::Drag);
        assert_eq!(tree.hint(5), Some(OverscrollBehavior::None));
        assert_eq!(tree.hint(4), None);
        assert_eq!(tree.hint(3), Some(OverscrollBehavior::None));
        assert_eq!(tree.hint(2), None);
    }

    #[test]
    fn missing_target_drags() {
        let tree = fixture(FLAT, FLAT);
        assert_eq!(arbiter().decide(&tree, None, Direction::Down), DragDecision::Drag);
    }
}
