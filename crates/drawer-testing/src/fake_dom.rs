//! In-memory document implementing [`DrawerHost`].
//!
//! Nodes form a plain tree with attributes, scroll metrics and a vertical
//! layout box. Every style write is recorded so tests can assert both the
//! final style and the order it was written in.

use drawer_core::{
    DrawerHost, NodeList, OverscrollBehavior, Role, ScrollMetrics, ScrollTree, Transition,
    Translate, ROLE_ATTRIBUTE, TRIGGER_ATTRIBUTE,
};
use rustc_hash::FxHashMap;
use std::cell::{Cell, RefCell};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Last value written for each style property, `None` when never written.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FakeStyle {
    pub visible: Option<bool>,
    pub translate: Option<Translate>,
    pub opacity: Option<f32>,
    pub transition: Option<Option<Transition>>,
    pub overscroll: Option<OverscrollBehavior>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StyleWrite {
    Visible(NodeId, bool),
    Translate(NodeId, Translate),
    Opacity(NodeId, f32),
    Transition(NodeId, Option<Transition>),
    Overscroll(NodeId, OverscrollBehavior),
    PageScrollLock(bool),
}

#[derive(Debug, Default)]
struct FakeNode {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attributes: FxHashMap<String, String>,
    metrics: ScrollMetrics,
    layout_top: f32,
    height: f32,
    style: FakeStyle,
}

pub struct FakeDom {
    nodes: RefCell<Vec<FakeNode>>,
    viewport_height: Cell<f32>,
    page_scroll_locked: Cell<bool>,
    writes: RefCell<Vec<StyleWrite>>,
}

impl FakeDom {
    /// Empty document containing only the body.
    pub fn new(viewport_height: f32) -> Self {
        let body = FakeNode {
            height: viewport_height,
            ..FakeNode::default()
        };
        Self {
            nodes: RefCell::new(vec![body]),
            viewport_height: Cell::new(viewport_height),
            page_scroll_locked: Cell::new(false),
            writes: RefCell::new(Vec::new()),
        }
    }

    pub fn body(&self) -> NodeId {
        NodeId(0)
    }

    pub fn append(&self, parent: NodeId) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(FakeNode {
            parent: Some(parent),
            ..FakeNode::default()
        });
        nodes[parent.0].children.push(id);
        id
    }

    pub fn set_attribute(&self, node: NodeId, name: &str, value: &str) {
        self.nodes.borrow_mut()[node.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn set_scroll_metrics(&self, node: NodeId, metrics: ScrollMetrics) {
        self.nodes.borrow_mut()[node.0].metrics = metrics;
    }

    pub fn scroll_to(&self, node: NodeId, scroll_top: f32) {
        self.nodes.borrow_mut()[node.0].metrics.scroll_top = scroll_top;
    }

    /// Place the node's untransformed box at `top` with `height`.
    pub fn set_layout(&self, node: NodeId, top: f32, height: f32) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[node.0].layout_top = top;
        nodes[node.0].height = height;
    }

    pub fn set_viewport_height(&self, height: f32) {
        self.viewport_height.set(height);
    }

    pub fn style(&self, node: NodeId) -> FakeStyle {
        self.nodes.borrow()[node.0].style.clone()
    }

    pub fn page_scroll_locked(&self) -> bool {
        self.page_scroll_locked.get()
    }

    pub fn writes(&self) -> Vec<StyleWrite> {
        self.writes.borrow().clone()
    }

    pub fn take_writes(&self) -> Vec<StyleWrite> {
        std::mem::take(&mut *self.writes.borrow_mut())
    }

    /// Nodes in document order starting at `from` (included).
    fn descendants(&self, from: NodeId) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut order = Vec::new();
        let mut stack = vec![from];
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(nodes[node.0].children.iter().rev().copied());
        }
        order
    }

    fn matching(&self, from: NodeId, name: &str, value: &str) -> Vec<NodeId> {
        self.descendants(from)
            .into_iter()
            .filter(|node| self.attribute(node, name).as_deref() == Some(value))
            .collect()
    }

    fn record(&self, write: StyleWrite) {
        self.writes.borrow_mut().push(write);
    }

    fn with_style(&self, node: NodeId, update: impl FnOnce(&mut FakeStyle)) {
        update(&mut self.nodes.borrow_mut()[node.0].style);
    }
}

impl ScrollTree for FakeDom {
    type Node = NodeId;

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.nodes.borrow()[node.0].parent
    }

    fn scroll_metrics(&self, node: &NodeId) -> ScrollMetrics {
        self.nodes.borrow()[node.0].metrics
    }

    fn set_overscroll(&self, node: &NodeId, behavior: OverscrollBehavior) {
        self.with_style(*node, |style| style.overscroll = Some(behavior));
        self.record(StyleWrite::Overscroll(*node, behavior));
    }
}

impl DrawerHost for FakeDom {
    fn drawer_roots(&self) -> Vec<NodeId> {
        self.matching(self.body(), ROLE_ATTRIBUTE, Role::Drawer.marker())
    }

    fn element_id(&self, node: &NodeId) -> Option<String> {
        self.attribute(node, "id").filter(|id| !id.is_empty())
    }

    fn find_part(&self, root: &NodeId, role: Role) -> Option<NodeId> {
        self.matching(*root, ROLE_ATTRIBUTE, role.marker())
            .into_iter()
            .find(|node| node != root)
    }

    fn find_triggers(&self, id: &str) -> NodeList<NodeId> {
        self.matching(self.body(), TRIGGER_ATTRIBUTE, id)
            .into_iter()
            .collect()
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[node.0].attributes.get(name).cloned()
    }

    fn set_visible(&self, node: &NodeId, visible: bool) {
        self.with_style(*node, |style| style.visible = Some(visible));
        self.record(StyleWrite::Visible(*node, visible));
    }

    fn set_translate(&self, node: &NodeId, translate: Translate) {
        self.with_style(*node, |style| style.translate = Some(translate));
        self.record(StyleWrite::Translate(*node, translate));
    }

    fn set_opacity(&self, node: &NodeId, opacity: f32) {
        self.with_style(*node, |style| style.opacity = Some(opacity));
        self.record(StyleWrite::Opacity(*node, opacity));
    }

    fn set_transition(&self, node: &NodeId, transition: Option<Transition>) {
        self.with_style(*node, |style| style.transition = Some(transition));
        self.record(StyleWrite::Transition(*node, transition));
    }

    fn set_page_scroll_locked(&self, locked: bool) {
        self.page_scroll_locked.set(locked);
        self.record(StyleWrite::PageScrollLock(locked));
    }

    fn viewport_top(&self, node: &NodeId) -> f32 {
        let nodes = self.nodes.borrow();
        let node = &nodes[node.0];
        let shift = match node.style.translate {
            Some(Translate::OffScreen) => node.height,
            Some(Translate::Px(px)) => px,
            None => 0.0,
        };
        node.layout_top + shift
    }

    fn viewport_height(&self) -> f32 {
        self.viewport_height.get()
    }
}

/// Node ids of the standard drawer markup built by [`DrawerFixture::build`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawerFixture {
    pub body: NodeId,
    pub trigger: NodeId,
    pub root: NodeId,
    pub backdrop: NodeId,
    pub container: NodeId,
    pub handle: NodeId,
    pub content: NodeId,
    /// A list inside the content region.
    pub list: NodeId,
    /// A row inside the list; the default pointer target.
    pub row: NodeId,
}

impl DrawerFixture {
    pub const ID: &'static str = "sheet";

    /// Build the drawer markup:
    ///
    /// ```text
    /// body
    /// ├── button[data-drawer=sheet]
    /// └── div#sheet[data-role=drawer]
    ///     ├── [data-role=drawer-background]
    ///     └── [data-role=drawer-container]      top: 10% of the viewport
    ///         ├── [data-role=drawer-handle]
    ///         └── [data-role=drawer-content]
    ///             └── list > row
    /// ```
    ///
    /// Nothing is scrollable until a test sets scroll metrics.
    pub fn build(dom: &FakeDom) -> Self {
        let body = dom.body();
        let trigger = dom.append(body);
        dom.set_attribute(trigger, TRIGGER_ATTRIBUTE, Self::ID);

        let root = dom.append(body);
        dom.set_attribute(root, "id", Self::ID);
        dom.set_attribute(root, ROLE_ATTRIBUTE, Role::Drawer.marker());

        let backdrop = dom.append(root);
        dom.set_attribute(backdrop, ROLE_ATTRIBUTE, Role::Backdrop.marker());

        let container = dom.append(root);
        dom.set_attribute(container, ROLE_ATTRIBUTE, Role::Container.marker());
        let viewport = dom.viewport_height();
        dom.set_layout(container, viewport * 0.1, viewport * 0.9);

        let handle = dom.append(container);
        dom.set_attribute(handle, ROLE_ATTRIBUTE, "drawer-handle");

        let content = dom.append(container);
        dom.set_attribute(content, ROLE_ATTRIBUTE, Role::Content.marker());
        let list = dom.append(content);
        let row = dom.append(list);

        Self {
            body,
            trigger,
            root,
            backdrop,
            container,
            handle,
            content,
            list,
            row,
        }
    }
}
