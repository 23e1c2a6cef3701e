//! A bound drawer instance.

use crate::binder::{bind_parts, DrawerParts};
use crate::event::{DrawerEvent, PointerInput};
use crate::sequencer::{Phase, Sequencer, Step};
use crate::settings::DrawerSettings;
use crate::style::DrawerStyle;
use drawer_core::{BindError, DrawerHost, Scheduler, TimerRegistration};
use drawer_foundation::{GestureTracker, MoveOutcome, Release, ScrollArbiter};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Handle to one drawer instance. Clones share the same instance.
///
/// Dropping the last handle cancels any pending open/close continuation.
pub struct Drawer<H: DrawerHost> {
    inner: Rc<RefCell<DrawerInner<H>>>,
}

impl<H: DrawerHost> Clone for Drawer<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

struct DrawerInner<H: DrawerHost> {
    host: Rc<H>,
    scheduler: Rc<dyn Scheduler>,
    parts: DrawerParts<H::Node>,
    settings: DrawerSettings,
    sequencer: Sequencer,
    tracker: GestureTracker,
    arbiter: ScrollArbiter<H::Node>,
    rendered: Option<DrawerStyle>,
    this: Weak<RefCell<DrawerInner<H>>>,
}

impl<H: DrawerHost + 'static> Drawer<H> {
    /// Bind the drawer rooted at `root`, applying the root's markup overrides to `settings`.
    pub fn bind(
        host: Rc<H>,
        scheduler: Rc<dyn Scheduler>,
        root: H::Node,
        settings: &DrawerSettings,
    ) -> Result<Self, BindError> {
        let parts = bind_parts(&*host, &root)?;
        let settings = settings.for_root(&*host, &root);
        Ok(Self::from_parts(host, scheduler, parts, settings))
    }

    /// Build an instance from already located parts. Renders the closed state.
    pub fn from_parts(
        host: Rc<H>,
        scheduler: Rc<dyn Scheduler>,
        parts: DrawerParts<H::Node>,
        settings: DrawerSettings,
    ) -> Self {
        let arbiter = ScrollArbiter::new(parts.root.clone(), parts.content.clone());
        let inner = Rc::new_cyclic(|this| {
            RefCell::new(DrawerInner {
                host,
                scheduler,
                parts,
                settings,
                sequencer: Sequencer::new(),
                tracker: GestureTracker::new(),
                arbiter,
                rendered: None,
                this: this.clone(),
            })
        });
        inner.borrow_mut().render();
        log::debug!("bound drawer {:?}", inner.borrow().parts.id);
        Self { inner }
    }

    pub fn open(&self) {
        self.inner.borrow_mut().open();
    }

    pub fn close(&self) {
        self.inner.borrow_mut().close();
    }

    pub fn handle(&self, event: DrawerEvent<H::Node>) {
        let mut inner = self.inner.borrow_mut();
        match event {
            DrawerEvent::TriggerClick => inner.open(),
            DrawerEvent::BackdropClick => inner.close(),
            DrawerEvent::PointerDown(input) => inner.drag_start(input),
            DrawerEvent::PointerMove(input) => inner.drag_move(input),
            DrawerEvent::PointerUp(_) => inner.drag_stop(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.inner.borrow().sequencer.phase()
    }

    /// A gesture session is live and still moving the sheet.
    pub fn is_dragging(&self) -> bool {
        self.inner.borrow().tracker.is_dragging()
    }

    pub fn velocity(&self) -> f32 {
        self.inner.borrow().tracker.velocity()
    }

    pub fn parts(&self) -> DrawerParts<H::Node> {
        self.inner.borrow().parts.clone()
    }

    pub fn settings(&self) -> DrawerSettings {
        self.inner.borrow().settings.clone()
    }

    /// The style most recently written to the host.
    pub fn style(&self) -> Option<DrawerStyle> {
        self.inner.borrow().rendered
    }
}

impl<H: DrawerHost + 'static> DrawerInner<H> {
    fn open(&mut self) {
        match self.sequencer.request_open(&self.settings) {
            Step::Schedule { delay_ms } => {
                log::debug!("drawer {:?} opening", self.parts.id);
                self.render();
                self.schedule(delay_ms);
            }
            Step::Unchanged => {
                // Already open: settle back at rest.
                if self.sequencer.phase() == Phase::Open {
                    self.tracker.reset();
                }
                self.render();
            }
        }
    }

    fn close(&mut self) {
        self.tracker.reset();
        if let Step::Schedule { delay_ms } = self.sequencer.request_close(&self.settings) {
            log::debug!("drawer {:?} closing", self.parts.id);
            self.schedule(delay_ms);
        }
        self.render();
    }

    fn schedule(&mut self, delay_ms: u32) {
        let this = self.this.clone();
        let registration = TimerRegistration::schedule(&self.scheduler, delay_ms, move || {
            if let Some(inner) = this.upgrade() {
                inner.borrow_mut().complete();
            }
        });
        match registration {
            Some(registration) => self.sequencer.arm(registration),
            None => {
                log::warn!("could not schedule {delay_ms}ms continuation; completing now");
                self.complete();
            }
        }
    }

    fn complete(&mut self) {
        if let Some(phase) = self.sequencer.complete() {
            log::debug!("drawer {:?} {phase:?}", self.parts.id);
            self.render();
        }
    }

    fn drag_start(&mut self, input: PointerInput<H::Node>) {
        if self.sequencer.phase() != Phase::Open {
            return;
        }
        if self.tracker.start(input.y, input.time_ms) {
            self.render();
        }
    }

    fn drag_move(&mut self, input: PointerInput<H::Node>) {
        let DrawerInner {
            host,
            tracker,
            arbiter,
            ..
        } = self;
        let outcome = tracker.sample(input.y, input.time_ms, |direction| {
            arbiter.decide(&**host, input.target.as_ref(), direction)
        });
        if let MoveOutcome::Dragged { .. } = outcome {
            self.render();
        }
    }

    fn drag_stop(&mut self) {
        let Some(session) = self.tracker.finish() else {
            return;
        };
        let top = self.host.viewport_top(&self.parts.container);
        let viewport_height = self.host.viewport_height();
        let release = session.release_decision(top, viewport_height, &self.settings.thresholds);
        log::debug!(
            "drawer {:?} released at top={top} velocity={}: {release:?}",
            self.parts.id,
            session.velocity
        );
        match release {
            Release::Dismiss => self.close(),
            Release::SnapBack => self.render(),
        }
    }

    fn render(&mut self) {
        let style = DrawerStyle::resolve(
            self.sequencer.phase(),
            self.tracker.session(),
            &self.settings,
        );
        if self.rendered.as_ref() == Some(&style) {
            return;
        }
        style.apply(self.rendered.as_ref(), &*self.host, &self.parts);
        self.rendered = Some(style);
    }
}
