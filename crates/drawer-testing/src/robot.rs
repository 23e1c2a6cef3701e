//! Robot-style driver for a drawer bound to the standard fixture.
//!
//! ```
//! use drawer_testing::DrawerRobot;
//!
//! let robot = DrawerRobot::new();
//! robot.open_and_settle();
//!
//! // Pull the sheet down 150px and let go slowly.
//! robot.press(500.0, 0.0);
//! robot.move_to(650.0, 500.0);
//! robot.release(600.0);
//! robot.advance(400);
//! ```

use crate::fake_dom::{DrawerFixture, FakeDom, NodeId};
use crate::scheduler::ManualScheduler;
use drawer_core::{Scheduler, Translate};
use drawer_ui::{Drawer, DrawerEvent, DrawerSettings, Phase, PointerInput};
use std::rc::Rc;

/// Viewport height used by [`DrawerRobot::new`].
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 1000.0;

pub struct DrawerRobot {
    dom: Rc<FakeDom>,
    scheduler: Rc<ManualScheduler>,
    drawer: Drawer<FakeDom>,
    fixture: DrawerFixture,
}

impl DrawerRobot {
    pub fn new() -> Self {
        Self::with_settings(DrawerSettings::default())
    }

    pub fn with_settings(settings: DrawerSettings) -> Self {
        Self::with_viewport(DEFAULT_VIEWPORT_HEIGHT, settings)
    }

    /// Build the standard fixture and bind a drawer to it.
    ///
    /// # Panics
    ///
    /// Panics if the fixture fails to bind, which indicates a harness bug.
    pub fn with_viewport(viewport_height: f32, settings: DrawerSettings) -> Self {
        let dom = Rc::new(FakeDom::new(viewport_height));
        let fixture = DrawerFixture::build(&dom);
        let scheduler = Rc::new(ManualScheduler::new());
        let dyn_scheduler: Rc<dyn Scheduler> = scheduler.clone();
        let drawer = Drawer::bind(Rc::clone(&dom), dyn_scheduler, fixture.root, &settings)
            .expect("standard fixture binds");
        Self {
            dom,
            scheduler,
            drawer,
            fixture,
        }
    }

    pub fn drawer(&self) -> &Drawer<FakeDom> {
        &self.drawer
    }

    pub fn dom(&self) -> &FakeDom {
        &self.dom
    }

    pub fn scheduler(&self) -> &ManualScheduler {
        &self.scheduler
    }

    pub fn fixture(&self) -> &DrawerFixture {
        &self.fixture
    }

    pub fn phase(&self) -> Phase {
        self.drawer.phase()
    }

    pub fn advance(&self, millis: u64) {
        self.scheduler.advance_by(millis);
    }

    pub fn click_trigger(&self) {
        self.drawer.handle(DrawerEvent::TriggerClick);
    }

    pub fn click_backdrop(&self) {
        self.drawer.handle(DrawerEvent::BackdropClick);
    }

    /// Open and wait until the open animation has finished.
    pub fn open_and_settle(&self) {
        let settings = self.drawer.settings();
        self.click_trigger();
        self.advance(u64::from(settings.open_guard_ms + settings.transition_ms));
    }

    pub fn press(&self, y: f32, time_ms: f64) {
        self.drawer
            .handle(DrawerEvent::PointerDown(PointerInput::at(y, time_ms)));
    }

    /// Move over the default target, a row inside the content list.
    pub fn move_to(&self, y: f32, time_ms: f64) {
        self.move_over(self.fixture.row, y, time_ms);
    }

    pub fn move_over(&self, target: NodeId, y: f32, time_ms: f64) {
        self.drawer.handle(DrawerEvent::PointerMove(
            PointerInput::at(y, time_ms).with_target(target),
        ));
    }

    pub fn release(&self, time_ms: f64) {
        self.drawer
            .handle(DrawerEvent::PointerUp(PointerInput::without_position(time_ms)));
    }

    /// Press at `from`, move in equal steps to `to` over `duration_ms`, release.
    pub fn drag(&self, from: f32, to: f32, start_ms: f64, duration_ms: f64, steps: u32) {
        self.press(from, start_ms);
        let steps = steps.max(1);
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            let y = from + (to - from) * fraction;
            let time_ms = start_ms + duration_ms * f64::from(fraction);
            self.move_to(y, time_ms);
        }
        self.release(start_ms + duration_ms);
    }

    pub fn container_translate(&self) -> Option<Translate> {
        self.dom.style(self.fixture.container).translate
    }

    pub fn root_visible(&self) -> bool {
        self.dom.style(self.fixture.root).visible.unwrap_or(false)
    }

    pub fn backdrop_opacity(&self) -> Option<f32> {
        self.dom.style(self.fixture.backdrop).opacity
    }
}

impl Default for DrawerRobot {
    fn default() -> Self {
        Self::new()
    }
}
