//! Browser binding for drawers.
//!
//! [`bind_all`] finds every `[data-role=drawer]` root in the document and
//! wires clicks, mouse and touch input to a [`Drawer`] per root. Listeners
//! live as long as the returned [`BoundDrawer`].

mod host;
mod listeners;
mod scheduler;
mod stylesheet;

pub use host::WebHost;
pub use listeners::EventListener;
pub use scheduler::WebScheduler;
pub use stylesheet::{install_default_styles, DEFAULT_STYLESHEET};

use drawer_core::{Clock, Scheduler, SystemClock};
use drawer_ui::{Drawer, DrawerEvent, DrawerSettings, PointerInput};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, MouseEvent, TouchEvent};

const PRESS_EVENTS: [&str; 2] = ["mousedown", "touchstart"];
const MOVE_EVENTS: [&str; 2] = ["mousemove", "touchmove"];
const RELEASE_EVENTS: [&str; 2] = ["mouseup", "touchend"];

/// A drawer together with the DOM listeners feeding it.
///
/// Dropping it removes every listener; pending timers are cancelled once the
/// last handle to the drawer is gone.
pub struct BoundDrawer {
    drawer: Drawer<WebHost>,
    _listeners: Vec<EventListener>,
}

impl BoundDrawer {
    pub fn drawer(&self) -> &Drawer<WebHost> {
        &self.drawer
    }
}

/// Bind every drawer in the current document.
pub fn bind_all(settings: &DrawerSettings) -> Result<Vec<BoundDrawer>, JsValue> {
    let window = web_sys::window().ok_or("no global window exists")?;
    let document = window.document().ok_or("should have a document on window")?;

    let host = Rc::new(WebHost::new(window.clone(), document.clone()));
    let scheduler: Rc<dyn Scheduler> = Rc::new(WebScheduler::new(window));
    let clock = SystemClock::new();

    let drawers = drawer_ui::bind_all(&host, &scheduler, settings);
    log::info!("bound {} drawer(s)", drawers.len());
    drawers
        .into_iter()
        .map(|drawer| wire(&document, drawer, clock))
        .collect()
}

fn wire(
    document: &Document,
    drawer: Drawer<WebHost>,
    clock: SystemClock,
) -> Result<BoundDrawer, JsValue> {
    let parts = drawer.parts();
    let mut listeners = Vec::with_capacity(parts.triggers.len() + 7);

    for trigger in &parts.triggers {
        let drawer = drawer.clone();
        listeners.push(EventListener::new(trigger, "click", move |event| {
            event.prevent_default();
            drawer.handle(DrawerEvent::TriggerClick);
        })?);
    }

    {
        let drawer = drawer.clone();
        listeners.push(EventListener::new(&parts.backdrop, "click", move |event| {
            event.prevent_default();
            drawer.handle(DrawerEvent::BackdropClick);
        })?);
    }

    for name in PRESS_EVENTS {
        let drawer = drawer.clone();
        listeners.push(EventListener::new(&parts.container, name, move |event| {
            drawer.handle(DrawerEvent::PointerDown(pointer_input(&event, &clock)));
        })?);
    }

    for name in MOVE_EVENTS {
        let drawer = drawer.clone();
        listeners.push(EventListener::new(document, name, move |event| {
            drawer.handle(DrawerEvent::PointerMove(pointer_input(&event, &clock)));
        })?);
    }

    for name in RELEASE_EVENTS {
        let drawer = drawer.clone();
        listeners.push(EventListener::new(document, name, move |event| {
            drawer.handle(DrawerEvent::PointerUp(pointer_input(&event, &clock)));
        })?);
    }

    Ok(BoundDrawer {
        drawer,
        _listeners: listeners,
    })
}

/// Map a mouse or touch event to a pointer sample in viewport coordinates.
fn pointer_input(event: &Event, clock: &SystemClock) -> PointerInput<Element> {
    // `TouchEvent` is not defined on every desktop browser, so avoid `instanceof`.
    let y = if event.type_().starts_with("touch") {
        event
            .unchecked_ref::<TouchEvent>()
            .touches()
            .get(0)
            .map(|touch| touch.client_y() as f32)
    } else {
        event
            .dyn_ref::<MouseEvent>()
            .map(|mouse| mouse.client_y() as f32)
    };

    let input = match y {
        Some(y) => PointerInput::at(y, clock.now_millis()),
        None => PointerInput::without_position(clock.now_millis()),
    };
    match event.target().and_then(|target| target.dyn_into::<Element>().ok()) {
        Some(target) => input.with_target(target),
        None => input,
    }
}
