//! Drawer style derived from state.
//!
//! Nothing reads style back from the host. The phase and the live gesture
//! fully determine what the root, sheet and backdrop look like, and only the
//! properties that changed since the previous render are written.

use crate::binder::DrawerParts;
use crate::sequencer::Phase;
use crate::settings::DrawerSettings;
use drawer_core::{DrawerHost, Transition, TransitionProperty, Translate};
use drawer_foundation::GestureSession;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerStyle {
    pub root_visible: bool,
    pub page_scroll_locked: bool,
    pub container_transition: Option<Transition>,
    pub container_translate: Translate,
    pub backdrop_transition: Option<Transition>,
    pub backdrop_opacity: f32,
}

impl DrawerStyle {
    pub fn resolve(
        phase: Phase,
        gesture: Option<&GestureSession>,
        settings: &DrawerSettings,
    ) -> Self {
        let transform = Transition::new(
            TransitionProperty::Transform,
            settings.transition_ms,
            settings.easing,
        );
        let fade = Transition::new(
            TransitionProperty::Opacity,
            settings.transition_ms,
            settings.easing,
        );

        match phase {
            Phase::Closed => Self {
                root_visible: false,
                page_scroll_locked: false,
                container_transition: Some(transform),
                container_translate: Translate::OffScreen,
                backdrop_transition: Some(fade),
                backdrop_opacity: 0.0,
            },
            Phase::Opening | Phase::Closing => Self {
                root_visible: true,
                page_scroll_locked: true,
                container_transition: Some(transform),
                container_translate: Translate::OffScreen,
                backdrop_transition: Some(fade),
                backdrop_opacity: 0.0,
            },
            Phase::Open => Self {
                root_visible: true,
                page_scroll_locked: true,
                // The sheet tracks the pointer with no latency while a gesture is live.
                container_transition: match gesture {
                    Some(_) => None,
                    None => Some(transform),
                },
                container_translate: gesture
                    .and_then(|session| session.offset)
                    .map_or(Translate::REST, Translate::Px),
                backdrop_transition: Some(fade),
                backdrop_opacity: 1.0,
            },
        }
    }

    /// Write every property that differs from `previous`. The first render
    /// writes everything except an unlocked page.
    pub(crate) fn apply<H: DrawerHost>(
        &self,
        previous: Option<&DrawerStyle>,
        host: &H,
        parts: &DrawerParts<H::Node>,
    ) {
        if changed(previous, |prev| prev.root_visible != self.root_visible) {
            host.set_visible(&parts.root, self.root_visible);
        }
        // The page starts unlocked; never clear body styles the page set itself.
        let lock_changed = match previous {
            Some(prev) => prev.page_scroll_locked != self.page_scroll_locked,
            None => self.page_scroll_locked,
        };
        if lock_changed {
            host.set_page_scroll_locked(self.page_scroll_locked);
        }
        // Transition before transform, so a restored transition animates the snap back.
        if changed(previous, |prev| prev.container_transition != self.container_transition) {
            host.set_transition(&parts.container, self.container_transition);
        }
        if changed(previous, |prev| prev.container_translate != self.container_translate) {
            host.set_translate(&parts.container, self.container_translate);
        }
        if changed(previous, |prev| prev.backdrop_transition != self.backdrop_transition) {
            host.set_transition(&parts.backdrop, self.backdrop_transition);
        }
        if changed(previous, |prev| prev.backdrop_opacity != self.backdrop_opacity) {
            host.set_opacity(&parts.backdrop, self.backdrop_opacity);
        }
    }
}

fn changed(previous: Option<&DrawerStyle>, differs: impl Fn(&DrawerStyle) -> bool) -> bool {
    previous.map_or(true, differs)
}
