//! Bottom-sheet drawer instances.
//!
//! A [`Drawer`] is bound to one drawer root found in the document. Trigger
//! clicks open it, backdrop clicks close it, and pointer input on the sheet
//! drags it, dismissing on a long pull or a fast downward flick.

mod binder;
mod drawer;
mod event;
mod sequencer;
mod settings;
mod style;

pub use binder::{bind_all, bind_parts, DrawerParts};
pub use drawer::Drawer;
pub use event::{DrawerEvent, PointerInput};
pub use sequencer::{Phase, Sequencer, Step};
pub use settings::DrawerSettings;
pub use style::DrawerStyle;

pub use drawer_foundation::{Release, ReleaseThresholds};
