#![doc = r"Core pieces shared by every drawer layer: the host contract, timers and CSS values."]

pub mod clock;
pub mod error;
pub mod host;
pub mod platform;
pub mod style;

pub use clock::SystemClock;
pub use error::BindError;
pub use host::{DrawerHost, NodeList, OverscrollBehavior, Role, ScrollMetrics, ScrollTree};
pub use platform::{Clock, Scheduler, TimerId, TimerRegistration};
pub use style::{Easing, Transition, TransitionProperty, Translate};

/// Attribute that carries a drawer part's structural role.
pub const ROLE_ATTRIBUTE: &str = "data-role";

/// Attribute a trigger uses to reference the id of the drawer it opens.
pub const TRIGGER_ATTRIBUTE: &str = "data-drawer";
