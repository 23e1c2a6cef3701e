//! Testing utilities and harness for drawers

pub mod fake_dom;
pub mod robot;
pub mod scheduler;

pub use fake_dom::{DrawerFixture, FakeDom, FakeStyle, NodeId, StyleWrite};
pub use robot::DrawerRobot;
pub use scheduler::ManualScheduler;

/// Route `log` output through the test harness. Safe to call from every test.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub mod prelude {
    pub use crate::fake_dom::*;
    pub use crate::robot::*;
    pub use crate::scheduler::*;
    pub use crate::init_test_logging;
}
