//! Testing utilities and harness for SwipeDeck

pub mod fake_host;
pub mod recorder;
pub mod robot;

// Re-export testing utilities
pub use fake_host::{FakeElement, FakeHost};
pub use recorder::SwipeRecorder;
pub use robot::SwipeRobot;

/// Route `log` output to the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub mod prelude {
    pub use crate::fake_host::*;
    pub use crate::init_logging;
    pub use crate::recorder::*;
    pub use crate::robot::*;
}
