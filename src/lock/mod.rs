//! Lock screen core: the swipe gesture state machine, the periodic refresher
//! that keeps the clock current, and the session tying them to a render target.

pub mod clock;
pub mod gesture;
pub mod refresher;
pub mod render;
pub mod session;
