//! Event reporting to the presentation layer.
//!
//! The engine never animates, plays sounds or waits. It reports each step
//! as a `GameEvent` to a `GameObserver`; pacing hints on the events let the
//! observer schedule its own delays.

pub mod event;
pub mod observer;

pub use event::GameEvent;
pub use observer::{EventLog, GameObserver, NullObserver};
