//! Flood control logic and state management.

mod clock;
mod history;
mod limiter;

pub use clock::{Clock, ManualClock, SystemClock};
pub use history::CallHistory;
pub use limiter::{FloodControl, SlidingWindowLimiter};
