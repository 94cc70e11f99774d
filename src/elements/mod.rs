mod decision;
pub mod trace;

pub use decision::{Decision, NO_ACTION, SCALE_DOWN, SCALE_UP};
pub use trace::{Trace, TraceFormat, TraceRecord};
