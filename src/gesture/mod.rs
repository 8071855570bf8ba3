mod navigator;
mod sink;

pub use navigator::{GestureNavigator, SwipeDirection, SwipeOutcome};
pub use sink::{NavigationSink, RecordingSink};
