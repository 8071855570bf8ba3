mod coordinator;

pub use coordinator::{SelectionChange, SelectionCoordinator, SelectionState};
