// Form-to-preview synchronizer core.
// State + Action -> State' (+ Effects). No DOM, no I/O; the host renders a View afterwards.

pub mod action;
pub mod progress;
pub mod state;
pub mod update;

pub use action::{Action, Effect};
pub use progress::{compute_progress, ProgressMetric};
pub use state::FormState;
pub use update::update;
