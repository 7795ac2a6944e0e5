pub mod command_line;
pub mod configuration;
pub mod error;

pub use command_line::{display_command, redact_url};
pub use configuration::{SpaceRoots, WorkflowPlan};
pub use error::{AppError, CommandFailure};
