pub mod project_name;
pub mod spaces;
pub mod workflow_plan;

pub use project_name::derive_project_name;
pub use spaces::{CACHE_SPACE, EPHEMERAL_SPACE, SpaceRoots, parse_spaces_content};
pub use workflow_plan::{DEFAULT_REVISION, ENV_ALLOWLIST, WorkflowPlan};
