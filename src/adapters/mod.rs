pub mod cache_lock;
pub mod process_command;

pub use cache_lock::CacheLock;
pub use process_command::ProcessCommandRunner;
