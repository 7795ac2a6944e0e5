pub mod fake_command_runner;

pub use fake_command_runner::{FakeCommandRunner, RecordedCall};
