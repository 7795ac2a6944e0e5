//! Process-facing configuration readers.
//!
//! This module owns the I/O for loading the environment snapshot and the
//! optional config file. Pure resolution lives in `domain::configuration`.

mod env_reader;
mod spaces_reader;

pub use env_reader::{read_env, read_env_with};
pub use spaces_reader::load_spaces;
