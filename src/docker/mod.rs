// Container engine invocations and the process launcher that runs them.

pub mod engine;
pub mod launcher;
pub mod types;

pub use engine::{build_command, exec_command, remove_command, run_command};
pub use launcher::{Launcher, RecordingLauncher, SystemLauncher};
pub use types::{HostCommand, Status};
