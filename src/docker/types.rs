use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// One external process invocation.
///
/// `program` is resolved on `PATH`; `args` are passed verbatim (no shell).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostCommand {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory for the child. Inherited when `None`.
    pub cwd: Option<PathBuf>,
    /// Wait this long before spawning.
    pub delay: Option<Duration>,
}

impl HostCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            cwd: None,
            delay: None,
        }
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Shell-quoted command line, as a user would type it.
impl fmt::Display for HostCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = std::iter::once(&self.program).chain(&self.args);
        f.write_str(&shell_words::join(words))
    }
}

/// Exit status of a finished child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl Status {
    pub const SUCCESS: Status = Status { code: Some(0) };

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Code to exit the CLI with. Signal terminations map to 1.
    pub fn exit_code(&self) -> i32 {
        self.code.unwrap_or(1)
    }

    /// The first unsuccessful status, or the last one if all succeeded.
    pub fn combine(statuses: &[Status]) -> Status {
        statuses
            .iter()
            .find(|s| !s.success())
            .or_else(|| statuses.last())
            .copied()
            .unwrap_or(Status::SUCCESS)
    }
}

impl From<std::process::ExitStatus> for Status {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}
