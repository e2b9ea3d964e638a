use std::process::Command;

use anyhow::{Context, Result, anyhow};

use super::types::{HostCommand, Status};

/// Starts host processes and reports how they exited.
pub trait Launcher {
    /// Run `cmd` to completion.
    fn run(&mut self, cmd: &HostCommand) -> Result<Status>;

    /// Run every command and wait for all of them. Statuses are returned in
    /// input order.
    fn run_all(&mut self, cmds: &[HostCommand]) -> Result<Vec<Status>> {
        cmds.iter().map(|cmd| self.run(cmd)).collect()
    }
}

/// Spawns real child processes with inherited stdio.
#[derive(Debug, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn run(&mut self, cmd: &HostCommand) -> Result<Status> {
        println!("{cmd}");
        spawn_and_wait(cmd)
    }

    /// Start all commands at once, each on its own thread.
    fn run_all(&mut self, cmds: &[HostCommand]) -> Result<Vec<Status>> {
        for cmd in cmds {
            println!("{cmd}");
        }
        std::thread::scope(|scope| {
            let handles: Vec<_> = cmds
                .iter()
                .map(|cmd| scope.spawn(move || spawn_and_wait(cmd)))
                .collect();
            handles
                .into_iter()
                .map(|h| match h.join() {
                    Ok(result) => result,
                    Err(_) => Err(anyhow!("launcher thread panicked")),
                })
                .collect()
        })
    }
}

fn spawn_and_wait(cmd: &HostCommand) -> Result<Status> {
    if let Some(delay) = cmd.delay {
        std::thread::sleep(delay);
    }
    tracing::debug!(program = %cmd.program, args = ?cmd.args, "spawning");

    let mut command = Command::new(&cmd.program);
    command.args(&cmd.args);
    if let Some(dir) = &cmd.cwd {
        command.current_dir(dir);
    }
    let status = command.status().with_context(|| {
        format!("failed to invoke `{}`; is it installed and on PATH?", cmd.program)
    })?;

    if !status.success() {
        tracing::warn!(program = %cmd.program, %status, "process exited unsuccessfully");
    }
    Ok(status.into())
}

/// Records commands instead of running them.
#[derive(Debug)]
pub struct RecordingLauncher {
    pub commands: Vec<HostCommand>,
    status: Status,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::with_status(Status::SUCCESS)
    }

    /// Report `status` for every recorded command.
    pub fn with_status(status: Status) -> Self {
        Self {
            commands: Vec::new(),
            status,
        }
    }
}

impl Default for RecordingLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl Launcher for RecordingLauncher {
    fn run(&mut self, cmd: &HostCommand) -> Result<Status> {
        self.commands.push(cmd.clone());
        Ok(self.status)
    }
}
