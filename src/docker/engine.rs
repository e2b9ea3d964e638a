use std::path::Path;

use super::types::HostCommand;
use crate::naming::ImageName;

/// Port the notebook server listens on inside the container.
pub const CONTAINER_PORT: u16 = 8888;

/// Mount point of the project directory inside the container.
pub const CONTAINER_WORKDIR: &str = "/home/lab";

/// Environment variable the notebook server reads its access token from.
pub const TOKEN_VAR: &str = "JUPYTER_TOKEN";

/// Name the engine looks for when no `-f` is given.
pub const DEFAULT_BUILD_FILE: &str = "Dockerfile";

/// `<engine> build -t <image> .`, run from the project directory.
pub fn build_command(engine: &str, image: &ImageName, dir: &Path, build_file: &str) -> HostCommand {
    let mut args = vec!["build".into()];
    if build_file != DEFAULT_BUILD_FILE {
        args.extend(["-f".into(), build_file.to_string()]);
    }
    args.extend(["-t".into(), image.to_string(), ".".into()]);
    HostCommand::new(engine, args).in_dir(dir)
}

/// Interactive notebook container with the project mounted and the port published.
pub fn run_command(
    engine: &str,
    image: &ImageName,
    dir: &Path,
    host_port: u16,
    token: &str,
) -> HostCommand {
    let mut args = interactive_args();
    args.extend([
        "-p".into(),
        format!("{host_port}:{CONTAINER_PORT}"),
        "-e".into(),
        format!("{TOKEN_VAR}={token}"),
    ]);
    args.extend(mount_args(dir));
    args.push(image.to_string());
    HostCommand::new(engine, args)
}

/// Same mount as [`run_command`], but runs `argv` instead of the notebook server.
pub fn exec_command(engine: &str, image: &ImageName, dir: &Path, argv: &[String]) -> HostCommand {
    let mut args = interactive_args();
    args.extend(mount_args(dir));
    args.push(image.to_string());
    args.extend(argv.iter().cloned());
    HostCommand::new(engine, args)
}

/// `<engine> rmi <image>`.
pub fn remove_command(engine: &str, image: &ImageName) -> HostCommand {
    HostCommand::new(engine, vec!["rmi".into(), image.to_string()])
}

fn interactive_args() -> Vec<String> {
    vec!["run".into(), "-it".into(), "--rm".into()]
}

fn mount_args(dir: &Path) -> [String; 2] {
    ["-v".into(), format!("{}:{CONTAINER_WORKDIR}", dir.display())]
}
