use assert_cmd::cargo_bin;
use std::io::{Error, Write};
use std::process::{Command, Output, Stdio};

pub fn menu_command() -> Command {
    Command::new(cargo_bin!("paymenu"))
}

/// Runs `cmd` with `script` as its whole standard input.
pub fn run_with_stdin(cmd: &mut Command, script: &str) -> Result<Output, Error> {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(script.as_bytes())?;
    }

    child.wait_with_output()
}
