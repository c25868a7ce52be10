//! Run a shell command and capture everything it does.
//!
//! [`Execute`] runs `<shell> -c <command>`, feeds it an optional standard
//! input, waits for it to exit and keeps its output and exit status.
//!
//! ```no_run
//! # use leafutils::shell::Execute;
//! let result = Execute::run("echo hello").unwrap();
//! assert_eq!(result.standard_output(), "hello\n");
//! assert_eq!(result.exit_status(), Some(0));
//! ```

use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

use anyhow::{Context, Result, anyhow};
use log::{debug, info, warn};

/// Shell used when none is given.
pub const DEFAULT_SHELL: &str = "bash";

/// The captured result of one finished shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execute {
    command: String,
    status: Option<i32>,
    stdin: String,
    stdout: String,
    stderr: String,
}

impl Execute {
    /// Run `command` with [`DEFAULT_SHELL`] and an empty standard input.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell cannot be spawned or waited on.
    pub fn run(command: &str) -> Result<Self> {
        Self::with_shell(DEFAULT_SHELL, command, "")
    }

    /// Run `command` with [`DEFAULT_SHELL`], writing `input` to its standard input.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell cannot be spawned or waited on.
    pub fn run_with_input(command: &str, input: &str) -> Result<Self> {
        Self::with_shell(DEFAULT_SHELL, command, input)
    }

    /// Run `command` as `<shell> -c <command>`, writing `input` to its standard input.
    ///
    /// Input is written from a separate thread so a child that produces a lot
    /// of output before reading its input cannot deadlock the caller. Output
    /// that is not valid UTF-8 is decoded lossily.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell cannot be spawned or waited on.
    pub fn with_shell(shell: &str, command: &str, input: &str) -> Result<Self> {
        let mut cmd = Command::new(shell);
        cmd.arg("-c")
            .arg(command)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!("spawning {cmd:?}");
        let mut child = cmd
            .spawn()
            .with_context(|| format!("Failed to spawn {shell} for: {command}"))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| anyhow!("Child standard input was not captured"))?;
        let input_owned = input.to_owned();
        let writer = thread::spawn(move || stdin.write_all(input_owned.as_bytes()));

        let output = child
            .wait_with_output()
            .with_context(|| format!("Failed to wait for: {command}"))?;

        match writer.join() {
            Ok(Ok(())) => {}
            // The child may exit without reading its input.
            Ok(Err(err)) => debug!("standard input not fully written: {err}"),
            Err(_) => warn!("standard input writer thread panicked"),
        }

        let status = output.status.code();
        match status {
            Some(0) => info!("command finished successfully: {command}"),
            Some(code) => info!("command exited with {code}: {command}"),
            None => warn!("command terminated by signal: {command}"),
        }

        Ok(Self {
            command: command.to_owned(),
            status,
            stdin: input.to_owned(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    /// The command line that was run.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Exit code, or `None` when the process was terminated by a signal.
    #[must_use]
    pub const fn exit_status(&self) -> Option<i32> {
        self.status
    }

    /// Whether the command exited with code 0.
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.status, Some(0))
    }

    #[must_use]
    pub fn standard_input(&self) -> &str {
        &self.stdin
    }

    #[must_use]
    pub fn standard_output(&self) -> &str {
        &self.stdout
    }

    #[must_use]
    pub fn standard_error(&self) -> &str {
        &self.stderr
    }
}
