//! External command execution with captured output.
//!
//! Both live-system probes (`uhd_config_info` and `mender`) go through
//! [`Cmd`], so a missing executable or a non-zero exit surfaces as an error
//! carrying the program path and its stderr.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// Result of a command execution.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit status of the command.
    pub status: ExitStatus,
    /// Captured stdout, decoded lossily as UTF-8.
    pub stdout: String,
    /// Captured stderr, decoded lossily as UTF-8.
    pub stderr: String,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Get the exit code, or -1 if terminated by signal.
    pub fn code(&self) -> i32 {
        self.status.code().unwrap_or(-1)
    }

    pub fn stderr_trimmed(&self) -> &str {
        self.stderr.trim()
    }

    /// First line of stdout, without its line terminator.
    pub fn first_line(&self) -> Option<&str> {
        self.stdout.lines().next()
    }
}

/// Builder for configuring command execution.
pub struct Cmd {
    program: PathBuf,
    args: Vec<String>,
}

impl Cmd {
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<str>) -> Self {
        self.args.push(arg.as_ref().to_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            self.args.push(arg.as_ref().to_string());
        }
        self
    }

    /// Run the command and capture output.
    pub fn run(self) -> Result<CommandResult> {
        log::debug!("running {} {}", self.program.display(), self.args.join(" "));

        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .with_context(|| format!("Failed to execute '{}'", self.program.display()))?;

        let result = CommandResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if !result.success() {
            let prefix = format!("'{}' failed", self.program.display());

            let stderr = result.stderr_trimmed();
            if stderr.is_empty() {
                bail!("{} (exit code {})", prefix, result.code());
            } else {
                bail!("{} (exit code {}):\n{}", prefix, result.code(), stderr);
            }
        }

        Ok(result)
    }
}

/// Run `program` with `args` and return the first line of its stdout.
///
/// Fails if the program cannot be spawned, exits non-zero, or prints nothing.
pub fn first_line_of<I, S>(program: &Path, args: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let result = Cmd::new(program).args(args).run()?;
    match result.first_line() {
        Some(line) => Ok(line.to_string()),
        None => bail!("'{}' produced no output", program.display()),
    }
}
