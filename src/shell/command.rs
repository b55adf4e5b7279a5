//! Subprocess execution with a bounded timeout.
//!
//! Probe commands are run directly (no intermediate shell) so that a
//! missing executable surfaces as [`ReadyError::ProgramNotFound`] instead of
//! a shell's "command not found" exit status.
//!
//! On Unix each command leads its own process group, and a timeout kills the
//! whole group so wrapper scripts cannot leave their children behind.

use crate::config::CommandSpec;
use crate::error::{ReadyError, Result};
use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// How often a running child is checked against its deadline.
const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// How long pipe readers get to finish after a timed-out group is killed.
const DRAIN_GRACE: Duration = Duration::from_millis(500);

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal or timed out).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,

    /// Whether the command was killed for exceeding its timeout.
    pub timed_out: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
            timed_out: false,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
            timed_out: false,
        }
    }

    /// Create a result for a command killed at its deadline.
    pub fn timed_out(duration: Duration) -> Self {
        Self {
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            duration,
            success: false,
            timed_out: true,
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Kill the command after this long (None = no timeout).
    pub timeout: Option<Duration>,
}

impl CommandOptions {
    /// Options with the given timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// Execute a command, capturing its output.
///
/// # Errors
///
/// Returns `ProgramNotFound` if the executable cannot be found and
/// `CommandFailed` if it cannot be spawned or waited on for another reason.
/// A timeout is not an error: the child is killed and the result has
/// `timed_out` set.
pub fn execute(spec: &CommandSpec, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    let mut child = cmd.spawn().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ReadyError::ProgramNotFound {
                program: spec.program.clone(),
            }
        } else {
            ReadyError::CommandFailed {
                command: spec.to_string(),
                code: None,
            }
        }
    })?;

    // Drain pipes on helper threads so a chatty child never blocks on a full pipe.
    let stdout_handle = child.stdout.take().map(drain);
    let stderr_handle = child.stderr.take().map(drain);

    // A timeout too large to represent is no deadline at all.
    let deadline = options.timeout.and_then(|t| start.checked_add(t));

    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if deadline.is_some_and(|d| Instant::now() >= d) {
                    kill_tree(&mut child);
                    let _ = child.wait();
                    tracing::debug!("'{}' timed out after {:?}", spec, start.elapsed());
                    settle(stdout_handle);
                    settle(stderr_handle);
                    return Ok(CommandResult::timed_out(start.elapsed()));
                }
                thread::sleep(WAIT_POLL_INTERVAL);
            }
            Err(_) => {
                kill_tree(&mut child);
                return Err(ReadyError::CommandFailed {
                    command: spec.to_string(),
                    code: None,
                });
            }
        }
    };

    let stdout = join_output(stdout_handle);
    let stderr = join_output(stderr_handle);
    let duration = start.elapsed();

    if status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(status.code(), stdout, stderr, duration))
    }
}

/// Kill the child together with everything in its process group.
#[cfg(unix)]
fn kill_tree(child: &mut Child) {
    match libc::pid_t::try_from(child.id()) {
        // SAFETY: kill(2) with a negative pid signals the group the child
        // leads; it touches no memory owned by this process.
        Ok(pid) => unsafe {
            libc::kill(-pid, libc::SIGKILL);
        },
        Err(_) => {
            let _ = child.kill();
        }
    }
}

#[cfg(not(unix))]
fn kill_tree(child: &mut Child) {
    let _ = child.kill();
}

/// Give a pipe reader a short grace period to see EOF, then detach it.
fn settle(handle: Option<JoinHandle<String>>) {
    let Some(handle) = handle else { return };
    let until = Instant::now() + DRAIN_GRACE;
    while !handle.is_finished() && Instant::now() < until {
        thread::sleep(WAIT_POLL_INTERVAL);
    }
    if handle.is_finished() {
        let _ = handle.join();
    } else {
        tracing::debug!("pipe reader still blocked after kill; detaching");
    }
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn join_output(handle: Option<JoinHandle<String>>) -> String {
    handle
        .map(|h| h.join().unwrap_or_default())
        .unwrap_or_default()
}
