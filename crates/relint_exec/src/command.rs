//! Synchronous external command execution with full stream capture.

use crate::error::ExecError;
use std::io::{Read, Write};
use std::process::{Child, ChildStderr, ChildStdout, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// How often a deadline-bounded wait polls the child for completion.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// The captured output of one finished tool invocation.
#[derive(Debug)]
pub struct CapturedOutput {
    /// Everything the tool wrote to stdout, lossily decoded as UTF-8.
    pub stdout: String,
    /// Everything the tool wrote to stderr, lossily decoded as UTF-8.
    pub stderr: String,
    /// The exit status. Kept for logging only; callers derive results
    /// from the output text, never from the status.
    pub status: ExitStatus,
}

/// Runs `argv` to completion and captures both output streams.
///
/// `stdin` is fed to the process only when given; otherwise the child gets
/// a closed stdin. When `timeout` is set and the process has not finished
/// within it, the child is killed and [`ExecError::TimedOut`] is returned.
///
/// A non-zero exit status is *not* an error: many tools exit non-zero
/// exactly when they find issues, and the caller interprets output text
/// only. The call fails only when the process cannot be started or its
/// streams cannot be drained.
pub fn execute(
    argv: &[String],
    stdin: Option<&str>,
    timeout: Option<Duration>,
) -> Result<CapturedOutput, ExecError> {
    let (program, args) = argv.split_first().ok_or(ExecError::EmptyCommand)?;

    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(if stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    log::debug!("executing {argv:?} (stdin: {})", stdin.is_some());

    let mut child = command.spawn().map_err(|source| ExecError::Spawn {
        program: program.clone(),
        source,
    })?;

    // Write stdin from a separate thread so a child that fills its output
    // pipes before reading its input cannot deadlock us. A write error
    // means the child closed stdin early, which is its prerogative.
    if let (Some(input), Some(mut handle)) = (stdin, child.stdin.take()) {
        let bytes = input.as_bytes().to_vec();
        thread::spawn(move || {
            let _ = handle.write_all(&bytes);
        });
    }

    let stdout_thread = drain_stdout(child.stdout.take());
    let stderr_thread = drain_stderr(child.stderr.take());

    let status = match timeout {
        None => child.wait().map_err(ExecError::Stream)?,
        Some(limit) => wait_with_deadline(&mut child, program, limit)?,
    };

    let stdout = join_drained(stdout_thread)?;
    let stderr = join_drained(stderr_thread)?;

    log::debug!("'{program}' exited with {status}");

    Ok(CapturedOutput {
        stdout,
        stderr,
        status,
    })
}

/// Polls the child until it exits or the deadline passes, killing it on
/// expiry.
fn wait_with_deadline(
    child: &mut Child,
    program: &str,
    limit: Duration,
) -> Result<ExitStatus, ExecError> {
    let deadline = Instant::now() + limit;
    loop {
        if let Some(status) = child.try_wait().map_err(ExecError::Stream)? {
            return Ok(status);
        }
        if Instant::now() >= deadline {
            log::warn!("'{program}' exceeded {limit:?}, killing it");
            let _ = child.kill();
            let _ = child.wait();
            return Err(ExecError::TimedOut {
                program: program.to_string(),
                limit,
            });
        }
        thread::sleep(POLL_INTERVAL);
    }
}

type DrainHandle = Option<thread::JoinHandle<Result<String, std::io::Error>>>;

fn drain_stdout(stream: Option<ChildStdout>) -> DrainHandle {
    stream.map(|mut s| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            s.read_to_end(&mut buf)?;
            Ok(String::from_utf8_lossy(&buf).into_owned())
        })
    })
}

fn drain_stderr(stream: Option<ChildStderr>) -> DrainHandle {
    stream.map(|mut s| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            s.read_to_end(&mut buf)?;
            Ok(String::from_utf8_lossy(&buf).into_owned())
        })
    })
}

fn join_drained(handle: DrainHandle) -> Result<String, ExecError> {
    match handle {
        None => Ok(String::new()),
        Some(h) => match h.join() {
            Ok(result) => result.map_err(ExecError::Stream),
            // The reader thread only panics if the runtime is already
            // compromised; surface it as a stream failure.
            Err(_) => Err(ExecError::Stream(std::io::Error::other(
                "output reader thread panicked",
            ))),
        },
    }
}
