//! CGI-imitation driver (component D, spec.md §4.D).
//!
//! Runs one executable route to completion and produces the bytes for the HTTP
//! response. The three cooperating tasks described in spec.md §4.D — a stdin
//! writer, a stdout/stderr collector, and a cancellation watcher — are represented
//! here by a spawned writer task racing `child.wait_with_output()` against the
//! request's `CancellationToken` inside `tokio::select!`.
//!
//! This future is meant to run inline inside the warp handler, not detached via
//! `tokio::spawn`: when a client disconnects mid-request, hyper drops the
//! in-flight handler future, which drops the `GroupHandle` held in `execute`'s
//! stack and kills the process tree from its `Drop` impl — no explicit disconnect
//! detection required. The `CancellationToken` covers the other trigger: an
//! explicit cancel from outside this request (e.g. shutdown).

pub mod env;
pub mod formenc;
pub mod proc_group;
pub mod spawn;

use crate::models::ChildInvocation;
use std::path::Path;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;

/// What came out of running the child, in terms the HTTP layer can act on
/// directly.
#[derive(Debug)]
pub enum DriverOutcome {
    /// Child exited successfully; here is its stdout.
    Completed(Vec<u8>),
    /// Launch failed, the child exited non-zero, or some I/O step failed.
    Failed(String),
    /// The request was cancelled (client disconnected) before the child finished;
    /// the process tree has already been killed. No response bytes apply.
    Cancelled,
}

/// One executable-route request, already classified by the resolver.
pub struct ExecutionRequest<'a> {
    pub script_path: &'a Path,
    pub natively_executable: bool,
    pub method: &'a str,
    pub headers: &'a [(String, String)],
    pub content_type: Option<&'a str>,
    pub query: &'a str,
    pub body: &'a [u8],
}

pub async fn execute(req: ExecutionRequest<'_>, cancellation: CancellationToken) -> DriverOutcome {
    let prepared = match spawn::build_invocation(req.script_path, req.natively_executable) {
        Ok(prepared) => prepared,
        Err(e) => return DriverOutcome::Failed(format!("cannot prepare child: {e}")),
    };

    let is_form = formenc::is_form_submission(req.method, req.content_type);
    let form_source: &[u8] = if req.method.eq_ignore_ascii_case("GET") {
        req.query.as_bytes()
    } else {
        req.body
    };

    let (extra_argv, stdin_bytes): (Vec<String>, Vec<u8>) = if is_form {
        let pairs = formenc::parse_form(form_source);
        let argv = formenc::form_to_argv(&pairs);
        let stdin = formenc::reencode_form_for_stdin(&pairs).into_bytes();
        (argv, stdin)
    } else {
        (Vec::new(), req.body.to_vec())
    };

    let mut argv = prepared.prefix_args;
    argv.extend(extra_argv);

    let invocation = ChildInvocation {
        program: prepared.program,
        working_dir: prepared.working_dir,
        argv,
        env_overlay: env::build_overlay(req.method, req.headers),
        cancellation: cancellation.clone(),
    };

    let mut cmd = Command::new(&invocation.program);
    cmd.args(&invocation.argv)
        .current_dir(&invocation.working_dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (key, value) in &invocation.env_overlay {
        cmd.env(key, value);
    }
    proc_group::prepare_new_group(&mut cmd);

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => return DriverOutcome::Failed(format!("failed to launch child: {e}")),
    };

    let pid = match child.id() {
        Some(pid) => pid,
        None => return DriverOutcome::Failed("child exited before it could be tracked".into()),
    };

    #[cfg(unix)]
    let group = proc_group::GroupHandle::for_child(pid);
    #[cfg(windows)]
    let group = match proc_group::GroupHandle::for_child(pid) {
        Ok(group) => group,
        Err(e) => return DriverOutcome::Failed(format!("failed to create job object: {e}")),
    };

    let mut stdin = match child.stdin.take() {
        Some(stdin) => stdin,
        None => return DriverOutcome::Failed("child stdin was not piped".into()),
    };

    let stdin_task = tokio::spawn(async move {
        let _ = stdin.write_all(&stdin_bytes).await;
        let _ = stdin.shutdown().await;
    });

    tokio::select! {
        result = child.wait_with_output() => {
            let _ = stdin_task.await;
            match result {
                Ok(output) => {
                    if !output.stderr.is_empty() {
                        tracing::warn!(
                            stderr = %String::from_utf8_lossy(&output.stderr),
                            "child wrote to stderr"
                        );
                    }
                    if output.status.success() {
                        DriverOutcome::Completed(output.stdout)
                    } else {
                        DriverOutcome::Failed(format!("child exited with {}", output.status))
                    }
                }
                Err(e) => DriverOutcome::Failed(format!("failed to wait on child: {e}")),
            }
        }
        _ = invocation.cancellation.cancelled() => {
            stdin_task.abort();
            if let Err(e) = group.kill_tree() {
                tracing::warn!(error = %e, "failed to kill process tree after cancellation");
            }
            DriverOutcome::Cancelled
        }
    }
}
