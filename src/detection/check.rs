//! Async `--version` invocation with timeout.

use crate::ProbeError;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Run `<path> --version` and return its output.
///
/// Stdout is preferred; some CLIs print their version to stderr, which
/// is used when stdout is empty. Output is decoded lossily.
///
/// # Errors
///
/// - `Timeout` if the command outlives `limit` (the child is killed)
/// - `PermissionDenied` if the executable cannot be run
/// - `Io` for other spawn failures
/// - `NonZeroExit` if the command exits unsuccessfully
pub(crate) async fn check_version(path: &Path, limit: Duration) -> Result<String, ProbeError> {
    let mut command = Command::new(path);
    command
        .arg("--version")
        .stdin(Stdio::null())
        .kill_on_drop(true);

    // kill_on_drop reaps the child if the timeout fires
    let output = timeout(limit, command.output())
        .await
        .map_err(|_| ProbeError::Timeout(limit))?
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                ProbeError::PermissionDenied {
                    path: path.display().to_string(),
                }
            } else {
                ProbeError::Io {
                    message: e.to_string(),
                }
            }
        })?;

    // A CLI that fails `--version` is broken, not absent
    if !output.status.success() {
        return Err(ProbeError::NonZeroExit {
            code: output.status.code(),
        });
    }

    // Try stdout first, fall back to stderr
    let out = if !output.stdout.is_empty() {
        output.stdout
    } else {
        output.stderr
    };

    Ok(String::from_utf8_lossy(&out).into_owned())
}
