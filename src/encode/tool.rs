use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
    process::{Command, ExitStatus, Stdio},
};

use crate::foundation::error::{CountdownError, CountdownResult};

/// Outcome of one blocking external program invocation.
#[derive(Clone, Debug)]
pub struct ToolOutput {
    /// Program that was run.
    pub program: PathBuf,
    /// Exit status reported by the OS.
    pub status: ExitStatus,
    /// Captured standard error, lossily decoded.
    pub stderr: String,
}

impl ToolOutput {
    /// Turn a non-zero exit into [`CountdownError::Tool`].
    pub fn into_result(self) -> CountdownResult<Self> {
        if self.status.success() {
            Ok(self)
        } else {
            Err(CountdownError::tool(
                self.program,
                Some(self.status),
                self.stderr.trim().to_string(),
            ))
        }
    }

    /// Fail when the program claimed success but `artifact` was not written.
    pub fn expect_artifact(self, artifact: &Path) -> CountdownResult<Self> {
        if artifact.exists() {
            Ok(self)
        } else {
            let mut stderr = format!("expected output '{}' was not created", artifact.display());
            let captured = self.stderr.trim();
            if !captured.is_empty() {
                stderr.push_str(": ");
                stderr.push_str(captured);
            }
            Err(CountdownError::tool(self.program, Some(self.status), stderr))
        }
    }
}

/// Run `program` to completion with stdin closed, capturing stderr.
///
/// There is no timeout; a hung child blocks the caller.
pub fn run_tool<I, S>(program: &Path, args: I) -> CountdownResult<ToolOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| CountdownError::tool(program, None, format!("failed to spawn: {e}")))?;

    Ok(ToolOutput {
        program: program.to_path_buf(),
        status: output.status,
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/encode/tool.rs"]
mod tests;
