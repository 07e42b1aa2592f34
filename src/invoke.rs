use crate::error::{LportsError, LportsResult};
use std::process::Command;

// Some systems (Arch, Debian) install lsof in /usr/bin and others (centos)
// install it in /usr/sbin, even though regular users can use it too. FreeBSD
// puts it in /usr/local/sbin. So the bare name is resolved through PATH
// rather than an absolute path.
pub(crate) const LSOF: &str = "lsof";

/// Run the enumeration tool once and capture its stdout in full.
///
/// A launch failure or non-zero exit is terminal for the run, there are no
/// retries.
pub(crate) fn capture(command: &str, args: &[&str]) -> LportsResult<String> {
    let execution_error = |output: String, cause: String| LportsError::Execution {
        command: command.to_string(),
        args: args.iter().map(|a| a.to_string()).collect(),
        output,
        cause,
    };

    let output = Command::new(command)
        .args(args)
        .output()
        .map_err(|e| execution_error(String::new(), e.to_string()))?;

    if !output.status.success() {
        return Err(execution_error(
            String::from_utf8_lossy(&output.stdout).into_owned(),
            output.status.to_string(),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
