use std::ffi::OsStr;
use std::net::TcpListener;
use std::process::{Command, Output};

/// Returns an `https://127.0.0.1:<port>/` URL nothing is listening on, or
/// `None` when the sandbox forbids binding sockets.
///
/// # Errors
///
/// Returns an error if the probe listener fails for any other reason.
pub fn closed_local_url() -> Result<Option<String>, String> {
    let listener = match TcpListener::bind("127.0.0.1:0") {
        Ok(listener) => listener,
        Err(err) if err.kind() == std::io::ErrorKind::PermissionDenied => return Ok(None),
        Err(err) => return Err(format!("bind probe listener failed: {}", err)),
    };
    let addr = listener
        .local_addr()
        .map_err(|err| format!("listener addr failed: {}", err))?;
    drop(listener);
    Ok(Some(format!("https://{}/", addr)))
}

/// Run the `reqprobe` binary and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_reqprobe<I, S>(args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = reqprobe_bin()?;
    Command::new(bin)
        .args(args)
        .env("REQPROBE_LOG", "error")
        .env("NO_COLOR", "1")
        .output()
        .map_err(|err| format!("run reqprobe failed: {}", err))
}

/// Formats captured output for failure messages.
#[must_use]
pub fn describe(output: &Output) -> String {
    format!(
        "status: {}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

fn reqprobe_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_reqprobe").map_or_else(
        || Err("CARGO_BIN_EXE_reqprobe missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
