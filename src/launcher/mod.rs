//! Console capability check
//!
//! The tool is interactive, so a double-click launch on Windows arrives
//! without a console attached. A single capability check at startup
//! either proceeds in place or re-executes the binary inside a freshly
//! spawned terminal window.

use std::io::IsTerminal;

/// True when an interactive terminal is attached to stdout
pub fn has_console() -> bool {
    std::io::stdout().is_terminal()
}

/// Relaunch inside a new terminal window when no console is attached.
///
/// Returns `true` when a relaunch was spawned and the current process
/// should exit without doing anything else.
#[cfg(windows)]
pub fn relaunch_in_terminal() -> std::io::Result<bool> {
    if has_console() {
        return Ok(false);
    }

    let exe = std::env::current_exe()?;
    std::process::Command::new("cmd")
        .args(["/c", "start", "cmd", "/k"])
        .arg(exe)
        .spawn()?;
    Ok(true)
}

/// Piped and terminal invocations behave identically outside Windows.
#[cfg(not(windows))]
pub fn relaunch_in_terminal() -> std::io::Result<bool> {
    Ok(false)
}
