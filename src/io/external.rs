use std::io::Write;
use std::process::{Command, Stdio};

/// Write text to the system clipboard, best effort.
/// Returns Err when no clipboard helper is available or the helper fails,
/// so callers can fall back to showing the text for manual copy.
pub fn clipboard_set(text: &str) -> std::io::Result<()> {
    #[cfg(target_os = "macos")]
    let result = pipe_to(Command::new("pbcopy"), text);
    #[cfg(target_os = "linux")]
    let result = pipe_to(
        {
            let mut cmd = Command::new("xclip");
            cmd.args(["-selection", "clipboard"]);
            cmd
        },
        text,
    );
    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    let result: std::io::Result<()> = Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "no clipboard helper on this platform",
    ));
    result
}

#[cfg(any(target_os = "macos", target_os = "linux"))]
fn pipe_to(mut cmd: Command, text: &str) -> std::io::Result<()> {
    let mut child = cmd.stdin(Stdio::piped()).stderr(Stdio::null()).spawn()?;
    if let Some(stdin) = child.stdin.as_mut() {
        stdin.write_all(text.as_bytes())?;
    }
    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other("clipboard helper exited nonzero"))
    }
}

/// Hand a mailto URL to the platform opener, which navigates to the
/// default mail client.
pub fn open_url(url: &str) -> std::io::Result<()> {
    #[cfg(target_os = "macos")]
    let opener = "open";
    #[cfg(target_os = "linux")]
    let opener = "xdg-open";
    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    return Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "no URL opener on this platform",
    ));

    #[cfg(any(target_os = "macos", target_os = "linux"))]
    {
        let status = Command::new(opener)
            .arg(url)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        if status.success() {
            Ok(())
        } else {
            Err(std::io::Error::other("URL opener exited nonzero"))
        }
    }
}
