pub mod io;

/// Reset SIGPIPE to default behavior (SIG_DFL).
/// Rust sets SIGPIPE to SIG_IGN by default, so `romsplit ... | head` would
/// surface a write error on the confirmation line instead of exiting quietly.
/// This must be called at the start of main().
#[inline]
pub fn reset_sigpipe() {
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

/// Format an IO error message without the "(os error N)" suffix.
/// Rust's Display impl adds " (os error 2)" after e.g. "No such file or directory";
/// the diagnostics read better without it.
pub fn io_error_msg(e: &std::io::Error) -> String {
    if let Some(raw) = e.raw_os_error() {
        let os_err = std::io::Error::from_raw_os_error(raw);
        let msg = format!("{}", os_err);
        msg.replace(&format!(" (os error {})", raw), "")
    } else {
        format!("{}", e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_msg_strips_os_suffix() {
        let e = std::io::Error::from_raw_os_error(libc::ENOENT);
        let msg = io_error_msg(&e);
        assert!(!msg.contains("os error"));
        assert!(!msg.is_empty());
    }

    #[test]
    fn test_io_error_msg_custom() {
        let e = std::io::Error::other("short read");
        assert_eq!(io_error_msg(&e), "short read");
    }
}
