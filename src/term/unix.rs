pub fn init() {
    // intentionally left blank
}

pub fn stderr_is_terminal() -> bool { unsafe { libc::isatty(libc::STDERR_FILENO) == 1 } }
