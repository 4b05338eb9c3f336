use lazy_static::lazy_static;

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub(crate) use unix::*;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub(crate) use self::windows::*;

lazy_static! {
    static ref COLOR: bool = !crate::config::no_color() && stderr_is_terminal();
}

/// True if diagnostics should carry ANSI color escapes
pub fn color() -> bool { *COLOR }
