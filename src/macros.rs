#![allow(unused_macros, dead_code)]
macro_rules! verbose_println {
    ($($p:expr),+) => {
        if crate::config::verbose() {
            eprintln!($($p),+);
        }
    }
}
// Diagnostics go to stderr; stdout carries only the generated table or search hits.
macro_rules! info {
    ($($p:expr),+) => {
        eprintln!("{}: {}", paint!(blue!("INFO"), "INFO"), format_args!($($p),+))
    }
}
macro_rules! warn {
    ($($p:expr),+) => {
        eprintln!("{}: {}", paint!(red!("WARNING"), "WARNING"), format_args!($($p),+))
    }
}
macro_rules! line_err {
    ($line:expr, $kind:expr, $msg:expr) => {
        Error::new($kind, Some($line), format!("{}", $msg).as_str())
    };
}
macro_rules! malformed_row {
    ($line:expr, $($msg:expr),*) => {
        Error::new(
            crate::ErrorKind::MalformedRow,
            Some($line),
            format!($($msg),*).as_str(),
        )
    };
}
// pick the colored or the plain rendition depending on where stderr goes
macro_rules! paint {
    ($colored:expr, $plain:expr) => {
        if crate::term::color() {
            $colored
        } else {
            $plain
        }
    };
}
macro_rules! color {
    ($color: literal, $msg: expr) => {
        concat!("\x1b[", $color, "m", $msg, "\x1b[0m")
    };
}
macro_rules! red {
    ($msg:expr) => {
        color!(91, $msg)
    };
}
macro_rules! blue {
    ($msg:expr) => {
        color!(94, $msg)
    };
}
