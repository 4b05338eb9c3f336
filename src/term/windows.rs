use windows::Win32::System::Console::*;

pub fn init() {
    unsafe {
        // make sure VT escape sequences will be honored in the console
        let mut cm: CONSOLE_MODE = CONSOLE_MODE::default();
        if let Ok(h) = GetStdHandle(STD_ERROR_HANDLE) {
            if GetConsoleMode(h, &mut cm as *mut CONSOLE_MODE).as_bool() && (cm.0 & 0x4) == 0 {
                cm.0 |= 0x4;
                SetConsoleMode(h, cm);
            }
        }
    }
}

// A handle only has a console mode if it is attached to a console.
pub fn stderr_is_terminal() -> bool {
    let mut cm: CONSOLE_MODE = CONSOLE_MODE::default();
    unsafe {
        match GetStdHandle(STD_ERROR_HANDLE) {
            Ok(h) => GetConsoleMode(h, &mut cm as *mut CONSOLE_MODE).as_bool(),
            Err(_) => false,
        }
    }
}
