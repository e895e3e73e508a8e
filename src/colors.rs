use std::io::{self, IsTerminal};

const RESET: &str = "\x1b[0m";

#[derive(Clone, Copy)]
pub struct Colors {
    pub error: &'static str,
    pub warning: &'static str,
    pub info: &'static str,
    enabled: bool,
}

impl Colors {
    pub fn new(enabled: bool) -> Self {
        if enabled {
            Self {
                error: "\x1b[31m",   // Red
                warning: "\x1b[33m", // Yellow
                info: "\x1b[36m",    // Cyan
                enabled: true,
            }
        } else {
            Self {
                error: "",
                warning: "",
                info: "",
                enabled: false,
            }
        }
    }

    pub fn reset(&self) -> &'static str {
        if self.enabled {
            RESET
        } else {
            ""
        }
    }
}

/// Messages go to stderr while the composed sequence goes to stdout, so
/// color detection looks at stderr.
pub fn should_use_colors(no_color: bool) -> bool {
    // Priority: --no-color > NO_COLOR env > TTY detection
    if no_color {
        return false;
    }
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    io::stderr().is_terminal()
}
