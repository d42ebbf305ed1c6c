use dioxus_logger::tracing::Level;

/// Build-time settings for the gate and the page shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateConfig {
    pub log_level: Level,
    /// Show the abbreviated account next to the log out button.
    pub show_account: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            show_account: true,
        }
    }
}

impl GateConfig {
    /// Reads the configuration baked in at compile time.
    ///
    /// A wasm bundle has no process environment, so these come from
    /// `option_env!` rather than `std::env`.
    ///
    /// # Environment Variables (case-insensitive):
    /// - `BINGO_LOG_LEVEL`: "trace", "debug", "info", "warn" or "error".
    ///   defaults to info.
    /// - `BINGO_SHOW_ACCOUNT`: "false" hides the account badge. defaults to true.
    pub fn from_env() -> Self {
        Self::from_values(option_env!("BINGO_LOG_LEVEL"), option_env!("BINGO_SHOW_ACCOUNT"))
    }

    pub fn from_values(log_level: Option<&str>, show_account: Option<&str>) -> Self {
        let default = Self::default();
        Self {
            log_level: log_level.and_then(parse_level).unwrap_or(default.log_level),
            show_account: show_account
                .and_then(parse_bool)
                .unwrap_or(default.show_account),
        }
    }
}

fn parse_level(raw: &str) -> Option<Level> {
    match raw.trim().to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
