//! # Output Configuration
//!
//! Status lines always start with `✓` or `✗`. What this module decides is
//! whether those glyphs get ANSI colors, based on terminal capabilities
//! and user preferences.
//!
//! ## Respecting User Preferences
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals

use std::env;

use console::{style, StyledObject};

/// Output configuration for controlling colors.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether the status glyphs are colored.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `always` and `never` win over the environment. In `auto` mode an
    /// explicit environment preference is used first, then the color
    /// support of stdout.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => env_preference()
                .unwrap_or_else(|| console::Term::stdout().features().colors_supported()),
        };

        Self { use_color }
    }

    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    pub fn without_color() -> Self {
        Self { use_color: false }
    }

    /// Marker printed in front of success lines.
    pub fn ok_mark(&self) -> String {
        self.paint(style("✓").green())
    }

    /// Marker printed in front of failure lines.
    pub fn fail_mark(&self) -> String {
        self.paint(style("✗").red())
    }

    fn paint(&self, glyph: StyledObject<&str>) -> String {
        glyph.force_styling(self.use_color).to_string()
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Color preference stated through environment variables, if any.
///
/// `NO_COLOR` (even empty) and `CLICOLOR=0` turn colors off and take
/// precedence over `CLICOLOR_FORCE`; `TERM=dumb` only applies when nothing
/// else was said.
fn env_preference() -> Option<bool> {
    let is = |name: &str, value: &str| env::var(name).is_ok_and(|v| v == value);

    if env::var_os("NO_COLOR").is_some() || is("CLICOLOR", "0") {
        Some(false)
    } else if env::var("CLICOLOR_FORCE").is_ok_and(|v| !v.is_empty() && v != "0") {
        Some(true)
    } else if is("TERM", "dumb") {
        Some(false)
    } else {
        None
    }
}
