//! Color and emoji handling for terminal reports.

use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiMode {
    Auto,   // Use emoji if the locale looks like UTF-8
    Always, // Always use emoji
    Never,  // Never use emoji
}

impl EmojiMode {
    pub fn should_use_emoji(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_emoji_support(),
        }
    }
}

fn detect_emoji_support() -> bool {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .filter_map(|key| env::var(key).ok())
        .find(|value| !value.is_empty())
        .is_some_and(|value| value.to_uppercase().contains("UTF-8"))
}

#[derive(Debug, Clone, Copy)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub emoji: EmojiMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            emoji: EmojiMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode, emoji: EmojiMode) -> Self {
        Self { color, emoji }
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        // NO_COLOR per no-color.org
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// ASCII-only, no colors, no emoji
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            emoji: EmojiMode::Never,
        }
    }

    /// Plain when requested, environment-driven otherwise
    pub fn for_plain_flag(plain: bool) -> Self {
        if plain {
            Self::plain()
        } else {
            Self::from_env()
        }
    }
}

pub trait OutputFormatter {
    fn header(&self, text: &str) -> String;
    fn metric(&self, text: &str) -> String;
    fn emoji(&self, emoji: &str, fallback: &str) -> String;
    fn dim(&self, text: &str) -> String;
}

/// Resolves color and emoji decisions once at construction.
pub struct ColoredFormatter {
    color: bool,
    emoji: bool,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        Self {
            color: config.color.should_use_color(),
            emoji: config.emoji.should_use_emoji(),
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn header(&self, text: &str) -> String {
        if self.color {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn metric(&self, text: &str) -> String {
        if self.color {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn emoji(&self, emoji: &str, fallback: &str) -> String {
        if self.emoji {
            emoji.to_string()
        } else {
            fallback.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_formatter_returns_text_unchanged() {
        let formatter = ColoredFormatter::new(FormattingConfig::plain());
        assert_eq!(formatter.header("Title"), "Title");
        assert_eq!(formatter.metric("43.5/100"), "43.5/100");
        assert_eq!(formatter.emoji("📊", ""), "");
    }

    #[test]
    fn forced_emoji_is_kept() {
        let formatter =
            ColoredFormatter::new(FormattingConfig::new(ColorMode::Never, EmojiMode::Always));
        assert_eq!(formatter.emoji("🧱", "#"), "🧱");
    }
}
