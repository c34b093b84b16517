//! Local Climate Zone selection.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The Local Climate Zones offered by the selector.
///
/// Carries no behavior of its own: the label is a display tag handed to the
/// prototype renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LczType {
    #[default]
    #[value(name = "lcz1", alias = "compact-high-rise")]
    CompactHighRise,
    #[value(name = "lcz2", alias = "compact-mid-rise")]
    CompactMidRise,
    #[value(name = "lcz3", alias = "compact-low-rise")]
    CompactLowRise,
    #[value(name = "lcz6", alias = "open-low-rise")]
    OpenLowRise,
    #[value(name = "lcz8", alias = "large-low-rise")]
    LargeLowRise,
    #[value(name = "lczb", alias = "scattered-trees")]
    ScatteredTrees,
    #[value(name = "lczd", alias = "low-plants")]
    LowPlants,
}

impl LczType {
    /// Selector order.
    pub const ALL: [LczType; 7] = [
        LczType::CompactHighRise,
        LczType::CompactMidRise,
        LczType::CompactLowRise,
        LczType::OpenLowRise,
        LczType::LargeLowRise,
        LczType::ScatteredTrees,
        LczType::LowPlants,
    ];

    /// Zone code as used in the LCZ scheme (`1`..`10`, `A`..`G`).
    pub fn code(self) -> &'static str {
        match self {
            Self::CompactHighRise => "1",
            Self::CompactMidRise => "2",
            Self::CompactLowRise => "3",
            Self::OpenLowRise => "6",
            Self::LargeLowRise => "8",
            Self::ScatteredTrees => "B",
            Self::LowPlants => "D",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::CompactHighRise => "Compact High-Rise",
            Self::CompactMidRise => "Compact Mid-Rise",
            Self::CompactLowRise => "Compact Low-Rise",
            Self::OpenLowRise => "Open Low-Rise",
            Self::LargeLowRise => "Large Low-Rise",
            Self::ScatteredTrees => "Scattered Trees",
            Self::LowPlants => "Low Plants",
        }
    }

    /// Full selector label, e.g. `LCZ 1 - Compact High-Rise`.
    pub fn label(self) -> String {
        format!("LCZ {} - {}", self.code(), self.description())
    }

    /// Name accepted on the command line.
    pub fn cli_name(self) -> String {
        format!("lcz{}", self.code().to_ascii_lowercase())
    }

    fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|lcz| *lcz == self)
            .unwrap_or_default()
    }

    /// Next zone in selector order, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous zone in selector order, wrapping around.
    pub fn previous(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for LczType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for LczType {
    type Err = String;

    /// Accepts the full label, the CLI name (`lcz6`), the bare code (`6`,
    /// `B`), `LCZ 6`, or the kebab-case description (`open-low-rise`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        let compact: String = needle.chars().filter(|c| !c.is_whitespace()).collect();

        Self::ALL
            .into_iter()
            .find(|lcz| {
                let code = lcz.code().to_ascii_lowercase();
                needle == lcz.label().to_ascii_lowercase()
                    || compact == lcz.cli_name()
                    || compact == code
                    || needle == lcz.description().to_ascii_lowercase().replace(' ', "-")
            })
            .ok_or_else(|| format!("unknown local climate zone: {}", s))
    }
}

impl TryFrom<String> for LczType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LczType> for String {
    fn from(lcz: LczType) -> Self {
        lcz.label()
    }
}
