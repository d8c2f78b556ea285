use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Smallest Ratchet & Clank HD save
pub const RAC1_MIN_LEN: usize = 650_000;
pub const RAC1_MAX_LEN: usize = 850_000;
pub const RAC2_MIN_LEN: usize = RAC1_MAX_LEN + 1;
pub const RAC2_MAX_LEN: usize = 1_150_000;
pub const RAC3_MIN_LEN: usize = RAC2_MAX_LEN + 1;

/// Supported games
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GameVariant {
    #[default]
    Unknown,
    Rac1,
    Rac2,
    Rac3,
}

impl GameVariant {
    /// Guess the game from a save file's length.
    ///
    /// Only the size is inspected, so this can be wrong for files that were
    /// truncated or padded. Callers that know better should bind a schema
    /// explicitly instead.
    pub fn detect(len: usize) -> Self {
        match len {
            RAC1_MIN_LEN..=RAC1_MAX_LEN => Self::Rac1,
            RAC2_MIN_LEN..=RAC2_MAX_LEN => Self::Rac2,
            RAC3_MIN_LEN.. => Self::Rac3,
            _ => Self::Unknown,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown Game",
            Self::Rac1 => "Ratchet & Clank HD",
            Self::Rac2 => "Ratchet & Clank 2 HD",
            Self::Rac3 => "Ratchet & Clank 3 HD",
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    pub fn is_known(&self) -> bool {
        *self != Self::Unknown
    }
}
