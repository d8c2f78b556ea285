//! Command-line definitions.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};
use slims_core::{FieldGroup, GameVariant};

#[derive(Parser)]
#[command(name = "slims")]
#[command(version, about = "Save editor for Ratchet & Clank HD collection saves")]
pub struct Cli {
    /// Config file (defaults to <config dir>/slims/config.toml)
    #[arg(short, long, global = true, env = "SLIMS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Bind this game instead of detecting it from the file size (rac1, rac2, rac3)
    #[arg(short, long, global = true, value_parser = parse_variant)]
    pub game: Option<GameVariant>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show detected game, size and checksum status
    Info { file: PathBuf },

    /// List fields with their current values
    List {
        file: PathBuf,

        /// Only list one group (values, weapons, gadgets, unlockables)
        #[arg(long, value_parser = parse_group)]
        group: Option<FieldGroup>,

        #[arg(short, long, value_enum, default_value_t = ListFormat::Text)]
        format: ListFormat,
    },

    /// Print a single field
    Get {
        file: PathBuf,
        /// Field name or `group:index`
        field: String,
    },

    /// Set a field and save; integers are clamped to the field's range
    Set {
        file: PathBuf,
        /// Field name or `group:index`
        field: String,
        /// Integer, or true/false/on/off/1/0 for flags
        value: String,
    },

    /// Flip a gadget or unlockable flag and save
    Toggle {
        file: PathBuf,
        /// Field name or `group:index`
        field: String,
    },

    /// Step a value up or down, or jump to its bounds, then save
    Adjust {
        file: PathBuf,
        /// Field name or `group:index`
        field: String,

        /// Number of steps up
        #[arg(long, default_value_t = 0)]
        up: u32,

        /// Number of steps down
        #[arg(long, default_value_t = 0)]
        down: u32,

        /// Jump to the minimum before stepping
        #[arg(long, conflicts_with = "max")]
        min: bool,

        /// Jump to the maximum before stepping
        #[arg(long)]
        max: bool,

        /// Step size (snapped to a power of ten; defaults from config)
        #[arg(long)]
        step: Option<i32>,
    },

    /// Recalculate the trailing checksum and save
    FixChecksum { file: PathBuf },

    /// List files in a directory with their detected game
    Scan { dir: PathBuf },

    /// Dump raw bytes of a save file
    Hexdump {
        file: PathBuf,

        /// Start offset (hex, with or without 0x)
        #[arg(long, default_value = "0")]
        offset: String,

        /// Number of bytes
        #[arg(long, default_value_t = 256)]
        length: usize,

        /// Show ASCII column
        #[arg(long)]
        ascii: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Text,
    Tsv,
    Json,
}

fn parse_variant(s: &str) -> Result<GameVariant, String> {
    GameVariant::from_str(s)
        .map_err(|_| format!("unknown game '{}' (expected rac1, rac2 or rac3)", s))
}

fn parse_group(s: &str) -> Result<FieldGroup, String> {
    FieldGroup::from_str(s).map_err(|_| {
        format!(
            "unknown group '{}' (expected values, weapons, gadgets or unlockables)",
            s
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_command() {
        let cli = Cli::parse_from(["slims", "--game", "rac2", "set", "SAVE.BIN", "Bolts", "100"]);
        assert_eq!(cli.game, Some(GameVariant::Rac2));
        match cli.command {
            Command::Set { file, field, value } => {
                assert_eq!(file, PathBuf::from("SAVE.BIN"));
                assert_eq!(field, "Bolts");
                assert_eq!(value, "100");
            }
            _ => panic!("expected set"),
        }
    }

    #[test]
    fn test_parse_list_group() {
        let cli = Cli::parse_from([
            "slims", "list", "SAVE.BIN", "--group", "weapons", "-f", "json",
        ]);
        match cli.command {
            Command::List { group, format, .. } => {
                assert_eq!(group, Some(FieldGroup::Weapons));
                assert_eq!(format, ListFormat::Json);
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_reject_unknown_game() {
        assert!(Cli::try_parse_from(["slims", "--game", "rac9", "info", "SAVE.BIN"]).is_err());
    }

    #[test]
    fn test_adjust_min_max_conflict() {
        let args = ["slims", "adjust", "S.BIN", "Bolts", "--min", "--max"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
