//! Command-line configuration.
//!
//! Every flag can also come from a `TIMELORD_*` environment variable; an
//! explicit flag wins.

use clap::Parser;

use crate::types::{CLEAR_ANIMATION_MS, DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_BOARD_SIDE};

/// Falling-block puzzle game in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "timelord-tetris",
    version,
    about = "Falling-block puzzle game in the terminal",
    long_about = "Stack the falling pieces and complete rows to clear them.\n\n\
        CONTROLS:\n  Left/A/H    Move left     Right/D/L   Move right\n  \
        Down/S/J    Soft drop     Space/W     Hard drop\n  \
        Up/K/X      Rotate CW     Z/Y/Q       Rotate CCW\n  \
        Mouse left  Rotate CCW    Mouse right Rotate CW\n  \
        Enter       Start         R           Reset        Esc  Quit"
)]
pub struct Config {
    /// Seed for the piece sequence (random when not set).
    #[arg(long, env = "TIMELORD_SEED")]
    pub seed: Option<u32>,

    /// Well width in cells.
    #[arg(
        long,
        env = "TIMELORD_WIDTH",
        default_value_t = DEFAULT_WIDTH,
        value_parser = clap::value_parser!(u16).range(MIN_BOARD_SIDE as i64..=64)
    )]
    pub width: u16,

    /// Well height in cells.
    #[arg(
        long,
        env = "TIMELORD_HEIGHT",
        default_value_t = DEFAULT_HEIGHT,
        value_parser = clap::value_parser!(u16).range(MIN_BOARD_SIDE as i64..=64)
    )]
    pub height: u16,

    /// Length of the row-clear animation in milliseconds.
    #[arg(
        long,
        env = "TIMELORD_CLEAR_MS",
        default_value_t = CLEAR_ANIMATION_MS,
        value_parser = clap::value_parser!(u32).range(1..=10_000)
    )]
    pub clear_ms: u32,

    /// Do not ring the terminal bell when rows are cleared.
    #[arg(long, env = "TIMELORD_NO_BELL")]
    pub no_bell: bool,

    /// Print the final game snapshot as JSON on exit.
    #[arg(long, env = "TIMELORD_JSON")]
    pub json: bool,
}

impl Config {
    /// The configured seed, or one derived from the clock
    pub fn seed_or_random(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        Config::try_parse_from(std::iter::once("timelord-tetris").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 20);
        assert_eq!(config.clear_ms, 1500);
        assert!(!config.no_bell);
        assert!(!config.json);
    }

    #[test]
    fn explicit_flags() {
        let config = parse(&[
            "--seed", "42", "--width", "12", "--height", "24", "--clear-ms", "300", "--no-bell",
            "--json",
        ])
        .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.seed_or_random(), 42);
        assert_eq!((config.width, config.height), (12, 24));
        assert_eq!(config.clear_ms, 300);
        assert!(config.no_bell);
        assert!(config.json);
    }

    #[test]
    fn rejects_tiny_wells() {
        assert!(parse(&["--width", "3"]).is_err());
        assert!(parse(&["--height", "2"]).is_err());
        assert!(parse(&["--width", "4", "--height", "4"]).is_ok());
    }

    #[test]
    fn rejects_zero_clear_time() {
        assert!(parse(&["--clear-ms", "0"]).is_err());
    }
}
