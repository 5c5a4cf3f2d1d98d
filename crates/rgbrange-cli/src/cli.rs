//! CLI argument definitions for rgbrange.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use rgbrange_model::{BitDepth, RangeKind};

#[derive(Parser)]
#[command(
    name = "rgbrange",
    version,
    about = "Remap RGB sample tables between bit depths and signal ranges",
    long_about = "Remap R, G, B sample values in a CSV table from one value range to another.\n\n\
                  Accepts a CSV with an R,G,B header, or headerless 3-column (R,G,B) and\n\
                  4-column (Index,R,G,B) tables. Values are scaled, rounded half-to-even\n\
                  and clipped to the target range."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a CSV sample table to a new range.
    Convert(ConvertArgs),

    /// List the built-in bit depth and range presets.
    Presets(PresetsArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// CSV file with R, G, B samples.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[command(flatten)]
    pub from: FromRangeArgs,

    #[command(flatten)]
    pub to: ToRangeArgs,

    /// Output file (default: <INPUT>_Converted_<MIN>-<MAX>.csv beside the input).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Convert and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Number of converted rows to show after the summary.
    #[arg(long = "preview", value_name = "ROWS", default_value_t = 5)]
    pub preview: usize,
}

/// Source range: a preset (`--from-bits` + `--from-range`) or custom bounds.
#[derive(Args)]
#[group(id = "from", required = true, multiple = true)]
pub struct FromRangeArgs {
    /// Source bit depth.
    #[arg(
        long = "from-bits",
        value_enum,
        value_name = "BITS",
        requires = "from_range",
        conflicts_with_all = ["from_min", "from_max"]
    )]
    pub from_bits: Option<BitDepthArg>,

    /// Source range convention.
    #[arg(long = "from-range", value_enum, value_name = "RANGE", requires = "from_bits")]
    pub from_range: Option<RangeKindArg>,

    /// Custom source minimum.
    #[arg(
        long = "from-min",
        value_name = "MIN",
        requires = "from_max",
        allow_hyphen_values = true
    )]
    pub from_min: Option<String>,

    /// Custom source maximum.
    #[arg(
        long = "from-max",
        value_name = "MAX",
        requires = "from_min",
        allow_hyphen_values = true
    )]
    pub from_max: Option<String>,
}

/// Target range: a preset (`--to-bits` + `--to-range`) or custom bounds.
#[derive(Args)]
#[group(id = "to", required = true, multiple = true)]
pub struct ToRangeArgs {
    /// Target bit depth.
    #[arg(
        long = "to-bits",
        value_enum,
        value_name = "BITS",
        requires = "to_range",
        conflicts_with_all = ["to_min", "to_max"]
    )]
    pub to_bits: Option<BitDepthArg>,

    /// Target range convention.
    #[arg(long = "to-range", value_enum, value_name = "RANGE", requires = "to_bits")]
    pub to_range: Option<RangeKindArg>,

    /// Custom target minimum.
    #[arg(
        long = "to-min",
        value_name = "MIN",
        requires = "to_max",
        allow_hyphen_values = true
    )]
    pub to_min: Option<String>,

    /// Custom target maximum.
    #[arg(
        long = "to-max",
        value_name = "MAX",
        requires = "to_min",
        allow_hyphen_values = true
    )]
    pub to_max: Option<String>,
}

#[derive(Parser)]
pub struct PresetsArgs {
    /// Print presets as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI bit depth choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum BitDepthArg {
    #[value(name = "8")]
    Eight,
    #[value(name = "10")]
    Ten,
    #[value(name = "12")]
    Twelve,
}

/// CLI range convention choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum RangeKindArg {
    Full,
    #[value(alias = "limited")]
    Legal,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<BitDepthArg> for BitDepth {
    fn from(arg: BitDepthArg) -> Self {
        match arg {
            BitDepthArg::Eight => BitDepth::Eight,
            BitDepthArg::Ten => BitDepth::Ten,
            BitDepthArg::Twelve => BitDepth::Twelve,
        }
    }
}

impl From<RangeKindArg> for RangeKind {
    fn from(arg: RangeKindArg) -> Self {
        match arg {
            RangeKindArg::Full => RangeKind::Full,
            RangeKindArg::Legal => RangeKind::Legal,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_preset_ranges() {
        let cli = Cli::try_parse_from([
            "rgbrange",
            "convert",
            "in.csv",
            "--from-bits",
            "8",
            "--from-range",
            "legal",
            "--to-bits",
            "10",
            "--to-range",
            "full",
        ])
        .unwrap();
        let Command::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert!(matches!(args.from.from_bits, Some(BitDepthArg::Eight)));
        assert!(matches!(args.to.to_range, Some(RangeKindArg::Full)));
        assert_eq!(args.preview, 5);
    }

    #[test]
    fn test_parse_custom_negative_bounds() {
        let cli = Cli::try_parse_from([
            "rgbrange",
            "convert",
            "in.csv",
            "--from-min",
            "-64",
            "--from-max",
            "959",
            "--to-bits",
            "8",
            "--to-range",
            "full",
        ])
        .unwrap();
        let Command::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.from.from_min.as_deref(), Some("-64"));
        assert_eq!(args.from.from_max.as_deref(), Some("959"));
    }

    #[test]
    fn test_missing_target_range_is_rejected() {
        let result = Cli::try_parse_from([
            "rgbrange",
            "convert",
            "in.csv",
            "--from-bits",
            "8",
            "--from-range",
            "full",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_preset_and_custom_conflict() {
        let result = Cli::try_parse_from([
            "rgbrange",
            "convert",
            "in.csv",
            "--from-bits",
            "8",
            "--from-range",
            "full",
            "--from-min",
            "0",
            "--from-max",
            "255",
            "--to-bits",
            "8",
            "--to-range",
            "full",
        ]);
        assert!(result.is_err());
    }
}
