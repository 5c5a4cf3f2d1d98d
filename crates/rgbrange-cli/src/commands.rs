use anyhow::{Context, Result, bail};
use comfy_table::{CellAlignment, Table};

use rgbrange_cli::pipeline::{ConvertOptions, ConvertResult, run_convert};
use rgbrange_model::{Range, RangeChoice};

use crate::cli::{BitDepthArg, ConvertArgs, FromRangeArgs, PresetsArgs, RangeKindArg, ToRangeArgs};
use crate::summary::{align_column, apply_table_style, header_cell};

pub fn run_presets(args: &PresetsArgs) -> Result<()> {
    let presets = Range::presets();
    if args.json {
        let json = serde_json::to_string_pretty(&presets).context("serialize presets")?;
        println!("{json}");
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Bit depth"),
        header_cell("Range"),
        header_cell("Min"),
        header_cell("Max"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for entry in presets {
        table.add_row(vec![
            entry.depth.to_string(),
            entry.kind.to_string(),
            entry.range.min.to_string(),
            entry.range.max.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_convert_command(args: &ConvertArgs) -> Result<ConvertResult> {
    let options = ConvertOptions {
        input: args.input.clone(),
        source: source_choice(&args.from)?,
        target: target_choice(&args.to)?,
        output: args.output.clone(),
        dry_run: args.dry_run,
    };
    run_convert(&options)
}

fn source_choice(args: &FromRangeArgs) -> Result<RangeChoice> {
    range_choice(
        "source",
        args.from_bits,
        args.from_range,
        args.from_min.as_deref(),
        args.from_max.as_deref(),
    )
}

fn target_choice(args: &ToRangeArgs) -> Result<RangeChoice> {
    range_choice(
        "target",
        args.to_bits,
        args.to_range,
        args.to_min.as_deref(),
        args.to_max.as_deref(),
    )
}

/// Turn one side's flags into a selection; clap already enforces that exactly
/// one complete form is present.
fn range_choice(
    side: &str,
    bits: Option<BitDepthArg>,
    kind: Option<RangeKindArg>,
    min: Option<&str>,
    max: Option<&str>,
) -> Result<RangeChoice> {
    match (bits, kind, min, max) {
        (Some(bits), Some(kind), None, None) => Ok(RangeChoice::preset(bits.into(), kind.into())),
        (None, None, Some(min), Some(max)) => Ok(RangeChoice::custom(min, max)),
        _ => bail!("{side} range needs either a bit depth and range type or both custom bounds"),
    }
}
