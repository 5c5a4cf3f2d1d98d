//! Integration tests for the conversion pipeline.

use std::fs;
use std::path::PathBuf;

use rgbrange_cli::pipeline::{ConvertOptions, resolve_mapping, run_convert};
use rgbrange_ingest::IngestError;
use rgbrange_model::{BitDepth, Range, RangeChoice, RangeError, RangeKind, TableLayout};
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn options(input: PathBuf, source: RangeChoice, target: RangeChoice) -> ConvertOptions {
    ConvertOptions {
        input,
        source,
        target,
        output: None,
        dry_run: false,
    }
}

fn csv_files(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn expected(value: f64, source: Range, target: Range) -> i64 {
    let scale = (target.max - target.min) as f64 / (source.max - source.min) as f64;
    let scaled = (value - source.min as f64) * scale + target.min as f64;
    scaled
        .round_ties_even()
        .clamp(target.min as f64, target.max as f64) as i64
}

#[test]
fn header_table_eight_bit_full_to_ten_bit_full() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "patches.csv", "R,G,B\n100,150,200\n");
    let source = Range::preset(BitDepth::Eight, RangeKind::Full);
    let target = Range::preset(BitDepth::Ten, RangeKind::Full);

    let result = run_convert(&options(
        input,
        RangeChoice::preset(BitDepth::Eight, RangeKind::Full),
        RangeChoice::preset(BitDepth::Ten, RangeKind::Full),
    ))
    .unwrap();

    let row = [100.0, 150.0, 200.0].map(|v| expected(v, source, target));
    assert_eq!(result.layout, TableLayout::Header);
    assert_eq!(result.table.rows[0].rgb, row);
    assert_eq!(
        result.output.file_name().unwrap().to_str(),
        Some("patches_Converted_0-1023.csv")
    );
    let written = fs::read_to_string(&result.output).unwrap();
    assert_eq!(written, format!("R,G,B\n{},{},{}\n", row[0], row[1], row[2]));
}

#[test]
fn headerless_indexed_legal_to_full() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "lut.csv", "7,16,128,235\n");

    let result = run_convert(&options(
        input,
        RangeChoice::preset(BitDepth::Eight, RangeKind::Legal),
        RangeChoice::preset(BitDepth::Eight, RangeKind::Full),
    ))
    .unwrap();

    assert_eq!(result.layout, TableLayout::IndexRgb);
    assert_eq!(result.table.rows[0].index.as_deref(), Some("7"));
    assert_eq!(result.table.rows[0].rgb, [0, 130, 255]);

    let written = fs::read_to_string(dir.path().join("lut_Converted_0-255.csv")).unwrap();
    insta::assert_snapshot!(written, @r"
    Index,R,G,B
    7,0,130,255
    ");
}

#[test]
fn five_columns_fail_without_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "wide.csv", "1,2,3,4,5\n6,7,8,9,10\n");

    let err = run_convert(&options(
        input,
        RangeChoice::preset(BitDepth::Eight, RangeKind::Full),
        RangeChoice::preset(BitDepth::Ten, RangeKind::Full),
    ))
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<IngestError>(),
        Some(IngestError::ColumnInference { width: 5 })
    ));
    assert_eq!(csv_files(&dir), vec!["wide.csv"]);
}

#[test]
fn header_missing_b_falls_back_then_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "partial.csv", "R,G,X,Y,Z\n1,2,3,4,5\n");

    let err = run_convert(&options(
        input,
        RangeChoice::preset(BitDepth::Eight, RangeKind::Full),
        RangeChoice::preset(BitDepth::Eight, RangeKind::Legal),
    ))
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<IngestError>(),
        Some(IngestError::ColumnInference { width: 5 })
    ));
}

#[test]
fn out_of_source_values_are_clipped() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "hot.csv", "R,G,B\n0,255,300\n-20,16,235\n");

    let result = run_convert(&options(
        input,
        RangeChoice::preset(BitDepth::Eight, RangeKind::Legal),
        RangeChoice::preset(BitDepth::Eight, RangeKind::Full),
    ))
    .unwrap();

    assert_eq!(result.table.rows[0].rgb, [0, 255, 255]);
    assert_eq!(result.table.rows[1].rgb, [0, 0, 255]);
}

#[test]
fn fractional_input_produces_integers() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "float.csv", "0.4,1.5,2.5\n");

    let result = run_convert(&options(
        input,
        RangeChoice::custom("0", "10"),
        RangeChoice::custom("0", "10"),
    ))
    .unwrap();

    assert_eq!(result.layout, TableLayout::Rgb);
    assert_eq!(result.table.rows[0].rgb, [0, 2, 2]);
}

#[test]
fn degenerate_source_collapses_to_target_min() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "flat.csv", "1,2,3\n");

    let result = run_convert(&options(
        input,
        RangeChoice::custom("5", "5"),
        RangeChoice::preset(BitDepth::Ten, RangeKind::Legal),
    ))
    .unwrap();

    assert_eq!(result.mapping.scale(), 0.0);
    assert_eq!(result.table.rows[0].rgb, [64, 64, 64]);
}

#[test]
fn invalid_custom_bound_is_reported_before_reading() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "wide.csv", "1,2,3,4,5\n");

    let err = run_convert(&options(
        input,
        RangeChoice::custom("0", "1k"),
        RangeChoice::preset(BitDepth::Eight, RangeKind::Full),
    ))
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<RangeError>(),
        Some(RangeError::InvalidRangeInput { bound: "maximum", .. })
    ));
    assert!(format!("{err:#}").starts_with("source range: "));
}

#[test]
fn missing_input_is_reported_first() {
    let dir = TempDir::new().unwrap();

    let err = run_convert(&options(
        dir.path().join("absent.csv"),
        RangeChoice::custom("bad", "bad"),
        RangeChoice::preset(BitDepth::Eight, RangeKind::Full),
    ))
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<IngestError>(),
        Some(IngestError::FileNotFound { .. })
    ));
}

#[test]
fn malformed_value_names_line_and_column() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "typo.csv", "R,G,B\n1,2,3\n4,5,x\n");

    let err = run_convert(&options(
        input,
        RangeChoice::preset(BitDepth::Eight, RangeKind::Full),
        RangeChoice::preset(BitDepth::Ten, RangeKind::Full),
    ))
    .unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("malformed B value 'x' on line 3"), "{message}");
    assert_eq!(csv_files(&dir), vec!["typo.csv"]);
}

#[test]
fn dry_run_and_output_override() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "patches.csv", "1,2,3\n");

    let mut dry = options(
        input.clone(),
        RangeChoice::preset(BitDepth::Eight, RangeKind::Full),
        RangeChoice::preset(BitDepth::Twelve, RangeKind::Full),
    );
    dry.dry_run = true;
    let result = run_convert(&dry).unwrap();
    assert!(!result.written);
    assert_eq!(csv_files(&dir), vec!["patches.csv"]);

    let custom = dir.path().join("out.csv");
    let mut explicit = dry.clone();
    explicit.dry_run = false;
    explicit.output = Some(custom.clone());
    let result = run_convert(&explicit).unwrap();
    assert!(result.written);
    assert_eq!(result.output, custom);
    assert_eq!(csv_files(&dir), vec!["out.csv", "patches.csv"]);
}

#[test]
fn resolve_mapping_uses_both_choices() {
    let mapping = resolve_mapping(
        &RangeChoice::preset(BitDepth::Ten, RangeKind::Legal),
        &RangeChoice::custom("-10", "10"),
    )
    .unwrap();
    assert_eq!(mapping.source(), Range::new(64, 940));
    assert_eq!(mapping.target(), Range::new(-10, 10));
}
