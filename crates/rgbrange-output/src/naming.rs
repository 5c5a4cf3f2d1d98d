use std::path::{Path, PathBuf};

use rgbrange_model::Range;

/// `<stem>_Converted_<min>-<max>.csv` for the input file's stem.
pub fn converted_file_name(input: &Path, target: Range) -> String {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    format!("{stem}_Converted_{}-{}.csv", target.min, target.max)
}

/// Default output path: the converted file name in the input's directory.
pub fn output_path_for(input: &Path, target: Range) -> PathBuf {
    let name = converted_file_name(input, target);
    match input.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}
