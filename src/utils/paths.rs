use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_SUFFIX: &str = "_Testomatio";

/// Builds the converted file's path: same extension, stem suffixed, placed next
/// to the input unless `directory` is given.
pub fn derive_output_path(input: &Path, suffix: &str, directory: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file_name = match input.extension() {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, suffix),
    };

    let parent = directory
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();

    parent.join(file_name)
}

/// Resolves `.`/`..` and symlinks in the directory part so two spellings of
/// the same file compare equal. The file itself need not exist; a directory
/// that cannot be resolved is kept as written.
pub fn normalize_path(path: &Path) -> PathBuf {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let parent = parent
        .canonicalize()
        .unwrap_or_else(|_| parent.to_path_buf());

    match path.file_name() {
        Some(name) => parent.join(name),
        None => parent,
    }
}

pub fn same_file_path(a: &Path, b: &Path) -> bool {
    normalize_path(a) == normalize_path(b)
}
