use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::{
    error::IoError,
    interpreter::parser::core::{EvalResult, Limits, evaluate_with},
    render,
    util::source::strip_comments,
};

/// Extension of the files picked up in directory mode.
pub const INPUT_EXTENSION: &str = "txt";

/// Builds the result file path for `input`: `<out_dir>/<stem>_<suffix>.txt`.
///
/// # Example
/// ```
/// use std::path::Path;
///
/// use pyarith::pipeline::output_path;
///
/// let out = output_path(Path::new("labs/task1.txt"), Path::new("out"), "result");
/// assert_eq!(out, Path::new("out/task1_result.txt"));
/// ```
#[must_use]
pub fn output_path(input: &Path, out_dir: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem()
                    .map_or_else(|| "input".into(), |s| s.to_string_lossy());
    out_dir.join(format!("{stem}_{suffix}.{INPUT_EXTENSION}"))
}

/// Reads `input`, strips comment lines, and evaluates what is left.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD, which the lexer
/// reports as an invalid character at its position.
///
/// # Errors
/// Returns [`IoError::ReadInput`] if the file cannot be read. Evaluation
/// failures are not I/O errors and come back inside the `Ok` value.
pub fn evaluate_file(input: &Path, limits: Limits) -> Result<EvalResult<f64>, IoError> {
    let bytes = fs::read(input).map_err(|source| IoError::ReadInput { path: input.to_path_buf(),
                                                                     source })?;
    let raw = String::from_utf8_lossy(&bytes);
    let stripped = strip_comments(&raw);
    let outcome = evaluate_with(&stripped, limits);
    debug!(file = %input.display(), ?outcome, "evaluated file");
    Ok(outcome)
}

/// A file that went through the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Processed {
    /// Where the result line was written.
    pub output:  PathBuf,
    /// The evaluation outcome.
    pub outcome: EvalResult<f64>,
}

/// Evaluates `input` and writes its rendered outcome, followed by a newline,
/// to the matching file in `out_dir`.
///
/// # Errors
/// Returns an [`IoError`] if the input cannot be read or the result cannot be
/// written. The directory must already exist.
pub fn process_file(input: &Path,
                    out_dir: &Path,
                    suffix: &str,
                    limits: Limits)
                    -> Result<Processed, IoError> {
    let outcome = evaluate_file(input, limits)?;
    let output = output_path(input, out_dir, suffix);
    let line = format!("{}\n", render(&outcome));
    fs::write(&output, line).map_err(|source| IoError::WriteOutput { path: output.clone(),
                                                                     source })?;
    info!(input = %input.display(), output = %output.display(), "wrote result");
    Ok(Processed { output, outcome })
}

/// Lists the `.txt` files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into.
///
/// # Errors
/// Returns [`IoError::ReadDir`] if the directory or one of its entries cannot
/// be read.
pub fn collect_inputs(dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    let mut inputs = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1)
                                  .max_depth(1)
                                  .sort_by_file_name()
    {
        let entry = entry.map_err(|source| IoError::ReadDir { path: dir.to_path_buf(),
                                                              source })?;
        let path = entry.path();
        if entry.file_type().is_file()
           && path.extension().is_some_and(|ext| ext == INPUT_EXTENSION)
        {
            inputs.push(path.to_path_buf());
        }
    }
    Ok(inputs)
}

/// Picks the files to evaluate.
///
/// A directory takes precedence over a single input file.
///
/// # Errors
/// Returns [`IoError::NoInput`] if neither is given, or the error of
/// [`collect_inputs`] for an unreadable directory.
pub fn select_inputs(dir: Option<&Path>, input: Option<&Path>) -> Result<Vec<PathBuf>, IoError> {
    match (dir, input) {
        (Some(dir), _) => collect_inputs(dir),
        (None, Some(input)) => Ok(vec![input.to_path_buf()]),
        (None, None) => Err(IoError::NoInput),
    }
}

/// Output directory used when none is given: `<stem>_<suffix>` for a single
/// input, `results_<suffix>` in directory mode.
///
/// # Example
/// ```
/// use std::path::Path;
///
/// use pyarith::pipeline::default_output_dir;
///
/// assert_eq!(default_output_dir(Some(Path::new("in/task.txt")), false, "result"),
///            Path::new("task_result"));
/// assert_eq!(default_output_dir(None, true, "result"), Path::new("results_result"));
/// ```
#[must_use]
pub fn default_output_dir(input: Option<&Path>, dir_mode: bool, suffix: &str) -> PathBuf {
    let stem = input.filter(|_| !dir_mode)
                    .and_then(Path::file_stem)
                    .map_or_else(|| "results".into(), |s| s.to_string_lossy());
    PathBuf::from(format!("{stem}_{suffix}"))
}

/// The line printed to stdout for a processed file in `--print` mode.
#[must_use]
pub fn summary_line(input: &Path, outcome: &EvalResult<f64>) -> String {
    format!("{}: {}", input.display(), render(outcome))
}

/// Creates `dir` and any missing parents.
///
/// # Errors
/// Returns [`IoError::CreateDir`] if the directory cannot be created.
pub fn ensure_dir(dir: &Path) -> Result<(), IoError> {
    fs::create_dir_all(dir).map_err(|source| IoError::CreateDir { path: dir.to_path_buf(),
                                                                  source })
}
