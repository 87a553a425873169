/// Number rendering.
///
/// Turns an evaluated `f64` into the text written to result files: integral
/// values (within a small tolerance) without a decimal point, everything else
/// with 15 significant digits.
pub mod num;
/// Input preparation.
///
/// Removes `#` comment lines from raw file contents before they are handed to
/// the evaluator.
pub mod source;
