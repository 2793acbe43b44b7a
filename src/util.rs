/// Result formatting for display.
///
/// Turns evaluation results into the strings shown to the user, dropping the
/// fractional part of integer-valued results.
pub mod format;
