//! Common utility functions for prompt parsing

/// Parse "Yes"/"No" answers to bool
///
/// Accepts: "Yes", "Y", "yes", "y", "Sí", "si", "TRUE", "true", "1" -> true
/// Everything else -> false
pub fn parse_yes_no(s: &str) -> bool {
    let lower = s.trim().to_lowercase();
    matches!(lower.as_str(), "yes" | "y" | "sí" | "si" | "s" | "true" | "1")
}
