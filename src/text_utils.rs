//! Text measurement utilities
//!
//! Shared helpers for fitting label text into a pixel width.

/// Ellipsis appended to elided text
pub const ELLIPSIS: &str = "…";

/// Cuts text from the right so that it fits within `available_width`,
/// appending an ellipsis if anything was removed.
///
/// # Arguments
/// * `text` - The text to potentially elide
/// * `available_width` - Maximum width available for the text
/// * `measure` - Returns the rendered width of a string
///
/// # Returns
/// * The text itself if it fits, the longest fitting prefix plus ellipsis,
///   or an empty string if not even the ellipsis fits
pub fn elide_right<F>(text: &str, available_width: f32, measure: F) -> String
where
    F: Fn(&str) -> f32,
{
    if available_width <= 0.0 {
        return String::new();
    }

    if measure(text) <= available_width {
        return text.to_string();
    }

    let ellipsis_width = measure(ELLIPSIS);
    if ellipsis_width > available_width {
        return String::new();
    }

    let available_for_text = available_width - ellipsis_width;

    // Binary search for the right truncation point
    let mut low = 0;
    let mut high = text.chars().count();
    let mut best_fit = 0;

    while low <= high {
        let mid = (low + high) / 2;
        let truncated: String = text.chars().take(mid).collect();

        if measure(&truncated) <= available_for_text {
            best_fit = mid;
            low = mid + 1;
        } else if mid == 0 {
            break;
        } else {
            high = mid - 1;
        }
    }

    let mut result: String = text.chars().take(best_fit).collect();
    result.push_str(ELLIPSIS);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monospace(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    #[test]
    fn test_text_that_fits_is_unchanged() {
        assert_eq!(elide_right("IFRN", 40.0, monospace), "IFRN");
    }

    #[test]
    fn test_long_text_is_elided() {
        // 60 px: 5 chars + ellipsis
        assert_eq!(elide_right("IFRN / 110.30", 60.0, monospace), "IFRN …");
    }

    #[test]
    fn test_no_room_for_ellipsis() {
        assert_eq!(elide_right("IFRN", 5.0, monospace), "");
        assert_eq!(elide_right("IFRN", 0.0, monospace), "");
    }

    #[test]
    fn test_only_ellipsis_fits() {
        assert_eq!(elide_right("IFRN", 15.0, monospace), "…");
    }
}
