//! Side-by-side layout: logo column left, info column right
//!
//! Padding is computed from visible width so embedded color codes of any
//! length cannot bend the right column's edge.

use crate::canvas::ansi::visible_width;

/// Columns of padding between the logo and the info panel
const GUTTER: &str = "  ";

/// Merge logo lines and info lines into printable rows.
///
/// Produces `max(logo.len(), info.len())` rows. Every row pads its left side
/// to the widest logo line, so the info column starts at the same terminal
/// column on every row, including rows past the end of the logo.
pub fn compose(logo: &[String], info: &[String]) -> Vec<String> {
    let logo_width = logo.iter().map(|line| visible_width(line)).max().unwrap_or(0);

    let total = logo.len().max(info.len());
    let mut rows = Vec::with_capacity(total);
    for i in 0..total {
        let left = logo.get(i).map_or("", String::as_str);
        let right = info.get(i).map_or("", String::as_str);
        if left.is_empty() {
            rows.push(format!("{}{}{}", " ".repeat(logo_width), GUTTER, right));
        } else {
            let pad = logo_width.saturating_sub(visible_width(left));
            rows.push(format!("{}{}{}{}", left, " ".repeat(pad), GUTTER, right));
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::ansi::{sgr, strip_ansi_codes};

    #[test]
    fn test_row_count_is_max_of_both_columns() {
        let logo = vec!["##".to_string(); 3];
        let info = vec!["a".to_string(); 5];
        assert_eq!(compose(&logo, &info).len(), 5);
        assert_eq!(compose(&info, &logo).len(), 5);
    }

    #[test]
    fn test_info_column_edge_is_straight() {
        let logo = vec![
            format!("{}####{}", sgr::RED, sgr::RESET),
            "##".to_string(),
            format!("{}{}###{}", sgr::BOLD, sgr::GREEN, sgr::RESET),
        ];
        let info = vec!["one".to_string(), "two".to_string(), "three".to_string(), "four".to_string()];
        let rows = compose(&logo, &info);
        assert_eq!(rows.len(), 4);
        // The widest logo line is 4 columns; info starts at 4 + gutter on every row
        for (row, expected) in rows.iter().zip(&info) {
            let stripped = strip_ansi_codes(row);
            assert_eq!(&stripped[stripped.len() - expected.len()..], expected.as_str());
            assert_eq!(stripped.len() - expected.len(), 4 + 2);
        }
    }

    #[test]
    fn test_empty_logo_still_indents_info() {
        let rows = compose(&[], &["x".to_string()]);
        assert_eq!(rows, vec!["  x".to_string()]);
    }

    #[test]
    fn test_rows_past_logo_are_space_padded() {
        let logo = vec!["###".to_string()];
        let info = vec!["a".to_string(), "b".to_string()];
        let rows = compose(&logo, &info);
        assert_eq!(rows[0], "###  a");
        assert_eq!(rows[1], "     b");
    }

    #[test]
    fn test_single_fallback_line_anchors_padding() {
        // An image-less run: one styled fallback banner line, many info lines
        let logo = vec![format!("{}{}AB{}", sgr::BOLD, sgr::RED, sgr::RESET)];
        let info: Vec<String> = (0..4).map(|i| format!("line{i}")).collect();
        let rows = compose(&logo, &info);
        assert_eq!(rows.len(), 4);
        for row in &rows[1..] {
            assert!(strip_ansi_codes(row).starts_with("  ")); // 2-wide anchor + gutter
        }
    }
}
