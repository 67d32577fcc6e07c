//! Terminal charts with fixed styling: no gridlines, no axis ticks on bar
//! charts, every bar annotated with its value, and large values abbreviated
//! to millions.

pub mod bar_chart;
pub mod colors;
pub mod formatting;
pub mod histogram;

pub use bar_chart::{BarChart, HorizontalBarChart};
pub use histogram::Histogram;

/// A chart that renders to terminal text
pub trait Chart {
    /// Renders the chart. `plain` disables ANSI colours.
    fn render(&self, plain: bool) -> String;
}

/// Centres `text` in a field of `width` characters. Extra space goes to the right.
pub(crate) fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("ab", 5), " ab  ");
        assert_eq!(center("abcdef", 3), "abcdef");
        assert_eq!(center("ä", 3), " ä ");
    }
}
