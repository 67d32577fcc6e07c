//! Annotated bar charts.
//!
//! `BarChart` draws vertical bars with the value (and optionally its share of
//! the total) printed above each bar. `HorizontalBarChart` draws one bar per
//! line with an apostrophe-grouped value after it. Neither draws gridlines,
//! axis ticks or axis titles.

use super::colors::{bar_fg, category_fg, label_fg, paint, title_fg};
use super::formatting::{format_grouped, value_label_lines};
use super::{Chart, center};
use crate::constants::chart::{BAR_CHAR, DEFAULT_HEIGHT, DEFAULT_WIDTH};

const COLUMN_GAP: usize = 2;
/// Share of a column occupied by its bar
const BAR_WIDTH_RATIO: f64 = 0.7;

fn sort_descending(rows: &mut [(String, f64)]) {
    rows.sort_by(|a, b| b.1.total_cmp(&a.1));
}

// NaN and infinite values cannot be scaled or labelled
fn finite_rows(mut rows: Vec<(String, f64)>) -> Vec<(String, f64)> {
    rows.retain(|(_, value)| value.is_finite());
    rows
}

fn scaled_length(value: f64, max: f64, full: usize) -> usize {
    if value <= 0.0 || max <= 0.0 {
        return 0;
    }
    ((value / max * full as f64).round() as usize).clamp(1, full)
}

/// Vertical bar chart over a two-column `(category, value)` table.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    title: Option<String>,
    rows: Vec<(String, f64)>,
    percent: bool,
    height: usize,
}

impl BarChart {
    /// Creates a chart with percentage annotations enabled, in input order.
    /// Rows with non-finite values are dropped.
    pub fn new(rows: Vec<(String, f64)>) -> Self {
        Self {
            title: None,
            rows: finite_rows(rows),
            percent: true,
            height: DEFAULT_HEIGHT,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sorts bars by value, largest first. Equal values keep their input order.
    pub fn ordered(mut self, order: bool) -> Self {
        if order {
            sort_descending(&mut self.rows);
        }
        self
    }

    /// Toggles the `(12.3%)` share annotation under each value
    pub fn with_percent(mut self, percent: bool) -> Self {
        self.percent = percent;
        self
    }

    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height.max(1);
        self
    }

    pub fn rows(&self) -> &[(String, f64)] {
        &self.rows
    }

    fn total(&self) -> f64 {
        self.rows.iter().map(|(_, value)| value).sum()
    }
}

impl Chart for BarChart {
    fn render(&self, plain: bool) -> String {
        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(paint(title, title_fg(), plain));
        }
        if self.rows.is_empty() {
            return lines.join("\n");
        }

        let total = self.percent.then(|| self.total());
        let labels: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|(_, value)| value_label_lines(*value, total))
            .collect();

        let column_width = self
            .rows
            .iter()
            .zip(&labels)
            .map(|((category, _), label)| {
                label
                    .iter()
                    .map(|line| line.chars().count())
                    .chain(std::iter::once(category.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .max()
            .unwrap_or(0)
            .max(3);
        let bar_width = ((column_width as f64 * BAR_WIDTH_RATIO).ceil() as usize).max(1);
        let bar: String = std::iter::repeat_n(BAR_CHAR, bar_width).collect();

        let max = self.rows.iter().map(|(_, value)| *value).fold(0.0, f64::max);
        let heights: Vec<usize> = self
            .rows
            .iter()
            .map(|(_, value)| scaled_length(*value, max, self.height))
            .collect();
        let label_rows = labels.iter().map(Vec::len).max().unwrap_or(0);
        let canvas_height = self.height + label_rows;
        let count = self.rows.len();

        for y in 0..canvas_height {
            let cells: Vec<String> = (0..count)
                .map(|i| {
                    let top = canvas_height - heights[i];
                    let label_top = top.saturating_sub(labels[i].len());
                    if y >= top {
                        paint(&center(&bar, column_width), bar_fg(i, count), plain)
                    } else if y >= label_top {
                        paint(&center(&labels[i][y - label_top], column_width), label_fg(), plain)
                    } else {
                        " ".repeat(column_width)
                    }
                })
                .collect();
            lines.push(cells.join(&" ".repeat(COLUMN_GAP)).trim_end().to_string());
        }

        let categories: Vec<String> = self
            .rows
            .iter()
            .map(|(category, _)| paint(&center(category, column_width), category_fg(), plain))
            .collect();
        lines.push(categories.join(&" ".repeat(COLUMN_GAP)).trim_end().to_string());

        lines.join("\n")
    }
}

/// Horizontal bar chart with grouped value labels.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizontalBarChart {
    title: Option<String>,
    rows: Vec<(String, f64)>,
    decimals: usize,
    width: usize,
}

impl HorizontalBarChart {
    /// Rows with non-finite values are dropped.
    pub fn new(rows: Vec<(String, f64)>) -> Self {
        Self {
            title: None,
            rows: finite_rows(rows),
            decimals: 0,
            width: DEFAULT_WIDTH,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn ordered(mut self, order: bool) -> Self {
        if order {
            sort_descending(&mut self.rows);
        }
        self
    }

    /// Decimals shown in value labels; 0 rounds to whole numbers
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// Length of the longest bar in characters
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    pub fn rows(&self) -> &[(String, f64)] {
        &self.rows
    }
}

impl Chart for HorizontalBarChart {
    fn render(&self, plain: bool) -> String {
        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(paint(title, title_fg(), plain));
        }

        let name_width = self
            .rows
            .iter()
            .map(|(name, _)| name.chars().count())
            .max()
            .unwrap_or(0);
        let max = self.rows.iter().map(|(_, value)| *value).fold(0.0, f64::max);
        let count = self.rows.len();

        for (i, (name, value)) in self.rows.iter().enumerate() {
            let padding = " ".repeat(name_width - name.chars().count());
            let length = scaled_length(*value, max, self.width);
            let bar: String = std::iter::repeat_n(BAR_CHAR, length).collect();
            let mut line = format!("{}{padding} ", paint(name, category_fg(), plain));
            if length > 0 {
                line.push_str(&paint(&bar, bar_fg(i, count), plain));
                line.push(' ');
            }
            line.push_str(&paint(&format_grouped(*value, self.decimals), label_fg(), plain));
            lines.push(line);
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(values: &[(&str, f64)]) -> Vec<(String, f64)> {
        values.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_ordered_sorts_descending_and_keeps_ties_stable() {
        let chart = BarChart::new(rows(&[("a", 1.0), ("b", 3.0), ("c", 1.0), ("d", 2.0)])).ordered(true);
        let order: Vec<&str> = chart.rows().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(order, vec!["b", "d", "a", "c"]);

        let unordered = BarChart::new(rows(&[("a", 1.0), ("b", 3.0)])).ordered(false);
        assert_eq!(unordered.rows()[0].0, "a");
    }

    #[test]
    fn test_non_finite_values_are_dropped() {
        let values = rows(&[("a", 2.0), ("nan", f64::NAN), ("inf", f64::INFINITY), ("b", 1.0)]);

        let chart = BarChart::new(values.clone());
        let kept: Vec<&str> = chart.rows().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(kept, vec!["a", "b"]);
        let rendered = chart.render(true);
        assert!(!rendered.contains("NaN") && !rendered.contains("inf"));

        let horizontal = HorizontalBarChart::new(values);
        assert_eq!(horizontal.rows().len(), 2);
        assert!(!horizontal.render(true).contains("NaN"));
    }

    #[test]
    fn test_bar_chart_plain_render() {
        let chart = BarChart::new(rows(&[("shot", 3.0), ("penalty", 1.0)]))
            .with_height(4)
            .with_title("Goals by type");
        let rendered = chart.render(true);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Goals by type");
        // Title, 2 label rows, 4 bar rows, category row
        assert_eq!(lines.len(), 1 + 2 + 4 + 1);
        assert!(lines[1].contains('3'));
        assert!(lines[2].contains("(75.0%)"));
        assert_eq!(lines.last().map(|l| l.trim()), Some("shot    penalty"));
        assert!(!rendered.contains("\x1b["));
        // The tallest bar reaches the top bar row, the small one only the bottom
        assert!(lines[3].contains(BAR_CHAR));
        assert_eq!(lines[6].matches(BAR_CHAR).count(), 2 * lines[3].matches(BAR_CHAR).count());
    }

    #[test]
    fn test_bar_chart_without_percent_has_single_label_row() {
        let chart = BarChart::new(rows(&[("x", 2_500_000.0)]))
            .with_percent(false)
            .with_height(2);
        let rendered = chart.render(true);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 1 + 2 + 1);
        assert_eq!(lines[0].trim(), "2.5M");
        assert!(!rendered.contains('%'));
    }

    #[test]
    fn test_zero_values_have_no_bar() {
        let chart = BarChart::new(rows(&[("a", 0.0), ("b", 0.0)])).with_height(3);
        let rendered = chart.render(true);
        assert!(!rendered.contains(BAR_CHAR));
        assert!(rendered.contains("(0.0%)"));
    }

    #[test]
    fn test_empty_chart_renders_title_only() {
        assert_eq!(BarChart::new(Vec::new()).render(true), "");
        assert_eq!(
            BarChart::new(Vec::new()).with_title("Nothing").render(true),
            "Nothing"
        );
        assert_eq!(HorizontalBarChart::new(Vec::new()).render(true), "");
    }

    #[test]
    fn test_horizontal_bar_chart_plain_render() {
        let chart = HorizontalBarChart::new(rows(&[("Messi", 1234.0), ("Suárez", 617.0)]))
            .with_width(10);
        let rendered = chart.render(true);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], format!("Messi  {} 1'234", "█".repeat(10)));
        assert_eq!(lines[1], format!("Suárez {} 617", "█".repeat(5)));
    }

    #[test]
    fn test_horizontal_decimals() {
        let chart = HorizontalBarChart::new(rows(&[("a", 1234.56)]))
            .with_decimals(1)
            .with_width(4);
        assert!(chart.render(true).ends_with("1'234.6"));
    }

    #[test]
    fn test_colored_render_uses_ansi_codes() {
        let chart = HorizontalBarChart::new(rows(&[("a", 1.0)]));
        assert!(chart.render(false).contains("\x1b[38;5;"));
    }
}
