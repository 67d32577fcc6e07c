//! Unit-bin histogram for integer observations such as goal minutes.

use super::colors::{bar_fg, category_fg, label_fg, paint, title_fg};
use super::Chart;
use crate::constants::chart::{BAR_CHAR, DEFAULT_HEIGHT};

/// Spacing of the integer labels on the x axis
const AXIS_LABEL_STEP: u32 = 10;

/// Histogram with one bin per integer `1..=max`.
///
/// Bin `n` covers `[n - 0.5, n + 0.5)`, so the edges run from `0.5` to
/// `max + 0.5`. Values of zero fall outside the first edge and are not counted.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    title: Option<String>,
    counts: Vec<u64>,
    height: usize,
}

impl Histogram {
    pub fn from_values(values: &[u32]) -> Self {
        let max = values.iter().copied().max().unwrap_or(0) as usize;
        let mut counts = vec![0u64; max];
        for &value in values {
            if value > 0 {
                counts[value as usize - 1] += 1;
            }
        }
        Self {
            title: None,
            counts,
            height: DEFAULT_HEIGHT,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height.max(1);
        self
    }

    /// `(bin centre, count)` pairs for every bin, empty ones included
    pub fn bins(&self) -> Vec<(u32, u64)> {
        self.counts
            .iter()
            .enumerate()
            .map(|(index, count)| (index as u32 + 1, *count))
            .collect()
    }

    /// Bin edges, `0.5` through `max + 0.5`
    pub fn edges(&self) -> Vec<f64> {
        (0..=self.counts.len()).map(|i| i as f64 + 0.5).collect()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

impl Chart for Histogram {
    fn render(&self, plain: bool) -> String {
        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(paint(title, title_fg(), plain));
        }
        let peak = self.counts.iter().copied().max().unwrap_or(0);
        if peak == 0 {
            return lines.join("\n");
        }

        let peak_label = peak.to_string();
        let gutter = peak_label.len();
        let bins = self.counts.len();

        for level in (1..=self.height).rev() {
            let row: String = self
                .counts
                .iter()
                .enumerate()
                .map(|(i, count)| {
                    let filled = (*count as f64 / peak as f64 * self.height as f64).round() as usize;
                    let filled = if *count > 0 { filled.max(1) } else { 0 };
                    if filled >= level {
                        paint(&BAR_CHAR.to_string(), bar_fg(i, bins), plain)
                    } else {
                        " ".to_string()
                    }
                })
                .collect();
            let axis = if level == self.height {
                paint(&peak_label, label_fg(), plain)
            } else {
                " ".repeat(gutter)
            };
            lines.push(format!("{axis} {row}").trim_end().to_string());
        }

        // Bin centres: the first bin and every multiple of the label step
        let mut axis: Vec<char> = vec![' '; gutter + 1 + bins];
        let mut next_free = 0;
        for center_value in std::iter::once(1)
            .chain((AXIS_LABEL_STEP..=bins as u32).step_by(AXIS_LABEL_STEP as usize))
        {
            let start = gutter + center_value as usize;
            if start < next_free {
                continue;
            }
            let text = center_value.to_string();
            for (offset, ch) in text.chars().enumerate() {
                match axis.get_mut(start + offset) {
                    Some(slot) => *slot = ch,
                    None => axis.push(ch),
                }
            }
            next_free = start + text.len() + 1;
        }
        let axis: String = axis.into_iter().collect();
        lines.push(paint(axis.trim_end(), category_fg(), plain));

        lines.join("\n")
    }
}
