use crossterm::style::Color;

// Green palette from light to dark, indexed by bar position
const GREENS: [u8; 8] = [194, 157, 120, 83, 77, 71, 34, 28];

pub fn title_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn label_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn category_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn muted_fg() -> Color {
    Color::AnsiValue(245)
} // Grey

/// Palette colour for bar `index` out of `count` bars
pub fn bar_fg(index: usize, count: usize) -> Color {
    let slot = if count <= 1 {
        GREENS.len() / 2
    } else {
        index.min(count - 1) * (GREENS.len() - 1) / (count - 1)
    };
    Color::AnsiValue(GREENS[slot])
}

/// Extracts the 256-colour code, `fallback` for other colour kinds
pub fn get_ansi_code(color: Color, fallback: u8) -> u8 {
    match color {
        Color::AnsiValue(val) => val,
        _ => fallback,
    }
}

/// Wraps `text` in a foreground colour escape, or returns it untouched in plain mode
pub fn paint(text: &str, color: Color, plain: bool) -> String {
    if plain || text.is_empty() {
        text.to_string()
    } else {
        format!("\x1b[38;5;{}m{}\x1b[0m", get_ansi_code(color, 231), text)
    }
}
