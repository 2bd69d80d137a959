//! Custom colour palette

/// Number of custom palette slots
pub const PALETTE_SIZE: usize = 10;

/// Colour used to fill empty palette slots
pub const PAD_COLOR: &str = "#cccccc";

/// Built-in palette
pub const DEFAULT_COLORS: [&str; PALETTE_SIZE] = [
    "#e74c3c", "#e67e22", "#f1c40f", "#2ecc71", "#1abc9c", "#3498db", "#9b59b6", "#34495e",
    "#95a5a6", "#f39c12",
];

pub fn default_palette() -> Vec<String> {
    DEFAULT_COLORS.iter().map(|c| c.to_string()).collect()
}

/// Truncate to [`PALETTE_SIZE`] colours and pad with [`PAD_COLOR`]
pub fn normalize_palette<I, S>(colors: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut palette: Vec<String> = colors
        .into_iter()
        .take(PALETTE_SIZE)
        .map(Into::into)
        .collect();
    palette.resize(PALETTE_SIZE, PAD_COLOR.to_string());
    palette
}
