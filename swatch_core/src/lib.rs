pub mod color;
pub mod contrast;
pub mod fallback;
pub mod swatch;
pub mod theme;

pub use color::Color;
pub use contrast::{Brightness, alpha_blend, estimate_brightness, resolve_text_color};
pub use fallback::{Origin, Resolved};
pub use swatch::{Swatch, SwatchCard, SwatchGroup, cards, catalog, groups};
pub use theme::{ColorScheme, ComponentThemes, ThemeConfig};

pub fn version() -> &'static str {
    "0.1.0"
}
