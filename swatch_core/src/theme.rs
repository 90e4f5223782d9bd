use crate::fallback::first_present;
use crate::{Brightness, Color};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const fn hex(rgb: u32) -> Color {
    Color::from_rgb_u32(rgb)
}

/// Base role palette every component color falls back to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    pub brightness: Brightness,
    pub primary: Color,
    pub on_primary: Color,
    pub primary_container: Color,
    pub on_primary_container: Color,
    pub secondary: Color,
    pub on_secondary: Color,
    pub secondary_container: Color,
    pub on_secondary_container: Color,
    pub tertiary: Color,
    pub on_tertiary: Color,
    pub error: Color,
    pub on_error: Color,
    pub surface: Color,
    pub on_surface: Color,
    pub surface_variant: Color,
    pub on_surface_variant: Color,
    pub outline: Color,
    pub inverse_surface: Color,
    pub on_inverse_surface: Color,
    pub inverse_primary: Color,
}

impl ColorScheme {
    /// Baseline light scheme.
    pub fn light() -> Self {
        Self {
            brightness: Brightness::Light,
            primary: hex(0x6750A4),
            on_primary: hex(0xFFFFFF),
            primary_container: hex(0xEADDFF),
            on_primary_container: hex(0x21005D),
            secondary: hex(0x625B71),
            on_secondary: hex(0xFFFFFF),
            secondary_container: hex(0xE8DEF8),
            on_secondary_container: hex(0x1D192B),
            tertiary: hex(0x7D5260),
            on_tertiary: hex(0xFFFFFF),
            error: hex(0xB3261E),
            on_error: hex(0xFFFFFF),
            surface: hex(0xFEF7FF),
            on_surface: hex(0x1D1B20),
            surface_variant: hex(0xE7E0EC),
            on_surface_variant: hex(0x49454F),
            outline: hex(0x79747E),
            inverse_surface: hex(0x322F35),
            on_inverse_surface: hex(0xF5EFF7),
            inverse_primary: hex(0xD0BCFF),
        }
    }

    /// Baseline dark scheme.
    pub fn dark() -> Self {
        Self {
            brightness: Brightness::Dark,
            primary: hex(0xD0BCFF),
            on_primary: hex(0x381E72),
            primary_container: hex(0x4F378B),
            on_primary_container: hex(0xEADDFF),
            secondary: hex(0xCCC2DC),
            on_secondary: hex(0x332D41),
            secondary_container: hex(0x4A4458),
            on_secondary_container: hex(0xE8DEF8),
            tertiary: hex(0xEFB8C8),
            on_tertiary: hex(0x492532),
            error: hex(0xF2B8B5),
            on_error: hex(0x601410),
            surface: hex(0x141218),
            on_surface: hex(0xE6E0E9),
            surface_variant: hex(0x49454F),
            on_surface_variant: hex(0xCAC4D0),
            outline: hex(0x938F99),
            inverse_surface: hex(0xE6E0E9),
            on_inverse_surface: hex(0x322F35),
            inverse_primary: hex(0x6750A4),
        }
    }

    pub fn baseline(brightness: Brightness) -> Self {
        match brightness {
            Brightness::Light => Self::light(),
            Brightness::Dark => Self::dark(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.brightness == Brightness::Dark
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::light()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonColors {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub outline: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToggleButtonsColors {
    pub selected: Option<Color>,
    pub fill: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwitchColors {
    pub thumb_selected: Option<Color>,
    pub track_selected: Option<Color>,
}

/// Checkbox and radio share one shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectionColors {
    pub fill_selected: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChipColors {
    pub background: Option<Color>,
    pub selected: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputColors {
    pub fill: Option<Color>,
    pub border: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BarColors {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TabBarColors {
    pub indicator: Option<Color>,
    pub label: Option<Color>,
}

/// Navigation bars and rails: a surface plus the selected-item marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigationColors {
    pub background: Option<Color>,
    pub indicator: Option<Color>,
    pub selected_item: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SurfaceColors {
    pub background: Option<Color>,
}

/// Per-component overrides. Anything unset falls back to the scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComponentThemes {
    pub elevated_button: ButtonColors,
    pub filled_button: ButtonColors,
    pub outlined_button: ButtonColors,
    pub text_button: ButtonColors,
    pub toggle_buttons: ToggleButtonsColors,
    pub floating_action_button: ButtonColors,
    pub switch: SwitchColors,
    pub checkbox: SelectionColors,
    pub radio: SelectionColors,
    pub chip: ChipColors,
    pub input_decorator: InputColors,
    pub app_bar: BarColors,
    pub tab_bar: TabBarColors,
    pub bottom_navigation_bar: NavigationColors,
    pub navigation_bar: NavigationColors,
    pub navigation_rail: NavigationColors,
    pub card: SurfaceColors,
    pub dialog: SurfaceColors,
    pub popup_menu: SurfaceColors,
    pub bottom_sheet: SurfaceColors,
    pub snack_bar: SurfaceColors,
    pub tooltip: SurfaceColors,
}

/// The theme document we inspect. Loaded from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub name: String,

    #[serde(default = "default_material3")]
    pub use_material3: bool,

    #[serde(default)]
    pub scheme: ColorScheme,

    /// Scaffold / canvas background.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas: Option<Color>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_color: Option<Color>,

    #[serde(default)]
    pub components: ComponentThemes,
}

fn default_material3() -> bool {
    true
}

impl ThemeConfig {
    pub fn new(name: impl Into<String>, brightness: Brightness) -> Self {
        Self {
            name: name.into(),
            use_material3: true,
            scheme: ColorScheme::baseline(brightness),
            canvas: None,
            card_color: None,
            components: ComponentThemes::default(),
        }
    }

    pub fn brightness(&self) -> Brightness {
        self.scheme.brightness
    }

    pub fn canvas_color(&self) -> Color {
        first_present([self.canvas], self.scheme.surface)
    }

    /// The surface swatch cards are painted on.
    pub fn card_background(&self) -> Color {
        first_present(
            [self.components.card.background, self.card_color],
            self.scheme.surface,
        )
    }

    pub fn from_json_str(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str::<ThemeConfig>(text).context("parse theme json")
    }

    /// Save the theme to JSON.
    pub fn save_json_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("serialize theme to json")?;
        fs::write(path.as_ref(), json).context("write theme json file")?;
        tracing::debug!(path = %path.as_ref().display(), name = %self.name, "saved theme");
        Ok(())
    }

    /// Load the theme from JSON.
    pub fn load_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path.as_ref()).context("read theme json file")?;
        let theme = Self::from_json_str(&text)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            name = %theme.name,
            material3 = theme.use_material3,
            "loaded theme"
        );
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_takes_defaults() -> anyhow::Result<()> {
        let theme = ThemeConfig::from_json_str(
            r##"{
                "name": "Sparse",
                "components": { "switch": { "thumbSelected": "#FF0000" } }
            }"##,
        )?;

        assert!(theme.use_material3);
        assert_eq!(theme.scheme, ColorScheme::light());
        assert_eq!(
            theme.components.switch.thumb_selected,
            Some(Color::rgb(255, 0, 0))
        );
        assert_eq!(theme.components.switch.track_selected, None);
        assert_eq!(theme.components.app_bar, BarColors::default());
        Ok(())
    }

    #[test]
    fn bad_color_is_an_error() {
        let err = ThemeConfig::from_json_str(r#"{ "name": "x", "canvas": "nope" }"#)
            .expect_err("bad hex should fail");
        assert!(format!("{err:#}").contains("parse theme json"));
    }

    #[test]
    fn card_background_chain() {
        let mut theme = ThemeConfig::new("t", Brightness::Dark);
        assert_eq!(theme.card_background(), ColorScheme::dark().surface);

        theme.card_color = Some(Color::rgb(1, 2, 3));
        assert_eq!(theme.card_background(), Color::rgb(1, 2, 3));

        theme.components.card.background = Some(Color::rgb(9, 9, 9));
        assert_eq!(theme.card_background(), Color::rgb(9, 9, 9));
    }

    #[test]
    fn canvas_defaults_to_surface() {
        let mut theme = ThemeConfig::new("t", Brightness::Light);
        assert_eq!(theme.canvas_color(), theme.scheme.surface);
        theme.canvas = Some(Color::WHITE);
        assert_eq!(theme.canvas_color(), Color::WHITE);
    }

    #[test]
    fn save_then_load_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("theme.json");

        let mut theme = ThemeConfig::new("Dark M2", Brightness::Dark);
        theme.use_material3 = false;
        theme.components.snack_bar.background = Some(Color::rgba(0, 0, 0, 0xCC));
        theme.save_json_file(&path)?;

        let loaded = ThemeConfig::load_json_file(&path)?;
        assert_eq!(loaded, theme);
        Ok(())
    }

    #[test]
    fn missing_file_has_context() {
        let err = ThemeConfig::load_json_file("/definitely/not/here.json")
            .expect_err("missing file");
        assert!(format!("{err:#}").contains("read theme json file"));
    }
}
