use crate::contrast::{alpha_blend, resolve_text_color};
use crate::fallback::{Origin, Resolved, resolve_chain};
use crate::{Color, ThemeConfig};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SwatchGroup {
    Buttons,
    Toggles,
    Inputs,
    Navigation,
    Surfaces,
}

impl SwatchGroup {
    pub const ALL: [SwatchGroup; 5] = [
        SwatchGroup::Buttons,
        SwatchGroup::Toggles,
        SwatchGroup::Inputs,
        SwatchGroup::Navigation,
        SwatchGroup::Surfaces,
    ];
}

impl fmt::Display for SwatchGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SwatchGroup::Buttons => "Buttons",
            SwatchGroup::Toggles => "Toggles",
            SwatchGroup::Inputs => "Inputs",
            SwatchGroup::Navigation => "Navigation",
            SwatchGroup::Surfaces => "Surfaces",
        };
        f.write_str(s)
    }
}

/// One labeled, resolved role color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub group: SwatchGroup,
    pub label: &'static str,
    pub color: Color,
    pub origin: Origin,
}

/// A swatch as it is drawn: composited on the card background, with the
/// label color picked for that result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwatchCard {
    pub swatch: Swatch,
    pub shown: Color,
    pub text_color: Color,
}

impl SwatchCard {
    pub fn new(swatch: Swatch, background: Color) -> Self {
        Self {
            swatch,
            shown: alpha_blend(swatch.color, background),
            text_color: resolve_text_color(swatch.color, background),
        }
    }
}

struct Catalog {
    out: Vec<Swatch>,
}

impl Catalog {
    fn push(
        &mut self,
        group: SwatchGroup,
        label: &'static str,
        steps: &[(&'static str, Option<Color>)],
        default: (&'static str, Color),
    ) -> Color {
        let Resolved { color, origin } = resolve_chain(steps, default);
        tracing::trace!(%group, label, %color, %origin, "resolved role");
        self.out.push(Swatch {
            group,
            label,
            color,
            origin,
        });
        color
    }
}

/// Every component role of `theme`, in display order.
pub fn catalog(theme: &ThemeConfig) -> Vec<Swatch> {
    use SwatchGroup::*;

    let s = &theme.scheme;
    let c = &theme.components;
    let m3 = theme.use_material3;
    let dark = s.is_dark();

    // M2 tints are onSurface / secondary at fixed opacities.
    let m2_tint = |base: Color, alpha: u8, name: &'static str| (name, base.with_alpha(alpha));
    let pick = |m3_role: (&'static str, Color), m2_role: (&'static str, Color)| {
        if m3 { m3_role } else { m2_role }
    };

    let mut cat = Catalog { out: Vec::new() };

    // Buttons
    cat.push(
        Buttons,
        "ElevatedButton background",
        &[("elevatedButton.background", c.elevated_button.background)],
        pick(("surface", s.surface), ("primary", s.primary)),
    );
    cat.push(
        Buttons,
        "ElevatedButton foreground",
        &[("elevatedButton.foreground", c.elevated_button.foreground)],
        pick(("primary", s.primary), ("onPrimary", s.on_primary)),
    );
    cat.push(
        Buttons,
        "FilledButton",
        &[("filledButton.background", c.filled_button.background)],
        ("primary", s.primary),
    );
    cat.push(
        Buttons,
        "OutlinedButton text",
        &[("outlinedButton.foreground", c.outlined_button.foreground)],
        ("primary", s.primary),
    );
    cat.push(
        Buttons,
        "OutlinedButton outline",
        &[("outlinedButton.outline", c.outlined_button.outline)],
        pick(
            ("outline", s.outline),
            m2_tint(s.on_surface, 0x1F, "onSurface 12%"),
        ),
    );
    cat.push(
        Buttons,
        "TextButton",
        &[("textButton.foreground", c.text_button.foreground)],
        ("primary", s.primary),
    );
    cat.push(
        Buttons,
        "ToggleButtons selected",
        &[("toggleButtons.selected", c.toggle_buttons.selected)],
        ("primary", s.primary),
    );
    cat.push(
        Buttons,
        "ToggleButtons fill",
        &[("toggleButtons.fill", c.toggle_buttons.fill)],
        m2_tint(s.primary, 0x1F, "primary 12%"),
    );
    cat.push(
        Buttons,
        "FloatingActionButton",
        &[(
            "floatingActionButton.background",
            c.floating_action_button.background,
        )],
        pick(
            ("primaryContainer", s.primary_container),
            ("secondary", s.secondary),
        ),
    );

    // Toggles
    cat.push(
        Toggles,
        "Switch thumb",
        &[("switch.thumbSelected", c.switch.thumb_selected)],
        pick(("onPrimary", s.on_primary), ("secondary", s.secondary)),
    );
    cat.push(
        Toggles,
        "Switch track",
        &[("switch.trackSelected", c.switch.track_selected)],
        pick(
            ("primary", s.primary),
            m2_tint(s.secondary, 0x80, "secondary 50%"),
        ),
    );
    cat.push(
        Toggles,
        "Checkbox",
        &[("checkbox.fillSelected", c.checkbox.fill_selected)],
        pick(("primary", s.primary), ("secondary", s.secondary)),
    );
    cat.push(
        Toggles,
        "Radio",
        &[
            ("radio.fillSelected", c.radio.fill_selected),
            ("checkbox.fillSelected", c.checkbox.fill_selected),
        ],
        pick(("primary", s.primary), ("secondary", s.secondary)),
    );

    // Inputs
    cat.push(
        Inputs,
        "Chip background",
        &[("chip.background", c.chip.background)],
        pick(
            ("surface", s.surface),
            m2_tint(s.on_surface, 0x1F, "onSurface 12%"),
        ),
    );
    cat.push(
        Inputs,
        "Chip selected",
        &[("chip.selected", c.chip.selected)],
        pick(
            ("secondaryContainer", s.secondary_container),
            m2_tint(s.on_surface, 0x3D, "onSurface 24%"),
        ),
    );
    cat.push(
        Inputs,
        "Input fill",
        &[("inputDecorator.fill", c.input_decorator.fill)],
        pick(
            ("surfaceVariant", s.surface_variant),
            m2_tint(s.on_surface, 0x0A, "onSurface 4%"),
        ),
    );
    cat.push(
        Inputs,
        "Input border",
        &[("inputDecorator.border", c.input_decorator.border)],
        pick(
            ("outline", s.outline),
            m2_tint(s.on_surface, 0x61, "onSurface 38%"),
        ),
    );

    // Navigation
    let m2_bar = if dark {
        ("surface", s.surface)
    } else {
        ("primary", s.primary)
    };
    let m2_on_bar = if dark {
        ("onSurface", s.on_surface)
    } else {
        ("onPrimary", s.on_primary)
    };
    cat.push(
        Navigation,
        "AppBar background",
        &[("appBar.background", c.app_bar.background)],
        pick(("surface", s.surface), m2_bar),
    );
    let app_bar_fg = cat.push(
        Navigation,
        "AppBar foreground",
        &[("appBar.foreground", c.app_bar.foreground)],
        pick(("onSurface", s.on_surface), m2_on_bar),
    );
    cat.push(
        Navigation,
        "TabBar indicator",
        &[("tabBar.indicator", c.tab_bar.indicator)],
        pick(("primary", s.primary), ("appBar foreground", app_bar_fg)),
    );
    cat.push(
        Navigation,
        "TabBar item",
        &[("tabBar.label", c.tab_bar.label)],
        pick(("primary", s.primary), ("appBar foreground", app_bar_fg)),
    );
    cat.push(
        Navigation,
        "BottomNavigationBar background",
        &[
            (
                "bottomNavigationBar.background",
                c.bottom_navigation_bar.background,
            ),
            ("canvas", theme.canvas),
        ],
        ("surface", s.surface),
    );
    cat.push(
        Navigation,
        "BottomNavigationBar selected",
        &[(
            "bottomNavigationBar.selectedItem",
            c.bottom_navigation_bar.selected_item,
        )],
        if !m3 && dark {
            ("secondary", s.secondary)
        } else {
            ("primary", s.primary)
        },
    );
    cat.push(
        Navigation,
        "NavigationBar background",
        &[("navigationBar.background", c.navigation_bar.background)],
        ("surface", s.surface),
    );
    cat.push(
        Navigation,
        "NavigationBar indicator",
        &[("navigationBar.indicator", c.navigation_bar.indicator)],
        pick(
            ("secondaryContainer", s.secondary_container),
            m2_tint(s.secondary, 0x3D, "secondary 24%"),
        ),
    );
    cat.push(
        Navigation,
        "NavigationRail background",
        &[
            ("navigationRail.background", c.navigation_rail.background),
            ("canvas", theme.canvas),
        ],
        ("surface", s.surface),
    );
    cat.push(
        Navigation,
        "NavigationRail indicator",
        &[
            ("navigationRail.indicator", c.navigation_rail.indicator),
            ("navigationBar.indicator", c.navigation_bar.indicator),
        ],
        pick(
            ("secondaryContainer", s.secondary_container),
            m2_tint(s.secondary, 0x3D, "secondary 24%"),
        ),
    );

    // Surfaces
    cat.push(
        Surfaces,
        "Canvas",
        &[("canvas", theme.canvas)],
        ("surface", s.surface),
    );
    cat.push(
        Surfaces,
        "Card",
        &[
            ("card.background", c.card.background),
            ("cardColor", theme.card_color),
        ],
        ("surface", s.surface),
    );
    cat.push(
        Surfaces,
        "Dialog",
        &[
            ("dialog.background", c.dialog.background),
            ("cardColor", theme.card_color),
        ],
        ("surface", s.surface),
    );
    cat.push(
        Surfaces,
        "PopupMenu",
        &[
            ("popupMenu.background", c.popup_menu.background),
            ("cardColor", theme.card_color),
        ],
        ("surface", s.surface),
    );
    cat.push(
        Surfaces,
        "BottomSheet",
        &[
            ("bottomSheet.background", c.bottom_sheet.background),
            ("canvas", theme.canvas),
        ],
        ("surface", s.surface),
    );
    cat.push(
        Surfaces,
        "SnackBar",
        &[("snackBar.background", c.snack_bar.background)],
        pick(
            ("inverseSurface", s.inverse_surface),
            m2_tint(s.on_surface, 0xCC, "onSurface 80%"),
        ),
    );
    cat.push(
        Surfaces,
        "Tooltip",
        &[("tooltip.background", c.tooltip.background)],
        pick(
            ("inverseSurface", s.inverse_surface),
            m2_tint(s.on_surface, 0xE6, "onSurface 90%"),
        ),
    );

    tracing::debug!(theme = %theme.name, roles = cat.out.len(), "built swatch catalog");
    cat.out
}

/// The catalog as drawn on the theme's card background.
pub fn cards(theme: &ThemeConfig) -> Vec<SwatchCard> {
    let background = theme.card_background();
    catalog(theme)
        .into_iter()
        .map(|swatch| SwatchCard::new(swatch, background))
        .collect()
}

/// Split cards by group, keeping catalog order. Empty groups are skipped.
pub fn groups(cards: &[SwatchCard]) -> Vec<(SwatchGroup, Vec<SwatchCard>)> {
    SwatchGroup::ALL
        .iter()
        .filter_map(|&group| {
            let members: Vec<SwatchCard> = cards
                .iter()
                .filter(|c| c.swatch.group == group)
                .copied()
                .collect();
            (!members.is_empty()).then_some((group, members))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Brightness, ColorScheme};

    fn find(swatches: &[Swatch], label: &str) -> Swatch {
        *swatches
            .iter()
            .find(|s| s.label == label)
            .unwrap_or_else(|| panic!("no swatch labeled {label}"))
    }

    #[test]
    fn labels_are_unique_and_grouped_in_order() {
        let swatches = catalog(&ThemeConfig::new("t", Brightness::Light));

        let mut labels: Vec<_> = swatches.iter().map(|s| s.label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), swatches.len());

        assert!(swatches.windows(2).all(|w| w[0].group <= w[1].group));
    }

    #[test]
    fn defaults_come_from_scheme() {
        let theme = ThemeConfig::new("t", Brightness::Light);
        let swatches = catalog(&theme);

        let fab = find(&swatches, "FloatingActionButton");
        assert_eq!(fab.color, ColorScheme::light().primary_container);
        assert_eq!(fab.origin, Origin::Default("primaryContainer"));

        assert!(swatches.iter().all(|s| !s.origin.is_override()));
    }

    #[test]
    fn override_wins_and_is_reported() {
        let mut theme = ThemeConfig::new("t", Brightness::Light);
        theme.components.switch.thumb_selected = Some(Color::rgb(255, 0, 0));

        let thumb = find(&catalog(&theme), "Switch thumb");
        assert_eq!(thumb.color, Color::rgb(255, 0, 0));
        assert_eq!(thumb.origin, Origin::Override("switch.thumbSelected"));
    }

    #[test]
    fn radio_follows_checkbox_override() {
        let mut theme = ThemeConfig::new("t", Brightness::Light);
        theme.components.checkbox.fill_selected = Some(Color::rgb(0, 128, 0));

        let radio = find(&catalog(&theme), "Radio");
        assert_eq!(radio.color, Color::rgb(0, 128, 0));
        assert_eq!(radio.origin, Origin::Override("checkbox.fillSelected"));

        theme.components.radio.fill_selected = Some(Color::rgb(0, 0, 128));
        let radio = find(&catalog(&theme), "Radio");
        assert_eq!(radio.origin, Origin::Override("radio.fillSelected"));
    }

    #[test]
    fn material2_app_bar_depends_on_brightness() {
        let mut light = ThemeConfig::new("l", Brightness::Light);
        light.use_material3 = false;
        let bar = find(&catalog(&light), "AppBar background");
        assert_eq!(bar.color, light.scheme.primary);

        let mut dark = ThemeConfig::new("d", Brightness::Dark);
        dark.use_material3 = false;
        let swatches = catalog(&dark);
        assert_eq!(find(&swatches, "AppBar background").color, dark.scheme.surface);
        assert_eq!(
            find(&swatches, "TabBar indicator").color,
            dark.scheme.on_surface
        );
    }

    #[test]
    fn tab_bar_m2_tracks_app_bar_foreground_override() {
        let mut theme = ThemeConfig::new("t", Brightness::Light);
        theme.use_material3 = false;
        theme.components.app_bar.foreground = Some(Color::rgb(1, 1, 1));

        let swatches = catalog(&theme);
        assert_eq!(find(&swatches, "TabBar item").color, Color::rgb(1, 1, 1));
        assert_eq!(
            find(&swatches, "TabBar item").origin,
            Origin::Default("appBar foreground")
        );
    }

    #[test]
    fn material2_outline_is_translucent_and_blends() {
        let mut theme = ThemeConfig::new("t", Brightness::Light);
        theme.use_material3 = false;

        let outline = cards(&theme)
            .into_iter()
            .find(|c| c.swatch.label == "OutlinedButton outline")
            .expect("outline card");

        assert_eq!(outline.swatch.color.a, 0x1F);
        assert!(outline.shown.is_opaque());
        // onSurface is dark, but at 12% over a light surface it reads light.
        assert_eq!(outline.text_color, Color::BLACK);
    }

    #[test]
    fn cards_use_card_background() {
        let mut theme = ThemeConfig::new("t", Brightness::Light);
        theme.use_material3 = false;
        theme.card_color = Some(Color::BLACK);

        let snack = cards(&theme)
            .into_iter()
            .find(|c| c.swatch.label == "SnackBar")
            .expect("snack bar card");

        assert_eq!(snack.shown, alpha_blend(snack.swatch.color, Color::BLACK));
        assert_eq!(snack.text_color, Color::WHITE);
    }

    #[test]
    fn groups_partition_all_cards() {
        let all = cards(&ThemeConfig::new("t", Brightness::Dark));
        let grouped = groups(&all);

        assert_eq!(grouped.len(), SwatchGroup::ALL.len());
        let total: usize = grouped.iter().map(|(_, v)| v.len()).sum();
        assert_eq!(total, all.len());
        assert!(grouped.iter().all(|(g, v)| v.iter().all(|c| c.swatch.group == *g)));
    }
}
