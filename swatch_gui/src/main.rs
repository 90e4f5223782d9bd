use anyhow::Context;
use eframe::egui;
use swatch_core::{Brightness, Color, SwatchCard, ThemeConfig};
use tracing_subscriber::EnvFilter;

const CARD_WIDTH: f32 = 150.0;
const CARD_HEIGHT: f32 = 56.0;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let theme_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "theme.json".to_string());

    let app = SwatchApp::new(theme_path)?;

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Theme Swatches",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("run swatch panel: {e}"))
}

fn to_egui(c: Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

struct SwatchApp {
    theme_path: String,
    theme: ThemeConfig,
    cards: Vec<SwatchCard>,

    // UI state
    show_hex: bool,
    show_groups: bool,
    last_error: Option<String>,
}

impl SwatchApp {
    fn new(theme_path: String) -> anyhow::Result<Self> {
        let theme = ThemeConfig::load_json_file(&theme_path)
            .with_context(|| format!("load theme file: {theme_path}"))?;
        let cards = swatch_core::cards(&theme);

        Ok(Self {
            theme_path,
            theme,
            cards,
            show_hex: true,
            show_groups: true,
            last_error: None,
        })
    }

    fn safe_reload(&mut self) {
        match ThemeConfig::load_json_file(&self.theme_path) {
            Ok(theme) => {
                self.cards = swatch_core::cards(&theme);
                self.theme = theme;
                self.last_error = None;
                tracing::info!(path = %self.theme_path, "reloaded theme");
            }
            Err(e) => {
                tracing::warn!(path = %self.theme_path, "reload failed: {e:#}");
                self.last_error = Some(format!("{e:#}"));
            }
        }
    }

    fn card(&self, ui: &mut egui::Ui, card: &SwatchCard) {
        let text = to_egui(card.text_color);

        egui::Frame::none()
            .fill(to_egui(card.shown))
            .rounding(6.0)
            .inner_margin(egui::Margin::same(6.0))
            .stroke(egui::Stroke::new(1.0, text.gamma_multiply(0.2)))
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.set_min_height(CARD_HEIGHT);
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(card.swatch.label).color(text).strong());
                    if self.show_hex {
                        ui.label(
                            egui::RichText::new(card.swatch.color.to_string())
                                .color(text)
                                .monospace()
                                .small(),
                        );
                    }
                })
                .response
                .on_hover_text(card.swatch.origin.to_string())
            });
    }

    fn wrap(&self, ui: &mut egui::Ui, cards: &[SwatchCard]) {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);
            for card in cards {
                self.card(ui, card);
            }
        });
    }
}

impl eframe::App for SwatchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(match self.theme.brightness() {
            Brightness::Light => egui::Visuals::light(),
            Brightness::Dark => egui::Visuals::dark(),
        });

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Theme Swatches");
                ui.separator();
                ui.label(format!("File: {}", self.theme_path));
            });

            ui.horizontal(|ui| {
                ui.label(format!(
                    "{} | {:?} | {}",
                    self.theme.name,
                    self.theme.brightness(),
                    if self.theme.use_material3 { "M3" } else { "M2" }
                ));

                ui.separator();
                ui.checkbox(&mut self.show_hex, "Show hex");
                ui.checkbox(&mut self.show_groups, "Group headers");

                ui.separator();
                if ui.button("Reload").clicked() {
                    self.safe_reload();
                }
            });

            if let Some(err) = &self.last_error {
                ui.colored_label(egui::Color32::RED, format!("Error: {err}"));
            }
        });

        let background = to_egui(self.theme.card_background());
        let frame = egui::Frame::central_panel(&ctx.style()).fill(background);
        let heading = to_egui(swatch_core::resolve_text_color(
            self.theme.card_background(),
            self.theme.card_background(),
        ));

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if self.show_groups {
                    for (group, members) in swatch_core::groups(&self.cards) {
                        ui.label(egui::RichText::new(group.to_string()).color(heading).strong());
                        self.wrap(ui, &members);
                        ui.add_space(8.0);
                    }
                } else {
                    self.wrap(ui, &self.cards);
                }
            });
        });
    }
}
