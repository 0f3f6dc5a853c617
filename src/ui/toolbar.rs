//! Top toolbar: file open, search box, export menu, theme and About.

use crate::app::XmlTabApp;
use crate::ui::theme;
use crate::util::constants;

impl XmlTabApp {
    /// Render the top toolbar within the given `Ui` region.
    pub fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_centered(|ui| {
            ui.spacing_mut().item_spacing.x = 8.0;

            // ── File open ───────────────────────────────────────────
            if ui
                .button("📂 Open XML…")
                .on_hover_text("Load an XML file (Ctrl+O)")
                .clicked()
            {
                self.open_file();
            }
            if self.is_loading {
                ui.spinner();
            }

            ui.separator();

            // ── Search ──────────────────────────────────────────────
            let search = ui.add(
                egui::TextEdit::singleline(&mut self.search_term)
                    .hint_text("Search…")
                    .desired_width(220.0),
            );
            if search.changed() {
                self.page.reset();
                self.needs_refresh = true;
            }

            let any_active = !self.search_term.is_empty()
                || self.filter_column.is_some()
                || self.sort.is_some();
            if any_active
                && ui
                    .small_button("✖ Clear")
                    .on_hover_text("Clear search, filter and sort")
                    .clicked()
            {
                self.clear_view_controls();
            }

            ui.separator();

            // ── Export dropdown ─────────────────────────────────────
            ui.menu_button("📤 Export", |ui| {
                if ui.button("📄 Export view to CSV…").clicked() {
                    self.export_csv();
                    ui.close_menu();
                }
                if ui.button("📋 Export view to JSON…").clicked() {
                    self.export_json();
                    ui.close_menu();
                }
            });

            // ── Right-aligned app title + about + theme toggle ──────
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let about_btn = ui.add(
                    egui::Button::new(egui::RichText::new("ℹ").size(14.0))
                        .min_size(egui::vec2(22.0, 22.0)),
                );
                if about_btn.on_hover_text("About XmlTab").clicked() {
                    self.show_about = true;
                }

                // Theme toggle
                let theme_icon = if self.dark_mode { "☀" } else { "🌙" };
                let theme_tooltip = if self.dark_mode {
                    "Switch to light mode"
                } else {
                    "Switch to dark mode"
                };
                let theme_btn = ui.add(
                    egui::Button::new(egui::RichText::new(theme_icon).size(14.0))
                        .min_size(egui::vec2(22.0, 22.0)),
                );
                if theme_btn.on_hover_text(theme_tooltip).clicked() {
                    self.dark_mode = !self.dark_mode;
                    if self.dark_mode {
                        theme::apply_dark_theme(ui.ctx());
                    } else {
                        theme::apply_light_theme(ui.ctx());
                    }
                }

                ui.label(
                    egui::RichText::new(format!("📑 {}", constants::APP_NAME))
                        .color(theme::accent(self.dark_mode))
                        .strong()
                        .size(16.0),
                );
            });
        });
    }
}
