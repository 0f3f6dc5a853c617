//! Bottom status bar: record counts, page controls, and export feedback.

use crate::app::XmlTabApp;
use crate::ui::theme;

impl XmlTabApp {
    /// Render the status bar at the bottom of the window.
    ///
    /// Shows: shown/total counts | source file | page controls | status.
    pub fn render_status_bar(&mut self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;
        ui.horizontal_centered(|ui| {
            // ── Record count ────────────────────────────────────────
            let shown = self.view_indices.len();
            let total = self.records.len();
            let count_text = if shown == total {
                format!("{total} records")
            } else {
                format!("Showing {shown} of {total} records")
            };
            ui.label(egui::RichText::new(count_text).color(theme::text_secondary(dark)));

            if let Some(name) = &self.source_name {
                ui.separator();
                ui.label(egui::RichText::new(name).color(theme::text_dim(dark)));
            }

            // ── Page controls ───────────────────────────────────────
            if total > 0 {
                ui.separator();
                let total_pages = self.total_pages();
                let current = self.page.current();

                if ui
                    .add_enabled(current > 1, egui::Button::new("◀ Previous").small())
                    .clicked()
                {
                    self.page.previous();
                }
                ui.label(format!("Page {current} of {total_pages}"));
                if ui
                    .add_enabled(current < total_pages, egui::Button::new("Next ▶").small())
                    .clicked()
                {
                    self.page.next(total_pages);
                }
            }

            // ── Export feedback ─────────────────────────────────────
            if let Some((msg, _)) = &self.export_message {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(theme::ACCENT_DIM));
            }

            // ── Status text, right-aligned ──────────────────────────
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(&self.status_text).color(theme::text_dim(dark)),
                );
            });
        });
    }
}
