//! Central data table with per-column hide/filter/sort controls.
//!
//! Uses `egui_extras::TableBuilder` for column layout. Only the current
//! page of the view is rendered, so row counts stay small regardless of
//! file size.

use egui_extras::{Column, TableBuilder};

use crate::app::XmlTabApp;
use crate::ui::theme;
use crate::util::constants;

impl XmlTabApp {
    /// Render the parse-error banner, if a load failed.
    ///
    /// The previous table (if any) stays visible below it.
    pub fn render_error_banner(&self, ui: &mut egui::Ui) {
        let Some(error) = &self.error else { return };
        let dark = self.dark_mode;
        egui::Frame::new()
            .fill(theme::error_banner_bg(dark))
            .inner_margin(egui::Margin::same(6))
            .corner_radius(4.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("⚠ Error parsing XML file.")
                            .color(theme::error_text(dark))
                            .strong(),
                    );
                    ui.label(
                        egui::RichText::new(error).color(theme::text_secondary(dark)),
                    );
                });
            });
        ui.add_space(4.0);
    }

    /// Render the excluded-columns strip: one badge per hidden column;
    /// clicking a badge restores the column.
    pub fn render_excluded_columns(&mut self, ui: &mut egui::Ui) {
        let excluded = self.columns.excluded().to_vec();
        if excluded.is_empty() {
            return;
        }
        let dark = self.dark_mode;
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new("Hidden:").color(theme::text_secondary(dark)));
            for column in &excluded {
                if ui
                    .small_button(format!("👁 {column}"))
                    .on_hover_text("Show this column again")
                    .clicked()
                {
                    self.toggle_column(column);
                }
            }
        });
        ui.add_space(4.0);
    }

    /// Render the current page of the view as a table.
    pub fn render_data_table(&mut self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;

        if self.records.is_empty() {
            ui.centered_and_justified(|ui| {
                let hint = if self.is_loading {
                    "Loading…"
                } else if self.source_name.is_some() {
                    "The file contained no rows."
                } else {
                    "Open an XML file to get started."
                };
                ui.label(egui::RichText::new(hint).color(theme::text_secondary(dark)));
            });
            return;
        }

        let visible = self.columns.visible().to_vec();
        if visible.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new("All columns are hidden.")
                        .color(theme::text_secondary(dark)),
                );
            });
            return;
        }

        let page_rows: Vec<usize> = self.page_indices().to_vec();

        let mut table = TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
        for i in 0..visible.len() {
            table = if i + 1 == visible.len() {
                table.column(Column::remainder().at_least(90.0).clip(true))
            } else {
                table.column(Column::auto().at_least(110.0).clip(true))
            };
        }

        table
            .header(40.0, |mut header| {
                for column in &visible {
                    header.col(|ui| {
                        self.render_column_header(ui, column);
                    });
                }
            })
            .body(|body| {
                body.rows(constants::TABLE_ROW_HEIGHT, page_rows.len(), |mut row| {
                    let page_idx = row.index();
                    if page_idx >= page_rows.len() {
                        return;
                    }
                    let record = &self.records[page_rows[page_idx]];
                    for column in &visible {
                        row.col(|ui| {
                            let text = record.cell_text(column);
                            // Truncate long cells for the table view (char-safe)
                            let display = if text.chars().count() > constants::MAX_CELL_CHARS {
                                let end = text
                                    .char_indices()
                                    .nth(constants::MAX_CELL_CHARS)
                                    .map(|(i, _)| i)
                                    .unwrap_or(text.len());
                                format!("{}…", &text[..end])
                            } else {
                                text
                            };
                            ui.label(&display);
                        });
                    }
                });
            });
    }

    /// Render one column header: a sort button carrying the column name,
    /// plus presence-filter and hide controls.
    ///
    /// A dotted name (`Group.Sub`) shows its group on the button and the
    /// remainder as a sub-label; the full name is on the tooltip.
    fn render_column_header(&mut self, ui: &mut egui::Ui, column: &str) {
        let dark = self.dark_mode;
        let (title, sublabel) = match column.split_once('.') {
            Some((group, rest)) => (group, Some(rest)),
            None => (column, None),
        };

        let direction = self
            .sort
            .as_ref()
            .filter(|s| s.column == column)
            .map(|s| s.direction);
        let arrow = match direction {
            Some(crate::core::query::SortDirection::Ascending) => " ▲",
            Some(crate::core::query::SortDirection::Descending) => " ▼",
            None => "",
        };
        let text = format!("{title}{arrow}");
        let rich = if direction.is_some() {
            egui::RichText::new(text).color(theme::accent(dark)).strong()
        } else {
            egui::RichText::new(text).color(theme::text_primary(dark))
        };

        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(rich)
                    .on_hover_text(format!("Sort by {column}"))
                    .clicked()
                {
                    self.cycle_sort(column);
                }

                let filtering = self.filter_column.as_deref() == Some(column);
                if ui
                    .selectable_label(filtering, "🔍")
                    .on_hover_text("Only show rows with a value in this column")
                    .clicked()
                {
                    self.toggle_filter(column);
                }

                if ui
                    .small_button("✖")
                    .on_hover_text("Hide column")
                    .clicked()
                {
                    self.toggle_column(column);
                }
            });
            if let Some(rest) = sublabel {
                ui.label(
                    egui::RichText::new(rest)
                        .small()
                        .color(theme::text_secondary(dark)),
                );
            }
        })
        .response
        .on_hover_text(column);
    }
}
