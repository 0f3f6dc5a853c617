//! Extended actions for [`XmlTabApp`]: file open, export, keyboard
//! shortcuts, and the About dialog.
//!
//! These are `impl` blocks on the app struct, split out from `app.rs` to
//! keep file sizes manageable.

use crate::app::{LoadMessage, XmlTabApp};
use crate::util::constants;
use crate::util::error::XmlTabError;

// ── File open ───────────────────────────────────────────────────────────

impl XmlTabApp {
    /// Open a native file dialog (on a background thread) to select an
    /// `.xml` file, and read it to a string on that thread. The result is
    /// sent back via `load_rx` and applied on the UI thread.
    ///
    /// Guards against double-activation: if a dialog is already open the
    /// call is a no-op. There is no cancellation of an in-flight read; a
    /// second load simply replaces all prior derived state on completion.
    pub fn open_file(&mut self) {
        if self.load_rx.is_some() {
            tracing::debug!("open_file: dialog already open, ignoring duplicate call");
            return;
        }

        let (tx, rx) = crossbeam_channel::bounded::<LoadMessage>(1);
        self.load_rx = Some(rx);
        self.is_loading = true;

        std::thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("XML", &["xml"])
                .set_title("Open XML File")
                .pick_file()
            {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                match std::fs::read_to_string(&path) {
                    Ok(text) => {
                        let _ = tx.send(LoadMessage::Loaded { name, text });
                    }
                    Err(e) => {
                        let _ = tx.send(LoadMessage::Failed {
                            name,
                            error: XmlTabError::from(e).to_string(),
                        });
                    }
                }
            }
        });
    }
}

// ── Export actions ──────────────────────────────────────────────────────

impl XmlTabApp {
    /// Export the current view to CSV via a native save dialog.
    ///
    /// Runs on a background thread and sends a completion message back via
    /// `export_rx` so the UI can display feedback.
    pub fn export_csv(&mut self) {
        if self.export_rx.is_some() {
            self.export_message = Some((
                "Export already in progress".into(),
                std::time::Instant::now(),
            ));
            return;
        }

        let records = self.view_records();
        if records.is_empty() {
            self.export_message =
                Some(("No records to export".into(), std::time::Instant::now()));
            return;
        }
        let columns = self.columns.all().to_vec();

        let (tx, rx) = crossbeam_channel::bounded::<String>(1);
        self.export_rx = Some(rx);

        std::thread::spawn(move || {
            let default_name = format!(
                "xmltab_export_{}.csv",
                chrono::Local::now().format("%Y%m%d_%H%M%S")
            );
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("CSV", &["csv"])
                .set_file_name(default_name)
                .save_file()
            {
                match crate::export::csv_export::export_csv(&records, &columns, &path) {
                    Ok(()) => {
                        let _ = tx.send(format!("Exported {} records to CSV", records.len()));
                    }
                    Err(e) => {
                        tracing::error!("CSV export failed: {}", e);
                        let _ = tx.send(format!("CSV export failed: {e}"));
                    }
                }
            }
        });
    }

    /// Export the current view to JSON via a native save dialog.
    pub fn export_json(&mut self) {
        if self.export_rx.is_some() {
            self.export_message = Some((
                "Export already in progress".into(),
                std::time::Instant::now(),
            ));
            return;
        }

        let records = self.view_records();
        if records.is_empty() {
            self.export_message =
                Some(("No records to export".into(), std::time::Instant::now()));
            return;
        }

        let (tx, rx) = crossbeam_channel::bounded::<String>(1);
        self.export_rx = Some(rx);

        std::thread::spawn(move || {
            let default_name = format!(
                "xmltab_export_{}.json",
                chrono::Local::now().format("%Y%m%d_%H%M%S")
            );
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("JSON", &["json"])
                .set_file_name(default_name)
                .save_file()
            {
                match crate::export::json_export::export_json(&records, &path) {
                    Ok(()) => {
                        let _ = tx.send(format!("Exported {} records to JSON", records.len()));
                    }
                    Err(e) => {
                        tracing::error!("JSON export failed: {}", e);
                        let _ = tx.send(format!("JSON export failed: {e}"));
                    }
                }
            }
        });
    }

    /// Process export completion messages from background threads.
    ///
    /// Called once per frame. Checks the `export_rx` channel for messages
    /// and clears stale export messages after a timeout.
    pub fn process_export_messages(&mut self) {
        if let Some(rx) = &self.export_rx {
            match rx.try_recv() {
                Ok(msg) => {
                    self.export_message = Some((msg, std::time::Instant::now()));
                    self.export_rx = None;
                }
                Err(crossbeam_channel::TryRecvError::Disconnected) => {
                    // Sender dropped without sending (user cancelled the
                    // save dialog). Clear so future exports are not blocked.
                    self.export_rx = None;
                }
                Err(crossbeam_channel::TryRecvError::Empty) => {}
            }
        }
        // Clear export message after 4 seconds
        if let Some((_, instant)) = &self.export_message {
            if instant.elapsed() > std::time::Duration::from_secs(4) {
                self.export_message = None;
            }
        }
    }
}

// ── Keyboard shortcuts ──────────────────────────────────────────────────

impl XmlTabApp {
    /// Handle global keyboard shortcuts.
    ///
    /// - **Ctrl+O**: Open an XML file
    /// - **Escape**: Close the About dialog, else clear the search
    /// - **Left/Right arrows, Page Up/Down**: previous / next page
    ///
    /// Page navigation is suppressed while a text field has focus.
    pub fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let typing = ctx.wants_keyboard_input();
        ctx.input(|i| {
            if i.modifiers.ctrl && i.key_pressed(egui::Key::O) {
                self.open_file();
            }

            if i.key_pressed(egui::Key::Escape) {
                if self.show_about {
                    self.show_about = false;
                } else if !self.search_term.is_empty() {
                    self.search_term.clear();
                    self.page.reset();
                    self.needs_refresh = true;
                }
            }

            if typing {
                return;
            }

            if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::PageUp) {
                self.page.previous();
            }
            if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::PageDown) {
                let total = self.total_pages();
                self.page.next(total);
            }
        });
    }
}

// ── About dialog ────────────────────────────────────────────────────────

impl XmlTabApp {
    /// Render the About dialog window.
    pub fn render_about_dialog(&mut self, ctx: &egui::Context) {
        if !self.show_about {
            return;
        }

        let mut open = true;
        egui::Window::new("About")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([300.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(constants::APP_NAME)
                            .color(crate::ui::theme::accent(self.dark_mode))
                            .strong()
                            .size(20.0),
                    );
                    ui.label(
                        egui::RichText::new(format!("v{}", constants::APP_VERSION))
                            .color(crate::ui::theme::text_secondary(self.dark_mode)),
                    );
                    ui.add_space(8.0);
                    ui.label("A fast, filterable XML table viewer");
                    ui.add_space(8.0);
                });
            });

        if !open {
            self.show_about = false;
        }
    }
}
