//! Top-level application state and `eframe::App` implementation.
//!
//! `XmlTabApp` owns the loaded records, the column registry, the active
//! query controls (search, presence filter, sort), the page cursor, and the
//! channels used by background file/export threads. Rendering is delegated
//! to the sub-modules in `ui/`.

use crossbeam_channel::Receiver;

use crate::core::columns::{self, ColumnStore, VisibilityState};
use crate::core::extractor;
use crate::core::paginator::{self, PageCursor};
use crate::core::query::{self, SortDirection, SortSpec};
use crate::core::record::Record;
use crate::util::constants;

/// Result of a background file read, delivered to the UI thread.
pub enum LoadMessage {
    /// The file was read successfully; `text` is its raw content.
    Loaded { name: String, text: String },
    /// The file could not be read as text.
    Failed { name: String, error: String },
}

/// Adapter from `eframe::Storage` to the column-store port.
struct EframeStore<'a>(&'a mut dyn eframe::Storage);

impl ColumnStore for EframeStore<'_> {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_string(key)
    }

    fn set(&mut self, key: &str, value: String) {
        self.0.set_string(key, value);
    }
}

/// Central application state for XmlTab.
///
/// All fields are accessible to the UI rendering methods (defined in
/// `ui/*.rs` via `impl XmlTabApp` blocks).
pub struct XmlTabApp {
    // ── Data ────────────────────────────────────────────────────
    /// Master list of extracted records (unsorted, unfiltered).
    pub records: Vec<Record>,
    /// Column set and its visible/excluded partition.
    pub columns: VisibilityState,
    /// Name of the currently loaded file, for the status bar.
    pub source_name: Option<String>,

    // ── Query controls ──────────────────────────────────────────
    /// Free-text search across all fields.
    pub search_term: String,
    /// Single-column presence filter, if any.
    pub filter_column: Option<String>,
    /// Active sort, if any. Absent means extraction order.
    pub sort: Option<SortSpec>,

    // ── View ────────────────────────────────────────────────────
    /// Indices into `records` in display order (sorted + filtered).
    pub view_indices: Vec<usize>,
    /// Flag: re-run the query pipeline on the next frame.
    pub needs_refresh: bool,
    /// Current 1-based page into `view_indices`.
    pub page: PageCursor,

    // ── Errors ──────────────────────────────────────────────────
    /// Message from the last failed load; cleared on the next success.
    pub error: Option<String>,

    // ── Background file load ────────────────────────────────────
    /// Receiver for the pending file-open thread, if one is running.
    pub load_rx: Option<Receiver<LoadMessage>>,
    /// `true` while a file dialog or read is pending.
    pub is_loading: bool,

    // ── Export feedback ─────────────────────────────────────────
    /// Receiver for export completion messages from background threads.
    pub export_rx: Option<Receiver<String>>,
    /// Transient status message for export results (shown briefly).
    pub export_message: Option<(String, std::time::Instant)>,

    // ── Persistence ─────────────────────────────────────────────
    /// Visible-column snapshot read once at startup; applied to each
    /// successful load and refreshed on every toggle.
    pub stored_visible: Option<Vec<String>>,
    /// Flag: write the snapshot to storage on the next frame.
    pub persist_pending: bool,

    // ── Chrome ──────────────────────────────────────────────────
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,
    /// Whether the About dialog is open.
    pub show_about: bool,
    /// Human-readable status text shown in the status bar.
    pub status_text: String,
}

// ── Construction ────────────────────────────────────────────────────────

impl XmlTabApp {
    /// Create the app, restore persisted preferences, and apply the theme.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut dark_mode = true;
        let mut stored_visible = None;

        if let Some(storage) = cc.storage {
            if let Some(dark) = eframe::get_value::<bool>(storage, constants::DARK_MODE_KEY) {
                dark_mode = dark;
            }
            stored_visible = storage
                .get_string(constants::VISIBLE_COLUMNS_KEY)
                .as_deref()
                .and_then(columns::decode_snapshot);
        }

        if dark_mode {
            crate::ui::theme::apply_dark_theme(&cc.egui_ctx);
        } else {
            crate::ui::theme::apply_light_theme(&cc.egui_ctx);
        }

        Self {
            records: Vec::new(),
            columns: VisibilityState::default(),
            source_name: None,

            search_term: String::new(),
            filter_column: None,
            sort: None,

            view_indices: Vec::new(),
            needs_refresh: false,
            page: PageCursor::new(),

            error: None,

            load_rx: None,
            is_loading: false,

            export_rx: None,
            export_message: None,

            stored_visible,
            persist_pending: false,

            dark_mode,
            show_about: false,
            status_text: "Open an XML file to get started".into(),
        }
    }
}

// ── Core logic ──────────────────────────────────────────────────────────

impl XmlTabApp {
    /// Extract records from freshly loaded file text and replace all derived
    /// state (records, columns, view, cursor, error) as one unit.
    ///
    /// On a parse error the previous table stays untouched; only the error
    /// surface changes (a bad file must not blank a good table).
    pub fn apply_loaded_text(&mut self, name: String, text: &str) {
        match extractor::extract(text) {
            Ok(records) => {
                let all = columns::derive_columns(&records);
                self.columns = VisibilityState::restore(all, self.stored_visible.as_deref());
                self.records = records;
                self.error = None;
                self.page.reset();
                self.needs_refresh = true;

                // Controls referring to columns the new file lacks are stale.
                if let Some(col) = &self.filter_column {
                    if !self.columns.all().contains(col) {
                        self.filter_column = None;
                    }
                }
                if let Some(spec) = &self.sort {
                    if !self.columns.all().contains(&spec.column) {
                        self.sort = None;
                    }
                }

                self.status_text = format!("Loaded {} records from {}", self.records.len(), name);
                tracing::info!("Extracted {} records from {}", self.records.len(), name);
                self.source_name = Some(name);
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.status_text = format!("Failed to parse {name}");
                tracing::warn!("Extraction failed for {}: {}", name, e);
            }
        }
    }

    /// Re-run the query pipeline into `view_indices`.
    pub fn refresh_view(&mut self) {
        self.view_indices = query::view(
            &self.records,
            self.sort.as_ref(),
            self.filter_column.as_deref(),
            &self.search_term,
        );
        self.needs_refresh = false;
    }

    pub fn total_pages(&self) -> usize {
        paginator::total_pages(self.view_indices.len(), constants::PAGE_SIZE)
    }

    /// View indices for the current page.
    pub fn page_indices(&self) -> &[usize] {
        paginator::paginate(&self.view_indices, self.page.current(), constants::PAGE_SIZE)
    }

    /// Cycle the sort on `column`: unsorted or other column → ascending;
    /// ascending → descending; descending → ascending.
    pub fn cycle_sort(&mut self, column: &str) {
        let direction = match &self.sort {
            Some(spec)
                if spec.column == column && spec.direction == SortDirection::Ascending =>
            {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        self.sort = Some(SortSpec {
            column: column.to_string(),
            direction,
        });
        self.page.reset();
        self.needs_refresh = true;
    }

    /// Toggle the presence filter on `column` (selecting the active column
    /// clears the filter).
    pub fn toggle_filter(&mut self, column: &str) {
        self.filter_column = if self.filter_column.as_deref() == Some(column) {
            None
        } else {
            Some(column.to_string())
        };
        self.page.reset();
        self.needs_refresh = true;
    }

    /// Toggle a column between visible and excluded, and schedule a write of
    /// the visibility snapshot. The view itself is unaffected: hiding a
    /// column changes rendering only, never record contents or row count.
    pub fn toggle_column(&mut self, column: &str) {
        self.columns.toggle(column);
        self.stored_visible = Some(self.columns.visible().to_vec());
        self.persist_pending = true;
        tracing::debug!("Toggled column visibility: {}", column);
    }

    /// Clear search, filter and sort, returning to extraction order.
    pub fn clear_view_controls(&mut self) {
        self.search_term.clear();
        self.filter_column = None;
        self.sort = None;
        self.page.reset();
        self.needs_refresh = true;
    }

    /// Collect the current view into a cloned `Vec` for export.
    ///
    /// Cloning is necessary because export happens on a background thread
    /// (for the file dialog) and can't hold references to `self`.
    pub fn view_records(&self) -> Vec<Record> {
        self.view_indices
            .iter()
            .filter_map(|&idx| self.records.get(idx).cloned())
            .collect()
    }

    /// Poll the file-load channel and apply any completed read.
    ///
    /// Called once per frame. The extraction and the state replacement
    /// happen synchronously here, so the rest of the app never observes a
    /// partial update.
    fn process_load_messages(&mut self) {
        let Some(rx) = &self.load_rx else { return };
        match rx.try_recv() {
            Ok(LoadMessage::Loaded { name, text }) => {
                self.load_rx = None;
                self.is_loading = false;
                self.apply_loaded_text(name, &text);
            }
            Ok(LoadMessage::Failed { name, error }) => {
                self.load_rx = None;
                self.is_loading = false;
                tracing::warn!("Failed to read {}: {}", name, error);
                self.error = Some(error);
                self.status_text = format!("Failed to read {name}");
            }
            Err(crossbeam_channel::TryRecvError::Disconnected) => {
                // Sender dropped without sending: the user cancelled the
                // open dialog. Clear so future opens are not blocked.
                self.load_rx = None;
                self.is_loading = false;
            }
            Err(crossbeam_channel::TryRecvError::Empty) => {}
        }
    }
}

// ── eframe::App implementation ──────────────────────────────────────────

impl eframe::App for XmlTabApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // 1. Process background file-load completion
        self.process_load_messages();

        // 2. Process export completion messages
        self.process_export_messages();

        // 3. Re-run the query pipeline if a control changed
        if self.needs_refresh {
            self.refresh_view();
        }

        // 4. Persist the visibility snapshot after a toggle
        if self.persist_pending {
            if let Some(storage) = frame.storage_mut() {
                let mut store = EframeStore(storage);
                self.columns.persist(&mut store);
            }
            self.persist_pending = false;
        }

        // 5. Keep repainting while a load is pending (to poll the channel)
        if self.is_loading {
            ctx.request_repaint();
        }

        // 6. Handle keyboard shortcuts
        self.handle_keyboard_shortcuts(ctx);

        // ── Top toolbar ─────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .exact_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                self.render_toolbar(ui);
            });

        // ── Bottom status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(26.0)
            .show(ctx, |ui| {
                self.render_status_bar(ui);
            });

        // ── Central data table ──────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_error_banner(ui);
            self.render_excluded_columns(ui);
            self.render_data_table(ui);
        });

        // ── Floating dialogs ────────────────────────────────────────
        self.render_about_dialog(ctx);
    }

    /// Persist user preferences to eframe storage on shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, constants::DARK_MODE_KEY, &self.dark_mode);
        if !self.columns.all().is_empty() {
            let mut store = EframeStore(storage);
            self.columns.persist(&mut store);
        }
    }
}
