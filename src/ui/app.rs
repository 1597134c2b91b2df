use tracing::error;

use crate::api::{ApiError, Category, Product};
use crate::config::Config;
use crate::export::{export_page, ExportError};
use crate::mutation::MutationError;
use crate::ui::create::{CreateDialogState, CreateIntent, CreateReducer};
use crate::ui::detail::{DetailDialogState, DetailIntent, DetailReducer};
use crate::view::mvi::Reducer;
use crate::view::{TableIntent, TableReducer, TableState, PAGE_SIZES};

/// Whether the first product fetch has landed yet. The table renders
/// only once products arrive; a fetch failure replaces the table body
/// with an error banner for the rest of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
    Failed(String),
}

/// Where plain keystrokes go when no dialog is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// One-line status message in the footer; replaced by the next
/// operation's outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub text: String,
    pub is_error: bool,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    config: Config,
    should_quit: bool,
    /// Table view state (MVI pattern).
    table: TableState,
    detail: DetailDialogState,
    create: CreateDialogState,
    categories: Vec<Category>,
    load: LoadPhase,
    input_mode: InputMode,
    /// Selection within the visible page slice.
    selected_row: usize,
    /// True while an edit/create request is outstanding; submissions are
    /// refused until the response lands, which is the single-writer
    /// discipline the merge step depends on.
    busy: bool,
    flash: Option<Flash>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            should_quit: false,
            table: TableState::default(),
            detail: DetailDialogState::default(),
            create: CreateDialogState::default(),
            categories: Vec::new(),
            load: LoadPhase::Loading,
            input_mode: InputMode::Normal,
            selected_row: 0,
            busy: false,
            flash: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    pub fn detail(&self) -> &DetailDialogState {
        &self.detail
    }

    pub fn create(&self) -> &CreateDialogState {
        &self.create
    }

    pub fn load(&self) -> &LoadPhase {
        &self.load
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    pub fn busy(&self) -> bool {
        self.busy
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    pub fn flash(&self) -> Option<&Flash> {
        self.flash.as_ref()
    }

    pub fn set_flash(&mut self, text: impl Into<String>, is_error: bool) {
        self.flash = Some(Flash {
            text: text.into(),
            is_error,
        });
    }

    pub fn on_tick(&mut self) {}

    // ========================================================================
    // Table view state (MVI pattern)
    // ========================================================================

    pub fn dispatch_table(&mut self, intent: TableIntent) {
        dispatch_mvi!(self, table, TableReducer, intent);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.table.page_slice().len();
        if len == 0 {
            self.selected_row = 0;
        } else if self.selected_row >= len {
            self.selected_row = len - 1;
        }
    }

    pub fn select_next(&mut self) {
        let len = self.table.page_slice().len();
        if len > 0 && self.selected_row + 1 < len {
            self.selected_row += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn next_page(&mut self) {
        let page = self.table.page;
        self.dispatch_table(TableIntent::PageSelected { page: page + 1 });
    }

    pub fn prev_page(&mut self) {
        let page = self.table.page;
        self.dispatch_table(TableIntent::PageSelected {
            page: page.saturating_sub(1).max(1),
        });
    }

    pub fn cycle_page_size(&mut self) {
        let current = self.table.page_size;
        let idx = PAGE_SIZES.iter().position(|&s| s == current).unwrap_or(0);
        let size = PAGE_SIZES[(idx + 1) % PAGE_SIZES.len()];
        self.dispatch_table(TableIntent::PageSizeChanged { size });
    }

    // ========================================================================
    // Search input
    // ========================================================================

    pub fn enter_search(&mut self) {
        self.input_mode = InputMode::Search;
    }

    pub fn leave_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn push_filter_char(&mut self, ch: char) {
        let mut text = self.table.filter.clone();
        text.push(ch);
        self.dispatch_table(TableIntent::FilterChanged { text });
    }

    pub fn pop_filter_char(&mut self) {
        let mut text = self.table.filter.clone();
        text.pop();
        self.dispatch_table(TableIntent::FilterChanged { text });
    }

    // ========================================================================
    // Dialogs (MVI pattern)
    // ========================================================================

    pub fn dispatch_detail(&mut self, intent: DetailIntent) {
        dispatch_mvi!(self, detail, DetailReducer, intent);
    }

    pub fn dispatch_create(&mut self, intent: CreateIntent) {
        dispatch_mvi!(self, create, CreateReducer, intent);
    }

    /// Open the detail dialog for the selected row. A selection whose id
    /// no longer resolves to a cached product silently does nothing.
    pub fn open_detail_for_selection(&mut self) {
        let Some(id) = self
            .table
            .page_slice()
            .get(self.selected_row)
            .map(|p| p.id)
        else {
            return;
        };
        let Some(product) = self.table.product(id).cloned() else {
            return;
        };
        self.dispatch_detail(DetailIntent::Open { product });
    }

    pub fn open_create_dialog(&mut self) {
        let categories = self.categories.clone();
        self.dispatch_create(CreateIntent::Open { categories });
    }

    // ========================================================================
    // Async results
    // ========================================================================

    pub fn on_products_loaded(&mut self, result: Result<Vec<Product>, ApiError>) {
        match result {
            Ok(products) => {
                self.dispatch_table(TableIntent::ProductsLoaded { products });
                self.load = LoadPhase::Ready;
            }
            Err(err) => {
                error!(error = %err, "initial product fetch failed");
                self.load = LoadPhase::Failed(err.user_message());
            }
        }
    }

    pub fn on_categories_loaded(&mut self, categories: Vec<Category>) {
        self.categories = categories;
    }

    pub fn on_edit_done(&mut self, result: Result<TableIntent, MutationError>) {
        self.busy = false;
        match result {
            Ok(intent) => {
                self.dispatch_table(intent);
                self.dispatch_detail(DetailIntent::Close);
                self.set_flash("Product updated", false);
            }
            Err(err) => self.set_flash(err.user_message(), true),
        }
    }

    pub fn on_create_done(&mut self, result: Result<TableIntent, MutationError>) {
        self.busy = false;
        match result {
            Ok(intent) => {
                self.dispatch_table(intent);
                // Closing drops the form state, which is the "clear the
                // form" the success path promises.
                self.dispatch_create(CreateIntent::Close);
                self.set_flash("Product created", false);
            }
            Err(err) => self.set_flash(err.user_message(), true),
        }
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Export the visible page to CSV. Reads view state, never mutates it.
    pub fn export_visible_page(&mut self) {
        let slice = self.table.page_slice();
        match export_page(&slice, self.table.page, &self.config.export.dir) {
            Ok(path) => {
                let text = format!("Exported {}", path.display());
                self.set_flash(text, false);
            }
            Err(ExportError::NothingToExport) => {
                self.set_flash("Nothing to export", true);
            }
            Err(err) => {
                error!(error = %err, "export failed");
                self.set_flash(format!("Export failed: {}", err), true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Product;

    fn product(id: u64, title: &str, price: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            description: None,
            category: None,
            images: Vec::new(),
        }
    }

    fn ready_app(count: u64) -> App {
        let mut app = App::new(Config::default());
        let products = (1..=count).map(|i| product(i, "P", i as f64)).collect();
        app.on_products_loaded(Ok(products));
        app
    }

    #[test]
    fn products_loaded_marks_ready() {
        let app = ready_app(3);
        assert_eq!(*app.load(), LoadPhase::Ready);
        assert_eq!(app.table().products.len(), 3);
    }

    #[test]
    fn product_fetch_failure_marks_failed() {
        let mut app = App::new(Config::default());
        app.on_products_loaded(Err(crate::api::ApiError::Service {
            status: 500,
            message: "boom".to_string(),
        }));
        assert!(matches!(app.load(), LoadPhase::Failed(_)));
        assert!(app.table().products.is_empty());
    }

    #[test]
    fn selection_stays_within_page_slice() {
        let mut app = ready_app(3);
        app.select_next();
        app.select_next();
        app.select_next();
        assert_eq!(app.selected_row(), 2);
    }

    #[test]
    fn shrinking_filter_clamps_selection() {
        let mut app = ready_app(10);
        for _ in 0..9 {
            app.select_next();
        }
        app.dispatch_table(TableIntent::FilterChanged {
            text: "P".to_string(),
        });
        assert!(app.selected_row() < app.table().page_slice().len());
    }

    #[test]
    fn open_detail_for_missing_selection_is_noop() {
        let mut app = ready_app(0);
        app.open_detail_for_selection();
        assert!(!app.detail().is_visible());
    }

    #[test]
    fn open_detail_for_selection_shows_product() {
        let mut app = ready_app(2);
        app.select_next();
        app.open_detail_for_selection();
        assert!(app.detail().is_visible());
    }

    #[test]
    fn edit_failure_keeps_dialog_and_sets_error_flash() {
        let mut app = ready_app(1);
        app.open_detail_for_selection();
        app.set_busy(true);
        app.on_edit_done(Err(MutationError::Validation {
            field: "title",
            reason: "must not be empty",
        }));
        assert!(!app.busy());
        assert!(app.detail().is_visible());
        assert!(app.flash().is_some_and(|f| f.is_error));
    }

    #[test]
    fn create_success_closes_dialog_and_prepends() {
        let mut app = ready_app(1);
        app.open_create_dialog();
        app.set_busy(true);
        app.on_create_done(Ok(TableIntent::ProductCreated {
            product: product(99, "New", 1.0),
        }));
        assert!(!app.create().is_visible());
        assert_eq!(app.table().products[0].id, 99);
        assert_eq!(app.table().page, 1);
    }

    #[test]
    fn cycle_page_size_walks_the_allowed_set() {
        let mut app = ready_app(1);
        assert_eq!(app.table().page_size, PAGE_SIZES[0]);
        app.cycle_page_size();
        assert_eq!(app.table().page_size, PAGE_SIZES[1]);
    }
}
