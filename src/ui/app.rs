use crate::catalog::{next_category_id, prev_category_id, FetchCompletion, FilterField, ProductKey};
use crate::ui::catalog::{CatalogView, FetchResult};
use crate::ui::product_card::index_of;
use crate::ui::search_bar::{SearchBar, SearchField};

/// Focusable controls, in Tab order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    SearchQuery,
    SearchLocation,
    Category,
    MinPrice,
    MaxPrice,
    Products,
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::SearchQuery,
        Focus::SearchLocation,
        Focus::Category,
        Focus::MinPrice,
        Focus::MaxPrice,
        Focus::Products,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// True for controls that take typed text.
    pub fn is_text_input(self) -> bool {
        matches!(
            self,
            Focus::SearchQuery | Focus::SearchLocation | Focus::MinPrice | Focus::MaxPrice
        )
    }

    pub fn search_field(self) -> Option<SearchField> {
        match self {
            Focus::SearchQuery => Some(SearchField::Query),
            Focus::SearchLocation => Some(SearchField::Location),
            _ => None,
        }
    }
}

/// Terminal shell around the catalog view: focus, input drafts, selection.
pub struct App {
    should_quit: bool,
    focus: Focus,
    catalog: CatalogView,
    search_bar: SearchBar,
    min_price_draft: String,
    max_price_draft: String,
    /// Selected card, tracked by identity so it survives reordering.
    selected: Option<ProductKey>,
}

impl App {
    pub fn new(catalog: CatalogView) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Products,
            catalog,
            search_bar: SearchBar::default(),
            min_price_draft: String::new(),
            max_price_draft: String::new(),
            selected: None,
        }
    }

    /// Start with a category already selected (before mount).
    pub fn preset_category(&mut self, category: impl Into<String>) {
        self.catalog.preset(FilterField::Category, category);
    }

    pub fn mount(&mut self) {
        self.catalog.mount();
    }

    pub fn unmount(&mut self) {
        self.catalog.unmount();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.discard_price_draft();
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    /// A price draft left without Enter reverts to the committed filter.
    fn discard_price_draft(&mut self) {
        let filters = self.catalog.filters();
        match self.focus {
            Focus::MinPrice => self.min_price_draft = filters.min_price.clone(),
            Focus::MaxPrice => self.max_price_draft = filters.max_price.clone(),
            _ => {}
        }
    }

    pub fn is_editing(&self) -> bool {
        self.focus.is_text_input()
    }

    pub fn catalog(&self) -> &CatalogView {
        &self.catalog
    }

    pub fn search_bar(&self) -> &SearchBar {
        &self.search_bar
    }

    pub fn min_price_draft(&self) -> &str {
        &self.min_price_draft
    }

    pub fn max_price_draft(&self) -> &str {
        &self.max_price_draft
    }

    pub fn selected(&self) -> Option<&ProductKey> {
        self.selected.as_ref()
    }

    pub fn on_char(&mut self, c: char) {
        match self.focus {
            Focus::SearchQuery | Focus::SearchLocation => {
                if let Some(field) = self.focus.search_field() {
                    self.search_bar.push(field, c);
                }
            }
            // Number inputs only take digits and a decimal point.
            Focus::MinPrice if c.is_ascii_digit() || c == '.' => self.min_price_draft.push(c),
            Focus::MaxPrice if c.is_ascii_digit() || c == '.' => self.max_price_draft.push(c),
            _ => {}
        }
    }

    pub fn on_backspace(&mut self) {
        match self.focus {
            Focus::SearchQuery | Focus::SearchLocation => {
                if let Some(field) = self.focus.search_field() {
                    self.search_bar.backspace(field);
                }
            }
            Focus::MinPrice => {
                self.min_price_draft.pop();
            }
            Focus::MaxPrice => {
                self.max_price_draft.pop();
            }
            _ => {}
        }
    }

    /// Commit the focused control into the filter state.
    pub fn on_enter(&mut self) {
        match self.focus {
            Focus::SearchQuery | Focus::SearchLocation => {
                if let Some(input) = self.search_bar.submit() {
                    self.catalog.apply_search(input);
                }
            }
            Focus::MinPrice => {
                self.catalog
                    .set_filter(FilterField::MinPrice, self.min_price_draft.clone());
            }
            Focus::MaxPrice => {
                self.catalog
                    .set_filter(FilterField::MaxPrice, self.max_price_draft.clone());
            }
            Focus::Category | Focus::Products => {}
        }
    }

    pub fn cycle_category(&mut self, forward: bool) {
        let current = self.catalog.filters().category.as_str();
        let next = if forward {
            next_category_id(current)
        } else {
            prev_category_id(current)
        };
        self.catalog.set_filter(FilterField::Category, next);
    }

    /// Reset filters and every input draft.
    pub fn clear_filters(&mut self) {
        self.search_bar.clear();
        self.min_price_draft.clear();
        self.max_price_draft.clear();
        self.catalog.clear_filters();
    }

    /// Manual refetch after a failure.
    pub fn retry(&mut self) {
        if matches!(self.catalog.fetch(), FetchResult::Error { .. }) {
            self.catalog.refetch();
        }
    }

    pub fn select_next(&mut self) {
        self.move_selection(1);
    }

    pub fn select_prev(&mut self) {
        self.move_selection(-1);
    }

    fn move_selection(&mut self, delta: isize) {
        let products = self.catalog.fetch().products();
        if products.is_empty() {
            return;
        }
        let current = self
            .selected
            .as_ref()
            .and_then(|key| index_of(products, key));
        let last = products.len() - 1;
        // Nothing selected yet: the first move lands on the first card.
        let next = match current {
            Some(index) => index.saturating_add_signed(delta).min(last),
            None => 0,
        };
        self.selected = Some(products[next].key().clone());
    }

    pub fn on_tick(&mut self) {
        self.catalog.on_tick();
    }

    pub fn on_fetch_complete(&mut self, completion: FetchCompletion) {
        if self.catalog.on_fetch_complete(completion) {
            self.reconcile_selection();
        }
    }

    /// Keep the selection on the same product if it is still listed.
    fn reconcile_selection(&mut self) {
        let products = self.catalog.fetch().products();
        let still_listed = self
            .selected
            .as_ref()
            .is_some_and(|key| index_of(products, key).is_some());
        if !still_listed {
            self.selected = products.first().map(|p| p.key().clone());
        }
    }
}
