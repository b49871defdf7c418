//! The browser controller
//!
//! [`Browser`] merges the caller's owned items with the (possibly slow)
//! catalog of available definitions into one filtered, sorted, paginated
//! list and draws it through a [`Frontend`].
//!
//! Rendering is split in two steps:
//!
//! - [`Browser::prepare`] acts on pending flags (catalog polling, refresh,
//!   repagination). It runs at most once per frame, during the measurement
//!   pass.
//! - [`Browser::draw`] draws controls and rows from the prepared state and
//!   records user input as flags for the next `prepare`.
//!
//! [`Browser::render`] does both with the gating applied, and is what hosts
//! normally call every pass of every frame.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;
use std::time::{Duration, Instant};

use super::state::{RefreshStep, ViewState};
use super::view::{Projections, RenderOptions, RowView};
use crate::catalog::{CatalogResult, LoadCache};
use crate::config::BrowserConfig;
use crate::disclosure::{DisclosureKey, DisclosureRegistry};
use crate::paging::{self, PageWindow};
use crate::search::{self, SearchKeys};
use crate::ui::{FieldEvent, Frontend, RenderPhase, TextStyle, horizontal, vertical};

/// Id of the query field
pub const SEARCH_FIELD_ID: &str = "searchText";
/// Id of the page size field
pub const LIMIT_FIELD_ID: &str = "searchLimit";
/// Label of the show-all toggle
pub const SHOW_ALL_LABEL: &str = "Show All";
/// Label of the submit button
pub const SEARCH_BUTTON_LABEL: &str = "Search";
/// Label of the previous-page button
pub const PREVIOUS_PAGE_LABEL: &str = "-";
/// Label of the next-page button
pub const NEXT_PAGE_LABEL: &str = "+";

const SEARCH_FIELD_WIDTH: f32 = 320.0;
const LIMIT_FIELD_WIDTH: f32 = 175.0;
const CONTROL_GAP: f32 = 25.0;
const TITLE_GAP: f32 = 10.0;
const WIDE_LAYOUT_WIDTH: f32 = 2000.0;

/// Searchable, pageable browser over items and their definitions
///
/// `I` is the caller's owned item type, `D` the catalog definition type an
/// item is an instance of. One `Browser` backs one browser widget and keeps
/// its state across frames.
#[derive(Debug)]
pub struct Browser<I, D> {
    state: ViewState,
    cache: LoadCache<D>,
    disclosures: DisclosureRegistry,
    search_as_you_type: bool,
    debounce: Duration,
    scope: Option<String>,
    prepared_frame: Option<u64>,
    owned: HashMap<D, usize>,
    owned_order: Vec<D>,
    filtered: Vec<D>,
    window: PageWindow,
    _item: std::marker::PhantomData<fn(&I)>,
}

impl<I, D> Browser<I, D>
where
    D: Clone + Eq + Hash,
{
    /// Create a browser from explicit configuration
    #[must_use]
    pub fn new(config: &BrowserConfig) -> Self {
        Self {
            state: ViewState::new(config.effective_search_limit()),
            cache: LoadCache::new(config.available_is_static),
            disclosures: DisclosureRegistry::new(),
            search_as_you_type: config.search_as_you_type,
            debounce: config.debounce(),
            scope: None,
            prepared_frame: None,
            owned: HashMap::new(),
            owned_order: Vec::new(),
            filtered: Vec::new(),
            window: PageWindow::default(),
            _item: std::marker::PhantomData,
        }
    }

    /// Prepare if due, then draw
    ///
    /// Call this on every pass of every frame. `scope` names the logical
    /// list being shown; when it differs from the previous call, all
    /// expand/collapse state is forgotten.
    #[allow(clippy::too_many_arguments)]
    pub fn render<F, L, V>(
        &mut self,
        ui: &mut F,
        scope: &str,
        items: &[I],
        mut load_catalog: L,
        keys: &Projections<'_, I, D>,
        view: &mut V,
        options: &RenderOptions,
    ) where
        F: Frontend + ?Sized,
        L: FnMut() -> CatalogResult<D>,
        V: RowView<I, D, F> + ?Sized,
    {
        if ui.phase() == RenderPhase::Measure && self.prepared_frame != Some(ui.frame()) {
            self.prepared_frame = Some(ui.frame());
            self.prepare(ui.now(), items, &mut load_catalog, keys, options);
        }
        self.draw(ui, scope, items, keys, view, options);
    }

    /// Act on pending flags
    ///
    /// Polls an outstanding catalog load, then refreshes, repaginates or
    /// does nothing depending on [`ViewState::next_step`]. Returns the step
    /// taken. Calling this more than once per frame is harmless but wasted
    /// work; [`Browser::render`] guarantees once.
    pub fn prepare<L>(
        &mut self,
        now: Instant,
        items: &[I],
        load_catalog: &mut L,
        keys: &Projections<'_, I, D>,
        options: &RenderOptions,
    ) -> RefreshStep
    where
        L: FnMut() -> CatalogResult<D> + ?Sized,
    {
        if !options.search {
            self.sync_parent_query(options.parent_query.as_deref().unwrap_or_default());
        }
        if self.cache.poll(load_catalog) {
            self.state.needs_refresh = true;
        }

        let step = self.state.next_step(now, self.cache.is_loading());
        match step {
            RefreshStep::Refreshing => self.refresh(items, load_catalog, keys, options.search),
            RefreshStep::RepaginateOnly => self.repaginate(),
            RefreshStep::Idle | RefreshStep::DebounceWait | RefreshStep::Loading => {}
        }
        step
    }

    /// Draw controls and the current page of rows
    ///
    /// Input is recorded as flags only; nothing is recomputed here. When
    /// `scope` differs from the previous call, all expand/collapse state is
    /// forgotten first.
    pub fn draw<F, V>(
        &mut self,
        ui: &mut F,
        scope: &str,
        items: &[I],
        keys: &Projections<'_, I, D>,
        view: &mut V,
        options: &RenderOptions,
    ) where
        F: Frontend + ?Sized,
        V: RowView<I, D, F> + ?Sized,
    {
        self.enter_scope(scope);
        if options.search || self.state.is_paged() {
            if options.search {
                self.draw_search_controls(ui, options);
            }
            self.draw_match_controls(ui, options);
        }
        if options.show_divider {
            ui.divider(options.indent);
        }
        if view.has_header() {
            horizontal(ui, |ui| {
                ui.space(options.indent);
                view.header(ui);
            });
        }
        self.draw_rows(ui, scope, items, keys, view, options);
    }

    /// Force a refresh on the next cycle, e.g. after the caller's data changed
    pub const fn invalidate(&mut self) {
        self.state.needs_refresh = true;
    }

    /// Hook for hosts that hide and re-show the browser
    pub const fn on_shown(&mut self) {
        self.state.needs_refresh = true;
    }

    /// Drop a retained catalog snapshot and refresh
    pub fn invalidate_catalog(&mut self) {
        self.cache.invalidate();
        self.state.schedule_refresh();
    }

    /// Definitions on the current page
    #[must_use]
    pub fn visible(&self) -> &[D] {
        self.filtered.get(self.window.range()).unwrap_or_default()
    }

    /// All matching definitions in sort order
    #[must_use]
    pub fn filtered(&self) -> &[D] {
        &self.filtered
    }

    /// Number of matches from the last refresh
    #[must_use]
    pub const fn match_count(&self) -> usize {
        self.state.match_count
    }

    /// Number of pages from the last pagination
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.state.page_count
    }

    /// Current 1-based page
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.state.current_page
    }

    /// Jump to `page`; it is clamped on the next cycle
    pub const fn go_to_page(&mut self, page: usize) {
        self.state.current_page = page;
        self.state.schedule_pagination();
    }

    /// Current query
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.state.search_text
    }

    /// Replace the query and refresh on the next cycle
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.search_text = text.into();
        self.state.schedule_refresh();
    }

    /// Whether catalog definitions are included
    #[must_use]
    pub const fn show_all(&self) -> bool {
        self.state.show_all
    }

    /// Include or exclude catalog definitions the caller does not own
    pub fn set_show_all(&mut self, show_all: bool) {
        if self.state.show_all == show_all {
            return;
        }
        self.state.show_all = show_all;
        if show_all {
            self.cache.begin_loading();
        } else {
            self.cache.cancel();
        }
        self.state.schedule_refresh();
    }

    /// Page size; 0 means unlimited
    #[must_use]
    pub const fn search_limit(&self) -> usize {
        self.state.search_limit
    }

    /// Change the page size, capped at [`paging::MAX_SEARCH_LIMIT`]
    pub fn set_search_limit(&mut self, limit: usize) {
        self.state.search_limit = limit.min(paging::MAX_SEARCH_LIMIT);
        self.state.schedule_pagination();
    }

    /// True while the catalog loader has not produced anything yet
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.cache.is_loading()
    }

    /// Whether the row titled `title` in `scope` is expanded
    #[must_use]
    pub fn is_expanded(&self, scope: &str, title: &str) -> bool {
        self.disclosures.get(&DisclosureKey::new(scope, title))
    }

    /// Read-only view of the search and paging state
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// The caller's item for `def`, if the last refresh saw one
    pub fn owned_item<'i>(&self, items: &'i [I], def: &D, keys: &Projections<'_, I, D>) -> Option<&'i I> {
        lookup_owned(&self.owned, items, def, keys)
    }

    fn enter_scope(&mut self, scope: &str) {
        if self.scope.as_deref() == Some(scope) {
            return;
        }
        tracing::trace!(from = ?self.scope, to = scope, "browser scope changed");
        self.scope = Some(scope.to_string());
        self.disclosures.clear();
    }

    fn sync_parent_query(&mut self, query: &str) {
        if self.state.search_text != query {
            self.state.search_text = query.to_string();
            self.state.schedule_refresh();
        }
    }

    fn refresh<L>(&mut self, items: &[I], load_catalog: &mut L, keys: &Projections<'_, I, D>, search: bool)
    where
        L: FnMut() -> CatalogResult<D> + ?Sized,
    {
        self.rebuild_owned(items, keys);

        let catalog = if self.state.show_all {
            self.cache.catalog(load_catalog)
        } else {
            None
        };
        let candidates: &[D] = catalog.as_deref().unwrap_or(&self.owned_order);

        let title = |def: &D| keys.title_of(def);
        let search_key = |def: &D| keys.search_key_of(def);
        let sort_key = |def: &D| keys.sort_key_of(def);
        let kind = |def: &D| keys.kind_of(def);
        let search_keys = SearchKeys {
            title: &title,
            search_key: &search_key,
            sort_key: &sort_key,
            kind: &kind,
        };
        let results = search::run(&self.state.search_text, candidates, &search_keys, search);

        tracing::debug!(
            candidates = candidates.len(),
            owned = self.owned_order.len(),
            matches = results.match_count,
            show_all = self.state.show_all,
            "browser refreshed"
        );

        self.state.match_count = results.match_count;
        self.filtered = results.matches;
        self.state.needs_refresh = false;
        self.repaginate();
    }

    fn rebuild_owned(&mut self, items: &[I], keys: &Projections<'_, I, D>) {
        self.owned.clear();
        self.owned_order.clear();
        for (index, item) in items.iter().enumerate() {
            if let Entry::Vacant(slot) = self.owned.entry(keys.definition_of(item)) {
                self.owned_order.push(slot.key().clone());
                slot.insert(index);
            }
        }
    }

    fn repaginate(&mut self) {
        let window = paging::paginate(self.state.match_count, self.state.search_limit, self.state.current_page);
        self.state.current_page = window.page;
        self.state.page_count = window.page_count;
        self.state.pending_pagination = false;
        self.window = window;
    }

    fn draw_search_controls<F: Frontend + ?Sized>(&mut self, ui: &mut F, options: &RenderOptions) {
        horizontal(ui, |ui| {
            ui.space(options.indent);
            match ui.text_field(SEARCH_FIELD_ID, &mut self.state.search_text, SEARCH_FIELD_WIDTH) {
                FieldEvent::Changed if self.search_as_you_type => {
                    self.state.schedule_debounced(ui.now(), self.debounce);
                }
                FieldEvent::Committed => self.state.schedule_refresh(),
                FieldEvent::Changed | FieldEvent::Unchanged => {}
            }

            ui.space(CONTROL_GAP);
            ui.label("Limit", TextStyle::Caption, None);
            let mut limit = i64::try_from(self.state.search_limit).unwrap_or(i64::MAX);
            if ui.int_field(LIMIT_FIELD_ID, &mut limit, LIMIT_FIELD_WIDTH).is_touched() {
                self.state.schedule_pagination();
            }
            self.state.search_limit = paging::clamp_search_limit(limit);

            ui.space(CONTROL_GAP);
            let mut show_all = self.state.show_all;
            if ui.toggle(SHOW_ALL_LABEL, TextStyle::Emphasis, &mut show_all) {
                self.set_show_all(show_all);
            }
            ui.space(CONTROL_GAP);
        });
    }

    fn draw_match_controls<F: Frontend + ?Sized>(&mut self, ui: &mut F, options: &RenderOptions) {
        horizontal(ui, |ui| {
            if options.search {
                ui.space(options.indent);
                if ui.button(SEARCH_BUTTON_LABEL) {
                    self.state.schedule_refresh();
                }
            }
            ui.space(CONTROL_GAP);

            let state = &mut self.state;
            if state.match_count > 0 || !state.search_text.is_empty() {
                let mut readout = format!("Matches: {}", state.match_count);
                if state.is_paged() {
                    readout.push_str(&format!(" => {}", state.search_limit));
                }
                ui.label(&readout, TextStyle::Readout, None);
            }

            if state.is_paged() {
                ui.space(CONTROL_GAP);
                let page_label = format!("Page: {} / {}", state.current_page, state.page_count);
                ui.label(&page_label, TextStyle::Readout, None);
                if ui.button(PREVIOUS_PAGE_LABEL) {
                    state.current_page = paging::previous_page(state.current_page, state.page_count);
                    state.schedule_pagination();
                }
                if ui.button(NEXT_PAGE_LABEL) {
                    state.current_page = paging::next_page(state.current_page, state.page_count);
                    state.schedule_pagination();
                }
            }
        });
    }

    fn draw_rows<F, V>(
        &mut self,
        ui: &mut F,
        scope: &str,
        items: &[I],
        keys: &Projections<'_, I, D>,
        view: &mut V,
        options: &RenderOptions,
    ) where
        F: Frontend + ?Sized,
        V: RowView<I, D, F> + ?Sized,
    {
        let Some(page) = self.filtered.get(self.window.range()) else {
            return;
        };
        for def in page {
            if options.show_item_divider {
                ui.divider(options.indent);
            }
            let item = lookup_owned(&self.owned, items, def, keys);
            let title = keys.title_of(def);
            let expandable = view.has_children(item, def);
            let key = DisclosureKey::new(scope, title.as_str());
            let mut open = expandable && self.disclosures.get(&key);

            horizontal(ui, |ui| {
                ui.space(options.indent);
                let width = title_width(ui.available_width() - options.indent, options);
                let style = if item.is_some() { TextStyle::Owned } else { TextStyle::Plain };
                if expandable {
                    if ui.disclosure(&title, style, &mut open, width) {
                        self.disclosures.set(key, open);
                        self.state.schedule_refresh();
                    }
                } else {
                    ui.label(&title, style, Some(width));
                }
                ui.space(TITLE_GAP);
                view.row(ui, item, def);
            });
            vertical(ui, |ui| {
                view.detail(ui, item, def);
                if open {
                    view.children(ui, item, def);
                }
            });
        }
    }
}

impl<I, D> Default for Browser<I, D>
where
    D: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new(&BrowserConfig::default())
    }
}

fn lookup_owned<'i, I, D>(
    owned: &HashMap<D, usize>,
    items: &'i [I],
    def: &D,
    keys: &Projections<'_, I, D>,
) -> Option<&'i I>
where
    D: Eq + Hash,
{
    let index = *owned.get(def)?;
    items.get(index).filter(|item| keys.definition_of(item) == *def)
}

fn title_width(remaining: f32, options: &RenderOptions) -> f32 {
    let divisor = if remaining >= WIDE_LAYOUT_WIDTH { 3.5 } else { 4.0 };
    (remaining / divisor - 100.0)
        .max(options.title_min_width)
        .min(options.title_max_width)
}
