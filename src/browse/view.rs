//! Caller-supplied pieces of a browser render call
//!
//! - [`Projections`] - how to get from an item to its definition, and from a
//!   definition to its title, search key, sort key and kind name
//! - [`RowView`] - the strategy that draws header, row extras, details and
//!   children; [`RowCallbacks`] builds one from closures
//! - [`RenderOptions`] - per-call layout switches

use crate::config::BrowserConfig;
use crate::ui::Frontend;

/// Projections from items and definitions to the strings the browser needs
///
/// Search and sort keys fall back to the title when not supplied. The kind
/// name falls back to the Rust type name of `D`.
pub struct Projections<'a, I, D> {
    definition: Box<dyn Fn(&I) -> D + 'a>,
    title: Box<dyn Fn(&D) -> String + 'a>,
    search_key: Option<Box<dyn Fn(&D) -> String + 'a>>,
    sort_key: Option<Box<dyn Fn(&D) -> String + 'a>>,
    kind: Option<Box<dyn Fn(&D) -> String + 'a>>,
}

impl<'a, I, D> Projections<'a, I, D> {
    /// Create projections from the two required functions
    pub fn new(definition: impl Fn(&I) -> D + 'a, title: impl Fn(&D) -> String + 'a) -> Self {
        Self {
            definition: Box::new(definition),
            title: Box::new(title),
            search_key: None,
            sort_key: None,
            kind: None,
        }
    }

    /// Match queries against this key instead of the title
    #[must_use]
    pub fn with_search_key(mut self, search_key: impl Fn(&D) -> String + 'a) -> Self {
        self.search_key = Some(Box::new(search_key));
        self
    }

    /// Order results by this key instead of the title
    #[must_use]
    pub fn with_sort_key(mut self, sort_key: impl Fn(&D) -> String + 'a) -> Self {
        self.sort_key = Some(Box::new(sort_key));
        self
    }

    /// Name the concrete kind of each definition for raw-query matching
    #[must_use]
    pub fn with_kind(mut self, kind: impl Fn(&D) -> String + 'a) -> Self {
        self.kind = Some(Box::new(kind));
        self
    }

    /// Definition an item is an instance of
    pub fn definition_of(&self, item: &I) -> D {
        (self.definition)(item)
    }

    /// Display title of a definition
    pub fn title_of(&self, def: &D) -> String {
        (self.title)(def)
    }

    /// Search key of a definition
    pub fn search_key_of(&self, def: &D) -> String {
        self.search_key.as_ref().map_or_else(|| self.title_of(def), |key| key(def))
    }

    /// Sort key of a definition
    pub fn sort_key_of(&self, def: &D) -> String {
        self.sort_key.as_ref().map_or_else(|| self.title_of(def), |key| key(def))
    }

    /// Kind name of a definition
    pub fn kind_of(&self, def: &D) -> String {
        self.kind
            .as_ref()
            .map_or_else(|| std::any::type_name::<D>().to_string(), |kind| kind(def))
    }
}

/// Strategy that draws everything around a row's title
///
/// Every method has a no-op default, so implementors only provide what
/// they draw. `item` is `None` for catalog definitions the caller does not
/// own.
pub trait RowView<I, D, F: Frontend + ?Sized> {
    /// True when [`RowView::header`] should be drawn
    fn has_header(&self) -> bool {
        false
    }

    /// Draw a header above the rows
    fn header(&mut self, _ui: &mut F) {}

    /// Draw inline controls after the title
    fn row(&mut self, _ui: &mut F, _item: Option<&I>, _def: &D) {}

    /// Draw details below the row
    fn detail(&mut self, _ui: &mut F, _item: Option<&I>, _def: &D) {}

    /// True when the row can be expanded to show children
    fn has_children(&self, _item: Option<&I>, _def: &D) -> bool {
        false
    }

    /// Draw the children of an expanded row
    fn children(&mut self, _ui: &mut F, _item: Option<&I>, _def: &D) {}
}

impl<I, D, F: Frontend + ?Sized> RowView<I, D, F> for () {}

type DrawRow<'a, I, D, F> = Box<dyn FnMut(&mut F, Option<&I>, &D) + 'a>;

/// [`RowView`] assembled from optional closures
pub struct RowCallbacks<'a, I, D, F: ?Sized> {
    header: Option<Box<dyn FnMut(&mut F) + 'a>>,
    row: Option<DrawRow<'a, I, D, F>>,
    detail: Option<DrawRow<'a, I, D, F>>,
    has_children: Option<Box<dyn Fn(Option<&I>, &D) -> bool + 'a>>,
    children: Option<DrawRow<'a, I, D, F>>,
}

impl<'a, I, D, F: ?Sized> RowCallbacks<'a, I, D, F> {
    /// Callbacks that draw nothing
    #[must_use]
    pub fn new() -> Self {
        Self {
            header: None,
            row: None,
            detail: None,
            has_children: None,
            children: None,
        }
    }

    /// Draw a header above the rows
    #[must_use]
    pub fn with_header(mut self, header: impl FnMut(&mut F) + 'a) -> Self {
        self.header = Some(Box::new(header));
        self
    }

    /// Draw inline controls after each title
    #[must_use]
    pub fn with_row(mut self, row: impl FnMut(&mut F, Option<&I>, &D) + 'a) -> Self {
        self.row = Some(Box::new(row));
        self
    }

    /// Draw details below each row
    #[must_use]
    pub fn with_detail(mut self, detail: impl FnMut(&mut F, Option<&I>, &D) + 'a) -> Self {
        self.detail = Some(Box::new(detail));
        self
    }

    /// Make rows for which `has_children` holds expandable, drawing
    /// `children` below them while open
    #[must_use]
    pub fn with_children(
        mut self,
        has_children: impl Fn(Option<&I>, &D) -> bool + 'a,
        children: impl FnMut(&mut F, Option<&I>, &D) + 'a,
    ) -> Self {
        self.has_children = Some(Box::new(has_children));
        self.children = Some(Box::new(children));
        self
    }
}

impl<I, D, F: ?Sized> Default for RowCallbacks<'_, I, D, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, D, F: Frontend + ?Sized> RowView<I, D, F> for RowCallbacks<'_, I, D, F> {
    fn has_header(&self) -> bool {
        self.header.is_some()
    }

    fn header(&mut self, ui: &mut F) {
        if let Some(header) = self.header.as_mut() {
            header(ui);
        }
    }

    fn row(&mut self, ui: &mut F, item: Option<&I>, def: &D) {
        if let Some(row) = self.row.as_mut() {
            row(ui, item, def);
        }
    }

    fn detail(&mut self, ui: &mut F, item: Option<&I>, def: &D) {
        if let Some(detail) = self.detail.as_mut() {
            detail(ui, item, def);
        }
    }

    fn has_children(&self, item: Option<&I>, def: &D) -> bool {
        self.has_children.as_ref().is_some_and(|has| has(item, def))
    }

    fn children(&mut self, ui: &mut F, item: Option<&I>, def: &D) {
        if let Some(children) = self.children.as_mut() {
            children(ui, item, def);
        }
    }
}

/// Layout switches for one render call
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Left indent of controls and rows
    pub indent: f32,
    /// Draw a divider between the controls and the rows
    pub show_divider: bool,
    /// Draw the search controls; when off, the query comes from `parent_query`
    pub search: bool,
    /// Lower bound of the title column width
    pub title_min_width: f32,
    /// Upper bound of the title column width
    pub title_max_width: f32,
    /// Query supplied by an enclosing view when `search` is off
    pub parent_query: Option<String>,
    /// Draw a divider before every row
    pub show_item_divider: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&BrowserConfig::default())
    }
}

impl RenderOptions {
    /// Options seeded from the layout defaults of `config`
    #[must_use]
    pub fn from_config(config: &BrowserConfig) -> Self {
        Self {
            indent: config.indent,
            show_divider: true,
            search: true,
            title_min_width: config.title_min_width,
            title_max_width: config.title_max_width,
            parent_query: None,
            show_item_divider: false,
        }
    }

    /// Set the indent
    #[must_use]
    pub const fn with_indent(mut self, indent: f32) -> Self {
        self.indent = indent;
        self
    }

    /// Turn the search controls on or off
    #[must_use]
    pub const fn with_search(mut self, search: bool) -> Self {
        self.search = search;
        self
    }

    /// Take the query from an enclosing view
    #[must_use]
    pub fn with_parent_query(mut self, query: impl Into<String>) -> Self {
        self.parent_query = Some(query.into());
        self
    }

    /// Show or hide the divider under the controls
    #[must_use]
    pub const fn with_divider(mut self, show: bool) -> Self {
        self.show_divider = show;
        self
    }

    /// Show or hide dividers between rows
    #[must_use]
    pub const fn with_item_dividers(mut self, show: bool) -> Self {
        self.show_item_divider = show;
        self
    }

    /// Bound the title column width
    #[must_use]
    pub const fn with_title_width(mut self, min: f32, max: f32) -> Self {
        self.title_min_width = min;
        self.title_max_width = max;
        self
    }
}
