//! Searchable, pageable browser
//!
//! This module implements the controller that sits between a data source
//! and the display layer.
//!
//! # Architecture
//!
//! - **`Browser`**: Owns view state, catalog cache and disclosure state;
//!   prepares results once per frame and draws them every pass
//! - **`ViewState`** / **`RefreshStep`**: Pending-work flags and the decision
//!   of what to do with them this cycle
//! - **`Projections`**: Item → definition → title / keys
//! - **`RowView`** / **`RowCallbacks`**: What to draw around each row
//! - **`RenderOptions`**: Per-call layout switches
//!
//! # Frame flow
//!
//! ```text
//! render(ui, scope, items, catalog, keys, view, options)
//!     ↓
//! measurement pass, first time this frame?
//!     ├─ no  → skip
//!     └─ yes → prepare()
//!                 ├─ poll catalog (if loading)
//!                 └─ next_step()
//!                      ├─ Refreshing     → own map, candidates, search, paginate
//!                      ├─ RepaginateOnly → paginate
//!                      └─ Idle / DebounceWait / Loading → nothing
//!     ↓
//! draw(): scope changed? ── yes → forget expanded rows
//!         ↓
//!       controls → divider → header → rows
//! ```
//!
//! # Example
//!
//! ```
//! use browsekit::browse::{Browser, Projections, RenderOptions};
//! use browsekit::config::BrowserConfig;
//! use browsekit::ui::HeadlessFrontend;
//!
//! #[derive(Clone, PartialEq, Eq, Hash)]
//! struct Spell { name: String }
//! struct Known { spell: Spell }
//!
//! let known = vec![Known { spell: Spell { name: "Bless".into() } }];
//! let keys = Projections::new(|k: &Known| k.spell.clone(), |s: &Spell| s.name.clone());
//! let mut browser = Browser::new(&BrowserConfig::default());
//! let mut ui = HeadlessFrontend::new();
//!
//! ui.run_frame(|ui| {
//!     browser.render(ui, "spellbook", &known, || Ok(Vec::new()), &keys, &mut (), &RenderOptions::default());
//! });
//! assert!(ui.has_label("Bless"));
//! ```

mod controller;
mod state;
mod view;

pub use controller::{
    Browser, LIMIT_FIELD_ID, NEXT_PAGE_LABEL, PREVIOUS_PAGE_LABEL, SEARCH_BUTTON_LABEL,
    SEARCH_FIELD_ID, SHOW_ALL_LABEL,
};
pub use state::{RefreshStep, ViewState};
pub use view::{Projections, RenderOptions, RowCallbacks, RowView};
