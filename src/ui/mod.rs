//! UI abstraction layer
//!
//! This module provides a backend-agnostic interface for the immediate-mode
//! widgets the browser draws. The browser never talks to a widget toolkit
//! directly; hosts implement [`Frontend`] for theirs.
//!
//! # Core Types
//!
//! - **`Frontend`** - Widgets, layout groups, width, clock and render phase
//! - **`RenderPhase`** - Which pass of the frame is running
//! - **`TextStyle`** - Semantic text styling mapped by the backend
//! - **`FieldEvent`** - What the user did to an editable field
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Browser (search, paging, rows)     │
//! └────────────────┬────────────────────────┘
//!                  │ Uses trait
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │      Frontend trait                     │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ Host toolkit  │  │ HeadlessFrontend  │
//! │ (egui, imgui, │  │ (records ops,     │
//! │  game UI...)  │  │  scripted input)  │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Implementing a Frontend
//!
//! Only the required methods need a body; [`Frontend::phase`] defaults to
//! [`RenderPhase::Measure`] for hosts that run a single pass per frame.
//!
//! ## Printing a frame
//!
//! ```
//! use browsekit::ui::{console, Frontend, HeadlessFrontend, TextStyle};
//!
//! let mut ui = HeadlessFrontend::new();
//! ui.run_frame(|ui| ui.label("Matches: 3", TextStyle::Readout, None));
//! let text = console::transcript(ui.ops());
//! assert!(text.contains("Matches: 3"));
//! ```

mod headless;
mod traits;
mod types;

pub mod console;

pub use headless::{DrawOp, HeadlessFrontend};
pub use traits::{Frontend, horizontal, vertical};
pub use types::{FieldEvent, RenderPhase, TextStyle};
