//! # Nestui - nested Elm-style units
//!
//! A small library for composing Elm-architecture units: a parent embeds a
//! child's state, message and render logic without either side knowing the
//! other's internals.
//!
//! ## Architecture Overview
//!
//! - **Unit** (`core::unit`): a state/render/update triple
//! - **Address** (`core::address`): where rendered views deliver messages
//! - **Embedding** (`core::embed`): tagged messages, forwarding addresses and
//!   dispatch-and-splice updates for one child, a `Vec` of children or a keyed
//!   sequence of children
//! - **Driver** (`driver`): owns the current state and feeds messages back into update
//!
//! ## Example Usage
//!
//! ```rust
//! use nestui::{
//!     core::Unit,
//!     demo::{
//!         app::{App, AppMsg},
//!         widget::WidgetMsg,
//!     },
//!     driver::Program,
//! };
//!
//! let mut program = Program::<App>::new().unwrap();
//!
//! // Press "+" on the embedded widget through the rendered view
//! program.view().press_label("+");
//! program.process_pending();
//! assert_eq!(program.state().widget_state.count, 1);
//!
//! // Or dispatch the tagged message directly
//! let state = App::update(AppMsg::Widget(WidgetMsg::Increase), program.into_state());
//! assert_eq!(state.widget_state.count, 2);
//! ```
//!
//! ## Modules
//!
//! - [`core`] - Unit contract, addresses, views and embeddings
//! - [`demo`] - Counter widget and the composites built from it
//! - [`driver`] - Program and console drivers
//! - [`infrastructure`] - CLI and configuration
//! - [`utils`] - Logging, panic handling and paths

pub mod core;
pub mod demo;
pub mod driver;
pub mod infrastructure;
pub mod utils;

pub use crate::core::{Address, Embed, EmbedKeyed, EmbedSeq, Unit, View};
pub use driver::Program;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
