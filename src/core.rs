//! Composition core
//!
//! This module contains the pieces every unit is built from:
//! - The unit contract (state, message, render, update)
//! - Addresses and forwarding addresses
//! - View descriptions produced by render
//! - Embeddings that wire a child unit into a parent

pub mod address;
pub mod embed;
pub mod keyed;
pub mod unit;
pub mod view;

pub use address::{Address, Trigger};
pub use embed::{Embed, EmbedKeyed, EmbedSeq};
pub use keyed::{ChildId, Keyed};
pub use unit::{ensure_distinct_children, ChildSlot, Unit};
pub use view::View;
