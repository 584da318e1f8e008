//! Demonstration units
//!
//! A leaf counter ([`widget::Widget`]) and the composites built from it, one
//! per composition shape:
//! - [`app::App`]: a single embedded child
//! - [`pair::Pair`]: two children of the same type in distinct fields
//! - [`list::WidgetList`]: a sequence addressed by position
//! - [`board::Board`]: a sequence addressed by stable id

pub mod app;
pub mod board;
pub mod list;
pub mod pair;
pub mod widget;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Which demo the console drives
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Demo {
    Counter,
    App,
    Pair,
    #[default]
    List,
    Board,
}
