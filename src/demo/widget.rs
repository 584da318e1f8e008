use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::core::{Address, ChildSlot, Unit, View};

/// Counter state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WidgetState {
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
pub enum WidgetMsg {
    Increase,
    Decrease,
}

/// The leaf counter every demo composes
pub struct Widget;

impl Unit for Widget {
    type State = WidgetState;
    type Msg = WidgetMsg;

    fn initial_state() -> WidgetState {
        WidgetState { count: 0 }
    }

    fn render(address: &Address<WidgetMsg>, state: &WidgetState) -> View {
        View::row([
            View::button("-", address, WidgetMsg::Decrease),
            View::text(state.count.to_string()),
            View::button("+", address, WidgetMsg::Increase),
        ])
    }

    fn update(msg: WidgetMsg, state: WidgetState) -> WidgetState {
        match msg {
            WidgetMsg::Increase => WidgetState {
                count: state.count.saturating_add(1),
            },
            WidgetMsg::Decrease => WidgetState {
                count: state.count.saturating_sub(1),
            },
        }
    }

    fn children(_state: &WidgetState) -> Vec<ChildSlot> {
        Vec::new()
    }
}
