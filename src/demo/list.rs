use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::{
    core::{Address, ChildSlot, EmbedSeq, Unit, View},
    demo::widget::{Widget, WidgetMsg, WidgetState},
};

/// A growable list of widgets addressed by position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetListState {
    pub widgets: Vec<WidgetState>,
}

impl WidgetListState {
    /// Start with `count` fresh widgets
    pub fn with_counters(count: usize) -> Self {
        Self {
            widgets: WIDGETS.init(count),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
pub enum WidgetListMsg {
    Widget(usize, WidgetMsg),
    Insert,
    /// Drop the last widget
    Remove,
}

pub struct WidgetList;

const WIDGETS: EmbedSeq<WidgetListState, WidgetListMsg, Widget> = EmbedSeq::new(
    "widgets",
    WidgetListMsg::Widget,
    |s| &s.widgets,
    |s| &mut s.widgets,
);

impl Unit for WidgetList {
    type State = WidgetListState;
    type Msg = WidgetListMsg;

    fn initial_state() -> WidgetListState {
        WidgetListState::with_counters(0)
    }

    fn render(address: &Address<WidgetListMsg>, state: &WidgetListState) -> View {
        let rows = WIDGETS
            .render_all(address, state)
            .into_iter()
            .enumerate()
            .map(|(index, view)| View::labelled(index.to_string(), view));

        View::column(
            [View::row([
                View::button("insert", address, WidgetListMsg::Insert),
                View::button("remove", address, WidgetListMsg::Remove),
            ])]
            .into_iter()
            .chain(rows),
        )
    }

    fn update(msg: WidgetListMsg, mut state: WidgetListState) -> WidgetListState {
        match msg {
            WidgetListMsg::Widget(index, sub) => WIDGETS.update(index, sub, state),
            WidgetListMsg::Insert => {
                state.widgets.push(Widget::initial_state());
                state
            }
            WidgetListMsg::Remove => {
                state.widgets.pop();
                state
            }
        }
    }

    fn children(state: &WidgetListState) -> Vec<ChildSlot> {
        vec![WIDGETS.slot(state)]
    }
}
