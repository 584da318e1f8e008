use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::{
    core::{Address, ChildSlot, Embed, Unit, View},
    demo::widget::{Widget, WidgetMsg, WidgetState},
};

/// Two widgets of the same type in distinct fields, plus a reset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairState {
    pub top: WidgetState,
    pub bottom: WidgetState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
pub enum PairMsg {
    Top(WidgetMsg),
    Bottom(WidgetMsg),
    Reset,
}

pub struct Pair;

const TOP: Embed<PairState, PairMsg, Widget> =
    Embed::new("top", PairMsg::Top, |s| &s.top, |s| &mut s.top);
const BOTTOM: Embed<PairState, PairMsg, Widget> =
    Embed::new("bottom", PairMsg::Bottom, |s| &s.bottom, |s| &mut s.bottom);

impl Unit for Pair {
    type State = PairState;
    type Msg = PairMsg;

    fn initial_state() -> PairState {
        PairState {
            top: TOP.init(),
            bottom: BOTTOM.init(),
        }
    }

    fn render(address: &Address<PairMsg>, state: &PairState) -> View {
        View::column([
            View::labelled("top", TOP.render(address, state)),
            View::labelled("bottom", BOTTOM.render(address, state)),
            View::button("reset", address, PairMsg::Reset),
        ])
    }

    fn update(msg: PairMsg, state: PairState) -> PairState {
        match msg {
            PairMsg::Top(sub) => TOP.update(sub, state),
            PairMsg::Bottom(sub) => BOTTOM.update(sub, state),
            PairMsg::Reset => Self::initial_state(),
        }
    }

    fn children(state: &PairState) -> Vec<ChildSlot> {
        vec![TOP.slot(state), BOTTOM.slot(state)]
    }
}
