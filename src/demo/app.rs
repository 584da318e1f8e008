use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::{
    core::{Address, ChildSlot, Embed, Unit, View},
    demo::widget::{Widget, WidgetMsg, WidgetState},
};

/// A composite wrapping exactly one widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub widget_state: WidgetState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
pub enum AppMsg {
    Widget(WidgetMsg),
}

pub struct App;

const WIDGET: Embed<AppState, AppMsg, Widget> = Embed::new(
    "widget_state",
    AppMsg::Widget,
    |s| &s.widget_state,
    |s| &mut s.widget_state,
);

impl Unit for App {
    type State = AppState;
    type Msg = AppMsg;

    fn initial_state() -> AppState {
        AppState {
            widget_state: WIDGET.init(),
        }
    }

    fn render(address: &Address<AppMsg>, state: &AppState) -> View {
        View::column([View::text("App"), WIDGET.render(address, state)])
    }

    fn update(msg: AppMsg, state: AppState) -> AppState {
        match msg {
            AppMsg::Widget(sub) => WIDGET.update(sub, state),
        }
    }

    fn children(state: &AppState) -> Vec<ChildSlot> {
        vec![WIDGET.slot(state)]
    }
}
