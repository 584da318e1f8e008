use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::{
    core::{Address, ChildId, ChildSlot, EmbedKeyed, Keyed, Unit, View},
    demo::widget::{Widget, WidgetMsg, WidgetState},
};

/// Widgets with stable ids, each row carrying its own remove button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    pub widgets: Keyed<WidgetState>,
}

impl BoardState {
    pub fn with_counters(count: usize) -> Self {
        Self {
            widgets: WIDGETS.init(count),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
pub enum BoardMsg {
    Widget(ChildId, WidgetMsg),
    Insert,
    Remove(ChildId),
}

pub struct Board;

const WIDGETS: EmbedKeyed<BoardState, BoardMsg, Widget> = EmbedKeyed::new(
    "widgets",
    BoardMsg::Widget,
    |s| &s.widgets,
    |s| &mut s.widgets,
);

impl Unit for Board {
    type State = BoardState;
    type Msg = BoardMsg;

    fn initial_state() -> BoardState {
        BoardState::with_counters(0)
    }

    fn render(address: &Address<BoardMsg>, state: &BoardState) -> View {
        let rows = WIDGETS
            .render_all(address, state)
            .into_iter()
            .map(|(id, view)| {
                View::row([
                    View::text(id.to_string()),
                    view,
                    View::button("x", address, BoardMsg::Remove(id)),
                ])
            });

        View::column([View::button("insert", address, BoardMsg::Insert)].into_iter().chain(rows))
    }

    fn update(msg: BoardMsg, mut state: BoardState) -> BoardState {
        match msg {
            BoardMsg::Widget(id, sub) => WIDGETS.update(id, sub, state),
            BoardMsg::Insert => {
                let id = WIDGETS.states_mut(&mut state).push(Widget::initial_state());
                tracing::debug!(%id, "inserted widget");
                state
            }
            BoardMsg::Remove(id) => {
                if WIDGETS.states_mut(&mut state).remove(id).is_none() {
                    tracing::warn!(%id, "remove requested for unknown widget");
                }
                state
            }
        }
    }

    fn children(state: &BoardState) -> Vec<ChildSlot> {
        vec![WIDGETS.slot(state)]
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;

    use super::*;

    fn counts(state: &BoardState) -> Vec<i64> {
        state.widgets.iter().map(|(_, w)| w.count).collect()
    }

    #[test]
    fn test_update_by_id() {
        let state = BoardState::with_counters(3);
        let ids: Vec<_> = state.widgets.ids().collect();

        let state = Board::update(BoardMsg::Widget(ids[2], WidgetMsg::Increase), state);

        assert_eq!(counts(&state), vec![0, 0, 1]);
    }

    #[test]
    fn test_ids_survive_removal_of_earlier_rows() {
        let state = BoardState::with_counters(3);
        let ids: Vec<_> = state.widgets.ids().collect();

        let state = Board::update(BoardMsg::Remove(ids[0]), state);
        let state = Board::update(BoardMsg::Widget(ids[2], WidgetMsg::Decrease), state);

        assert_eq!(counts(&state), vec![0, -1]);
        assert_eq!(state.widgets.get(ids[2]), Some(&WidgetState { count: -1 }));
    }

    #[test]
    fn test_message_for_removed_widget_is_noop() {
        let sent = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&sent);
        let address = Address::new(move |msg: BoardMsg| sink.lock().unwrap().push(msg));

        let state = BoardState::with_counters(2);
        let view = Board::render(&address, &state);
        let first = state.widgets.ids().next().unwrap();

        // "+" of the first row is emitted, then the row is removed before processing
        assert!(view.press(2));
        let state = Board::update(BoardMsg::Remove(first), state);
        let in_flight = sent.lock().unwrap().remove(0);
        assert_eq!(in_flight, BoardMsg::Widget(first, WidgetMsg::Increase));

        let after = Board::update(in_flight, state.clone());
        assert_eq!(after, state);
    }

    #[test]
    fn test_insert_after_remove_gets_new_id() {
        let state = BoardState::with_counters(1);
        let old = state.widgets.last_id().unwrap();

        let state = Board::update(BoardMsg::Remove(old), state);
        let state = Board::update(BoardMsg::Insert, state);

        let new = state.widgets.last_id().unwrap();
        assert_ne!(old, new);
        // A stale message for the old id must not reach the new widget
        let state = Board::update(BoardMsg::Widget(old, WidgetMsg::Increase), state);
        assert_eq!(counts(&state), vec![0]);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let state = BoardState::with_counters(1);
        let stale = state.widgets.last_id().unwrap();
        let state = Board::update(BoardMsg::Remove(stale), state);

        let after = Board::update(BoardMsg::Remove(stale), state.clone());

        assert_eq!(after, state);
    }

    #[test]
    fn test_render_layout() {
        let address = Address::new(|_msg: BoardMsg| {});
        let view = Board::render(&address, &BoardState::with_counters(1));

        assert_eq!(view.to_string(), "[0] insert\n#0\n[1] -  0  [2] +\n[3] x\n");
    }
}
