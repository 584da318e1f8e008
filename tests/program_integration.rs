use pretty_assertions::assert_eq;

use nestui::{
    core::{ChildId, Unit},
    demo::{
        board::{Board, BoardMsg, BoardState},
        list::{WidgetList, WidgetListMsg, WidgetListState},
        pair::{Pair, PairMsg},
        widget::{WidgetMsg, WidgetState},
        Demo,
    },
    driver::{launch, Console, Program, ProgramStats, Session},
};

fn board_counts(state: &BoardState) -> Vec<(ChildId, i64)> {
    state.widgets.iter().map(|(id, w)| (id, w.count)).collect()
}

/// Driver loop: render -> press -> process -> re-render
#[test]
fn test_render_press_update_cycle() {
    let mut program = Program::<Pair>::new().unwrap();

    for _ in 0..3 {
        // top "+"
        assert!(program.view().press(1));
        assert_eq!(program.process_pending(), 1);
    }
    assert!(program.view().press(2));
    program.process_pending();

    assert_eq!(program.state().top, WidgetState { count: 3 });
    assert_eq!(program.state().bottom, WidgetState { count: -1 });
    assert_eq!(
        program.stats(),
        ProgramStats {
            processed_messages: 4,
            pending_messages: 0
        }
    );

    program.dispatch(PairMsg::Reset);
    assert_eq!(program.state(), &Pair::initial_state());
}

#[test]
fn test_messages_are_applied_in_arrival_order() {
    let mut program = Program::<WidgetList>::new().unwrap();
    let address = program.address();

    address.send(WidgetListMsg::Insert);
    address.send(WidgetListMsg::Widget(0, WidgetMsg::Increase));
    address.send(WidgetListMsg::Insert);
    address.send(WidgetListMsg::Widget(1, WidgetMsg::Decrease));

    assert_eq!(program.process_pending(), 4);
    let counts: Vec<i64> = program.state().widgets.iter().map(|w| w.count).collect();
    assert_eq!(counts, vec![1, -1]);
}

#[test]
fn test_indexed_message_after_removal_is_dropped() {
    let mut program =
        Program::<WidgetList>::with_state(WidgetListState::with_counters(2)).unwrap();
    let view = program.view();

    // "+" of row 1 is pressed, but the row is removed before the message is processed
    assert!(view.press(5));
    program.dispatch(WidgetListMsg::Remove);
    assert_eq!(program.process_pending(), 1);

    let counts: Vec<i64> = program.state().widgets.iter().map(|w| w.count).collect();
    assert_eq!(counts, vec![0]);
}

#[test]
fn test_keyed_message_after_removal_is_dropped() {
    let mut program = Program::<Board>::with_state(BoardState::with_counters(3)).unwrap();
    let ids: Vec<ChildId> = program.state().widgets.ids().collect();
    let view = program.view();

    // Row layout: insert, then per row "-", "+", "x"; press "+" on the middle row
    assert!(view.press(5));
    program.dispatch(BoardMsg::Remove(ids[1]));
    assert_eq!(program.process_pending(), 1);

    assert_eq!(board_counts(program.state()), vec![(ids[0], 0), (ids[2], 0)]);
}

#[test]
fn test_keyed_message_reaches_moved_row() {
    let mut program = Program::<Board>::with_state(BoardState::with_counters(3)).unwrap();
    let ids: Vec<ChildId> = program.state().widgets.ids().collect();
    let view = program.view();

    // "+" on the last row, then the first row is removed so the last row shifts up
    assert!(view.press(8));
    program.dispatch(BoardMsg::Remove(ids[0]));
    program.process_pending();

    assert_eq!(board_counts(program.state()), vec![(ids[1], 0), (ids[2], 1)]);
}

#[test]
fn test_same_message_same_state_same_result() {
    let state = BoardState::with_counters(2);
    let id = state.widgets.last_id().unwrap();
    let msg = BoardMsg::Widget(id, WidgetMsg::Increase);

    assert_eq!(
        Board::update(msg.clone(), state.clone()),
        Board::update(msg, state)
    );
}

#[tokio::test]
async fn test_console_session_over_pair() {
    let mut output = Vec::new();
    let program = Program::<Pair>::new().unwrap();

    let state = Console::new(program, "1\n1\n3\nstate\nq\n".as_bytes(), &mut output)
        .run()
        .await
        .unwrap();

    assert_eq!(state.top, WidgetState { count: 2 });
    assert_eq!(state.bottom, WidgetState { count: 1 });
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("\"top\""));
}

#[tokio::test]
async fn test_launch_board_session() {
    let mut output = Vec::new();
    let session = Session {
        demo: Demo::Board,
        counters: 2,
        echo_state: true,
    };

    launch(session, "0\n2\nq\n".as_bytes(), &mut output)
        .await
        .unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("#2"));
    assert!(output.contains("\"count\": 1"));
}
