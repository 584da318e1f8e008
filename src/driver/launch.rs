use color_eyre::eyre::ensure;
use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::{
    core::Unit,
    demo::{
        app::App,
        board::{Board, BoardState},
        list::{WidgetList, WidgetListState},
        pair::Pair,
        widget::Widget,
        Demo,
    },
    driver::{console::Console, program::Program},
    infrastructure::config::MAX_COUNTERS,
    Result,
};

/// Options for one console session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub demo: Demo,
    pub counters: usize,
    pub echo_state: bool,
}

/// Drive the selected demo over `input`/`output` until the user quits
pub async fn launch<R, W>(session: Session, input: R, output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    ensure!(
        session.counters <= MAX_COUNTERS,
        "counters must be at most {MAX_COUNTERS}, got {}",
        session.counters
    );
    tracing::info!(?session, "launching demo");
    match session.demo {
        Demo::Counter => drive(Program::<Widget>::new()?, session, input, output).await,
        Demo::App => drive(Program::<App>::new()?, session, input, output).await,
        Demo::Pair => drive(Program::<Pair>::new()?, session, input, output).await,
        Demo::List => {
            let state = WidgetListState::with_counters(session.counters);
            drive(Program::<WidgetList>::with_state(state)?, session, input, output).await
        }
        Demo::Board => {
            let state = BoardState::with_counters(session.counters);
            drive(Program::<Board>::with_state(state)?, session, input, output).await
        }
    }
}

async fn drive<U, R, W>(program: Program<U>, session: Session, input: R, output: W) -> Result<()>
where
    U: Unit,
    U::State: Serialize,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let state = Console::new(program, input, output)
        .echo_state(session.echo_state)
        .run()
        .await?;
    tracing::info!(?state, "final state");
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    async fn transcript(demo: Demo, counters: usize, script: &str) -> String {
        let mut output = Vec::new();
        let session = Session {
            demo,
            counters,
            echo_state: false,
        };
        launch(session, script.as_bytes(), &mut output).await.unwrap();
        String::from_utf8(output).unwrap()
    }

    #[rstest]
    #[case(Demo::Counter, "[0] -  0  [1] +")]
    #[case(Demo::App, "App")]
    #[case(Demo::Pair, "[4] reset")]
    #[case(Demo::List, "[0] insert  [1] remove")]
    #[case(Demo::Board, "[0] insert")]
    #[tokio::test]
    async fn test_each_demo_renders(#[case] demo: Demo, #[case] expected: &str) {
        let output = transcript(demo, 1, "q\n").await;

        assert!(output.contains(expected), "{output}");
    }

    #[tokio::test]
    async fn test_rejects_too_many_counters() {
        let session = Session {
            demo: Demo::Board,
            counters: MAX_COUNTERS + 1,
            echo_state: false,
        };

        let result = launch(session, "q\n".as_bytes(), Vec::new()).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_list_starts_with_configured_counters() {
        let output = transcript(Demo::List, 3, "q\n").await;

        assert!(output.contains("[7] +"));
        assert!(!output.contains("[8]"));
    }

    #[tokio::test]
    async fn test_board_insert_then_remove() {
        // insert -> rows #0 and #1; then press "x" of row #0 (button 3)
        let output = transcript(Demo::Board, 1, "0\n3\nq\n").await;

        let last_view = output.rsplit("> ").nth(1).unwrap_or_default();
        assert!(last_view.contains("#1"));
        assert!(!last_view.contains("#0"));
    }
}
