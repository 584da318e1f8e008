use tokio::sync::mpsc;

use crate::{
    core::{embed::splice, ensure_distinct_children, Address, Unit, View},
    Result,
};

/// Owning driver for a root unit
///
/// Holds the current state and the channel that every address rendered from it
/// delivers into. Messages are applied one at a time, to completion, in the
/// order they arrive.
pub struct Program<U: Unit> {
    state: U::State,
    msg_tx: mpsc::UnboundedSender<U::Msg>,
    msg_rx: mpsc::UnboundedReceiver<U::Msg>,
    processed: usize,
}

impl<U: Unit> Program<U> {
    /// Start from `U::initial_state()`
    pub fn new() -> Result<Self> {
        Self::with_state(U::initial_state())
    }

    /// Start from an explicit state
    pub fn with_state(state: U::State) -> Result<Self> {
        ensure_distinct_children::<U>(&state)?;
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();

        Ok(Self {
            state,
            msg_tx,
            msg_rx,
            processed: 0,
        })
    }

    /// Root address; messages sent through it wait until [`Program::process_pending`]
    pub fn address(&self) -> Address<U::Msg> {
        Address::from_sender(self.msg_tx.clone())
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &U::State {
        &self.state
    }

    pub fn into_state(self) -> U::State {
        self.state
    }

    /// Render the current state with a fresh root address
    pub fn view(&self) -> View {
        U::render(&self.address(), &self.state)
    }

    /// Apply a single message immediately
    pub fn dispatch(&mut self, msg: U::Msg) {
        tracing::debug!(?msg, "dispatching message");
        splice::<U>(&mut self.state, msg);
        self.processed += 1;
    }

    /// Apply every message delivered through rendered addresses so far
    pub fn process_pending(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch(msg);
            count += 1;
        }
        count
    }

    /// Throw away the current state and start over, dropping queued messages
    pub fn reset(&mut self) {
        while self.msg_rx.try_recv().is_ok() {}
        self.state = U::initial_state();
        tracing::info!("program reset");
    }

    /// Get runtime statistics
    pub fn stats(&self) -> ProgramStats {
        ProgramStats {
            processed_messages: self.processed,
            pending_messages: self.msg_rx.len(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramStats {
    pub processed_messages: usize,
    pub pending_messages: usize,
}
