use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::{core::Unit, driver::program::Program, Result};

const HELP: &str = "\
commands:
  <n>     press button [n]
  state   print the current state as JSON
  reset   start over from the initial state
  help    show this help
  q       quit
";

/// One line of console input, parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Press(usize),
    State,
    Reset,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let command = match line {
            "state" => Command::State,
            "reset" => Command::Reset,
            "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            other => match other.parse::<usize>() {
                Ok(index) => Command::Press(index),
                Err(_) => Command::Unknown(other.to_string()),
            },
        };
        Some(command)
    }
}

/// Line-oriented driver: prints the view, reads a command, repeats
pub struct Console<U: Unit, R, W> {
    program: Program<U>,
    input: R,
    output: W,
    echo_state: bool,
}

impl<U, R, W> Console<U, R, W>
where
    U: Unit,
    U::State: Serialize,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(program: Program<U>, input: R, output: W) -> Self {
        Self {
            program,
            input,
            output,
            echo_state: false,
        }
    }

    /// Print the state as JSON after every processed button press
    pub fn echo_state(mut self, echo: bool) -> Self {
        self.echo_state = echo;
        self
    }

    pub fn program(&self) -> &Program<U> {
        &self.program
    }

    /// Run until `quit` or end of input; returns the final state
    pub async fn run(mut self) -> Result<U::State> {
        tracing::info!(unit = std::any::type_name::<U>(), "console started");
        let mut line = String::new();

        loop {
            let view = self.program.view();
            self.write(&format!("{view}> ")).await?;

            line.clear();
            if self.input.read_line(&mut line).await? == 0 {
                tracing::info!("end of input");
                break;
            }

            let Some(command) = Command::parse(&line) else {
                continue;
            };
            tracing::debug!(?command, "console command");

            match command {
                Command::Press(index) => {
                    if view.press(index) {
                        let processed = self.program.process_pending();
                        tracing::debug!(processed, "processed messages");
                        if self.echo_state {
                            self.write_state().await?;
                        }
                    } else {
                        self.write(&format!("no button [{index}]\n")).await?;
                    }
                }
                Command::State => self.write_state().await?,
                Command::Reset => self.program.reset(),
                Command::Help => self.write(HELP).await?,
                Command::Quit => break,
                Command::Unknown(input) => {
                    self.write(&format!("unknown command: {input} (try `help`)\n"))
                        .await?;
                }
            }
        }

        let stats = self.program.stats();
        tracing::info!(processed = stats.processed_messages, "console finished");
        self.output.flush().await?;

        Ok(self.program.into_state())
    }

    async fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }

    async fn write_state(&mut self) -> Result<()> {
        let json = serde_json::to_string_pretty(self.program.state())?;
        self.write(&format!("{json}\n")).await
    }
}
