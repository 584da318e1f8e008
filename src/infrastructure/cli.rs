use clap::Parser;

use crate::{demo::Demo, driver::Session, infrastructure::config::Config, utils::version};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Demo to drive (defaults to the configured one)
    #[arg(short, long, value_enum, value_name = "DEMO")]
    pub demo: Option<Demo>,

    /// Initial number of widgets for the list and board demos
    #[arg(short, long, value_name = "N")]
    pub counters: Option<usize>,

    /// Print the state as JSON after every button press
    #[arg(short, long, overrides_with = "no_echo_state")]
    pub echo_state: bool,

    /// Do not print the state, even when the config enables it
    #[arg(long, overrides_with = "echo_state")]
    pub no_echo_state: bool,
}

impl Cli {
    /// `Some` when a flag was given; the last of `-e`/`--no-echo-state` wins
    pub fn echo_override(&self) -> Option<bool> {
        match (self.echo_state, self.no_echo_state) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    /// Session settings: flags given on the command line win over `config`
    pub fn session(&self, config: &Config) -> Session {
        Session {
            demo: self.demo.unwrap_or(config.demo),
            counters: self.counters.unwrap_or(config.counters),
            echo_state: self.echo_override().unwrap_or(config.echo_state),
        }
    }
}
