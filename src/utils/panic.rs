use std::{panic, process};

use color_eyre::{config::HookBuilder, eyre::Result};

/// Shown under every panic report
fn panic_section() -> String {
    format!(
        "The console session was interrupted by an update or render that panicked. \
         Units must not panic, so this is a bug in nestui or in the unit being driven. \
         Please report it at {}",
        env!("CARGO_PKG_REPOSITORY")
    )
}

/// Panics end the session: report them, log them, exit with a failure status
pub fn initialize_panic_handler() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section(panic_section())
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;

    panic::set_hook(Box::new(move |panic_info| {
        let report = panic_hook.panic_report(panic_info).to_string();
        tracing::error!(
            report = %strip_ansi_escapes::strip_str(&report),
            "console session interrupted by a panic"
        );

        #[cfg(not(debug_assertions))]
        {
            use human_panic::{handle_dump, print_msg, Metadata};

            let meta = Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
                .authors(env!("CARGO_PKG_AUTHORS").replace(':', ", "))
                .homepage(env!("CARGO_PKG_HOMEPAGE"));
            let dump = handle_dump(&meta, panic_info);
            if print_msg(dump, &meta).is_err() {
                eprintln!("nestui: could not print the crash summary");
            }
            eprintln!("{report}");
        }

        #[cfg(debug_assertions)]
        {
            better_panic::Settings::auto()
                .most_recent_first(false)
                .lineno_suffix(true)
                .verbosity(better_panic::Verbosity::Full)
                .create_panic_handler()(panic_info);
        }

        process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_section_describes_interrupted_session() {
        let section = panic_section();

        assert!(section.contains("console session was interrupted"));
        assert!(section.contains(env!("CARGO_PKG_REPOSITORY")));
    }
}
