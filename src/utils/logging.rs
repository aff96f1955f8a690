// file: src/utils/logging.rs
// description: Tracing subscriber initialization and console notice formatting

use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(verbose)
        .with_line_number(verbose)
        .compact()
        .with_ansi(colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Kind of line printed to the console once a command has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Done,
    File,
    /// Something the user has to fix (wrong page, logged out).
    Action,
    Failure,
}

impl Notice {
    pub fn render(self, msg: impl std::fmt::Display) -> String {
        let msg = msg.to_string();
        match self {
            Self::Done => format!("{} {}", "✓".green().bold(), msg.green()),
            Self::File => format!("  {} {}", "→".blue(), msg),
            Self::Action => format!("{} {}", "!".yellow().bold(), msg.yellow()),
            Self::Failure => format!("{} {}", "✗".red().bold(), msg.red()),
        }
    }
}

/// Spinner message prefixed with its position in the run.
pub fn format_step(step: usize, total: usize, msg: &str) -> String {
    format!("{} {}", format!("({}/{})", step, total).cyan(), msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_keep_message() {
        colored::control::set_override(false);
        assert_eq!(Notice::Done.render("exported 2 words"), "✓ exported 2 words");
        assert_eq!(Notice::File.render("out/words.csv"), "  → out/words.csv");
        assert_eq!(
            Notice::Action.render("please log in before exporting your word book"),
            "! please log in before exporting your word book"
        );
        assert_eq!(Notice::Failure.render(404), "✗ 404");
        assert_eq!(format_step(2, 4, "Fetching word list"), "(2/4) Fetching word list");
    }
}
