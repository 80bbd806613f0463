pub mod config;
pub mod render;
pub mod statutes;
pub mod types;

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Bold `text` when stdout is a terminal
pub(crate) fn emphasize(text: &str) -> String {
    if std::io::stdout().is_terminal() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}
