//! Binary entry point that glues the JSON-backed dataset to the TUI.
//! Summarizing the bootstrapping pipeline here keeps the intent obvious when
//! revisiting the code: we load (or seed) the glossary, hydrate the initial
//! app state, and drive the Ratatui event loop until the user exits.
use glossary_browser::{load_or_seed_entries, run_app, App};

/// Load the dataset and launch the Ratatui event loop.
///
/// Returning a `Result` bubbles up fatal initialization problems (for
/// example an unreadable or malformed `data/glossary.json`) to the terminal
/// instead of crashing silently.
fn main() -> anyhow::Result<()> {
    let entries = load_or_seed_entries()?;

    let mut app = App::new(entries);
    run_app(&mut app)
}
