//! Terminal mesh viewer (default binary).
//!
//! Renders a spinning OBJ mesh as shaded glyphs. crossterm drives input
//! and the alternate screen; every frame is encoded into one buffer and
//! flushed in a single write.

mod app;
mod clock;

use anyhow::{bail, Result};

use rastty::term::TerminalSession;

use crate::app::App;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        bail!("invalid number of arguments: expected exactly one mesh path");
    }

    // Scene setup happens before raw mode so load errors print normally.
    let mut app = App::new(&args[1])?;

    let mut term = TerminalSession::new();
    term.enter()?;

    let result = app.run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}
