//! Final "press any key" pause.

use std::io::{self, BufRead, Write};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal;
use tracing::debug;

/// Print the prompt and block until a key is pressed.
///
/// Falls back to waiting for Enter when the terminal cannot be put into raw
/// mode (e.g. stdin is not a TTY).
pub fn wait_for_key() {
    println!("Press any key to continue");
    io::stdout().flush().ok();

    if let Err(e) = read_key() {
        debug!("Raw key read unavailable ({}), waiting for a line", e);
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).ok();
    }
}

fn read_key() -> io::Result<()> {
    terminal::enable_raw_mode()?;
    let result = loop {
        match event::read() {
            Ok(Event::Key(key_event)) if is_continue_key(&key_event) => break Ok(()),
            Ok(_) => continue,
            Err(e) => break Err(e),
        }
    };
    terminal::disable_raw_mode()?;
    result
}

/// Any key press counts; releases and repeats are ignored.
fn is_continue_key(event: &KeyEvent) -> bool {
    event.kind == KeyEventKind::Press
}
