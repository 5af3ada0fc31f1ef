// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Line prompts on the terminal.
//!
//! The hidden prompt turns off echo and signal generation with rustix's safe termios
//! API, and turns them back on when its guard drops. With `ISIG` off, Ctrl+C can't kill
//! the process while echo is off. Instead the interrupt character ends the line (it is
//! made the `VEOL` character) and the read reports a cancellation, after which the guard
//! restores the terminal as usual.

use rustix::{fd::{AsFd, BorrowedFd},
             termios::{self, LocalModes, OptionalActions, SpecialCodeIndex, Termios}};
use std::io::{self, Read, Write};

/// Print `prompt` and read one line, without its line ending. End of input reads as an
/// empty line.
///
/// # Errors
///
/// Returns an error if stdout can't be flushed or stdin can't be read.
pub fn read_line(prompt: &str) -> io::Result<String> {
    print_prompt(prompt)?;
    read_line_from_stdin()
}

/// Like [`read_line`], but what is typed isn't shown. Returns `None` if the user presses
/// Ctrl+C. When stdin isn't a terminal there is no echo to turn off and this is the same
/// as [`read_line`].
///
/// # Errors
///
/// Returns an error if the terminal settings can't be changed, or stdin can't be read.
pub fn read_hidden_line(prompt: &str) -> io::Result<Option<String>> {
    let stdin = io::stdin();
    print_prompt(prompt)?;

    if !termios::isatty(&stdin) {
        return read_line_from_stdin().map(Some);
    }

    let guard = HiddenInputGuard::try_new(Tty(stdin.as_fd()), hide_input)?;
    let maybe_interrupt_char = interrupt_char(guard.original());
    let result = read_line_until_interrupt(&mut stdin.lock(), maybe_interrupt_char);
    drop(guard);

    // The newline typed by the user wasn't echoed.
    println!();

    result
}

fn print_prompt(prompt: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(prompt.as_bytes())?;
    stdout.flush()
}

fn read_line_from_stdin() -> io::Result<String> {
    let mut acc = String::new();
    io::stdin().read_line(&mut acc)?;
    Ok(trim_line_ending(&acc).to_string())
}

fn trim_line_ending(line: &str) -> &str { line.trim_end_matches(['\r', '\n']) }

/// Read up to and including a newline, or to end of input. Returns `None` as soon as a
/// chunk holds `maybe_interrupt_char`. A canonical mode terminal hands over at most one
/// line per read, ending at a newline or the `VEOL` character.
fn read_line_until_interrupt(
    reader: &mut impl Read,
    maybe_interrupt_char: Option<u8>,
) -> io::Result<Option<String>> {
    let mut acc = Vec::new();
    let mut buffer = [0_u8; 1024];

    loop {
        let chunk = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(count) => &buffer[..count],
            Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
            Err(error) => return Err(error),
        };

        if maybe_interrupt_char.is_some_and(|it| chunk.contains(&it)) {
            return Ok(None);
        }

        acc.extend_from_slice(chunk);
        if chunk.ends_with(b"\n") {
            break;
        }
    }

    let line = String::from_utf8(acc)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;
    Ok(Some(trim_line_ending(&line).to_string()))
}

/// The terminal's interrupt character (usually Ctrl+C), unless it is disabled.
fn interrupt_char(settings: &Termios) -> Option<u8> {
    let it = settings.special_codes[SpecialCodeIndex::VINTR];
    (it != 0).then_some(it)
}

fn hide_input(settings: &mut Termios) {
    hide_local_modes(&mut settings.local_modes);
    if let Some(it) = interrupt_char(settings) {
        settings.special_codes[SpecialCodeIndex::VEOL] = it;
    }
}

fn hide_local_modes(local_modes: &mut LocalModes) {
    local_modes.remove(LocalModes::ECHO | LocalModes::ISIG);
}

/// Line settings of a terminal that can be read and replaced.
trait LineSettings {
    type Settings: Clone;

    fn get(&self) -> io::Result<Self::Settings>;

    fn set(&self, settings: &Self::Settings) -> io::Result<()>;
}

struct Tty<'fd>(BorrowedFd<'fd>);

impl LineSettings for Tty<'_> {
    type Settings = Termios;

    fn get(&self) -> io::Result<Termios> { Ok(termios::tcgetattr(self.0)?) }

    fn set(&self, settings: &Termios) -> io::Result<()> {
        Ok(termios::tcsetattr(self.0, OptionalActions::Now, settings)?)
    }
}

/// Input is hidden for as long as this lives.
struct HiddenInputGuard<T: LineSettings> {
    terminal: T,
    original: T::Settings,
}

impl<T: LineSettings> HiddenInputGuard<T> {
    fn try_new(terminal: T, hide: impl FnOnce(&mut T::Settings)) -> io::Result<Self> {
        let original = terminal.get()?;

        let mut hidden = original.clone();
        hide(&mut hidden);
        terminal.set(&hidden)?;

        Ok(Self { terminal, original })
    }

    fn original(&self) -> &T::Settings { &self.original }
}

impl<T: LineSettings> Drop for HiddenInputGuard<T> {
    fn drop(&mut self) {
        if let Err(error) = self.terminal.set(&self.original) {
            // % is Display, ? is Debug.
            tracing::warn!(message = "⚠️ Could not turn terminal echo back on", error = %error);
        }
    }
}
