use std::fmt::Display;
use std::io::{self, Write};

/// Build the greeting for `name`, without the trailing newline
pub fn greeting(name: impl Display) -> String {
    format!("Hey, {name}!")
}

/// Write `Hey, <name>!` and a newline to `out`.
///
/// ```
/// let mut out = Vec::new();
/// hey_calc::greet(&mut out, "").unwrap();
/// assert_eq!(out, b"Hey, !\n");
/// ```
pub fn greet(out: &mut impl Write, name: impl Display) -> io::Result<()> {
    writeln!(out, "Hey, {name}!")
}

/// Greet on standard output
pub fn greet_stdout(name: impl Display) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    greet(&mut lock, name)?;
    lock.flush()
}
