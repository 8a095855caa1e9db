//! Output formatting helpers.
//!
//! Data goes to stdout as JSON; status lines and hints go to stderr so the
//! output can be piped.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Print a success message.
pub fn success(msg: &str) {
    eprintln!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a dimmed hint.
pub fn hint(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as JSON, pretty or compact.
pub fn json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

/// Print each item on its own line (or as a pretty array).
pub fn json_lines<T: Serialize>(items: &[T], pretty: bool) -> Result<()> {
    if pretty {
        return json(items, true);
    }
    for item in items {
        json(item, false)?;
    }
    Ok(())
}
