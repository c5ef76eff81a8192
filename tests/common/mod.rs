#![allow(dead_code)]

use int_output::Error;

/// Runs a formatting closure against a fresh `String` sink and returns the
/// appended text.
pub fn sink<F>(f: F) -> String
where
    F: FnOnce(&mut String) -> Result<(), Error>,
{
    let mut out = String::new();
    f(&mut out).expect("formatting failed");
    out
}
