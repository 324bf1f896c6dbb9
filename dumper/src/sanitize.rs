//! Filesystem-safe tokens for dump file names.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref UNSAFE_CHARACTERS: Regex = Regex::new(r"[^A-Za-z0-9|]").unwrap();
}

/// Turns an arbitrary string (usually a URL) into a file name token.
///
/// Every `/` becomes `|`, then everything outside ASCII letters, digits and `|`
/// is dropped. The result is not length limited.
pub fn safe_filename<S: AsRef<str>>(filename: S) -> String {
    let piped = filename.as_ref().replace('/', "|");
    UNSAFE_CHARACTERS.replace_all(&piped, "").into_owned()
}
