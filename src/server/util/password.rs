//! The single place where a submitted password becomes a stored column value.
//!
//! The `user.password` column currently holds the submitted secret unchanged, which
//! is how existing rows were written. Introducing hashing means changing `into_stored`
//! here. Nothing else in the crate reads or writes the column.

use std::fmt;

/// A password received from a client, pending storage.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Wraps the secret submitted in a request.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Value written to the `user.password` column.
    pub fn into_stored(self) -> String {
        self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}
