//! The captured invocation arguments.

use std::ffi::OsString;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Ordered invocation arguments, program name first.
///
/// Contents are kept verbatim: no trimming, no case-folding, empty strings
/// allowed. The list never changes after capture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArgumentList(Vec<String>);

impl ArgumentList {
    /// Build a list from anything string-like.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(args.into_iter().map(Into::into).collect())
    }

    /// Capture the platform argument vector (usually `std::env::args_os()`).
    ///
    /// Valid UTF-8 is kept byte-for-byte; anything else is converted lossily
    /// so that a stray byte sequence never aborts the program.
    pub fn from_os_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        Self(
            args.into_iter()
                .map(|arg| {
                    arg.into_string()
                        .unwrap_or_else(|raw| raw.to_string_lossy().into_owned())
                })
                .collect(),
        )
    }

    /// The program name, if the list carries one.
    pub fn program(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for ArgumentList {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for ArgumentList {
    fn from(args: Vec<String>) -> Self {
        Self(args)
    }
}

impl FromIterator<String> for ArgumentList {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ArgumentList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
