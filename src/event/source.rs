// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;
use std::fmt;

/// A display tag naming where an event comes from, rendered as `open + label + close`.
///
/// # Examples
///
/// ```
/// use eventforth::Source;
///
/// let weird = Source::new("WEIRD SOURCE", "<", ">");
/// assert_eq!(weird.to_string(), "<WEIRD SOURCE>");
/// assert_eq!(Source::EMPTY.to_string(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Source {
    label: Cow<'static, str>,
    open: Cow<'static, str>,
    close: Cow<'static, str>,
}

impl Source {
    /// The empty source: records carry no source at all.
    pub const EMPTY: Source = Source::from_static("", "", "");
    /// Marks debug messages.
    pub const DEBUG: Source = Source::from_static("DEBUG", "[", "]");
    /// Marks the application's entry point.
    pub const MAIN: Source = Source::from_static("MAIN", "[", "]");

    /// Create a new source.
    pub fn new(
        label: impl Into<Cow<'static, str>>,
        open: impl Into<Cow<'static, str>>,
        close: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            label: label.into(),
            open: open.into(),
            close: close.into(),
        }
    }

    /// Create a source enclosed in square brackets.
    pub fn bracketed(label: impl Into<Cow<'static, str>>) -> Self {
        Source::new(label, "[", "]")
    }

    const fn from_static(label: &'static str, open: &'static str, close: &'static str) -> Self {
        Self {
            label: Cow::Borrowed(label),
            open: Cow::Borrowed(open),
            close: Cow::Borrowed(close),
        }
    }

    /// The label without brackets.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The opening bracket.
    pub fn open(&self) -> &str {
        &self.open
    }

    /// The closing bracket.
    pub fn close(&self) -> &str {
        &self.close
    }

    /// Whether this is [`Source::EMPTY`].
    pub fn is_empty(&self) -> bool {
        *self == Source::EMPTY
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.open, self.label, self.close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        assert_eq!(Source::bracketed("MAIN"), Source::MAIN);
        assert_ne!(Source::new("MAIN", "<", ">"), Source::MAIN);
        assert!(Source::default().is_empty());
        assert!(!Source::new("", "[", "]").is_empty());
    }

    #[test]
    fn test_render() {
        assert_eq!(Source::DEBUG.to_string(), "[DEBUG]");
        assert_eq!(Source::new("db", "", ":").to_string(), "db:");
    }
}
