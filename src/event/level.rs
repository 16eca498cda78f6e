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

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The severity of an event, in ascending order.
///
/// [`Level::Panic`] and [`Level::Fatal`] are escalation triggers: the
/// [`Processor`](crate::Processor) returns an [`Escalation`](crate::Escalation) for them.
#[repr(u8)]
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Informs the reader about any event in the application.
    #[default]
    Info = 1,
    /// Like info, but with higher priority.
    Note,
    /// Warns about a potentially dangerous situation.
    Warn,
    /// Reports that something bad has happened.
    Err,
    /// Reports that something really bad has happened.
    Crit,
    /// Requests a panic after the event is recorded.
    Panic,
    /// Requests a process exit after the event is recorded.
    Fatal,
}

impl Level {
    /// Return the string representation of the `Level`.
    ///
    /// This returns the same string as the `fmt::Display` implementation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Note => "NOTE",
            Level::Warn => "WARNING",
            Level::Err => "ERROR",
            Level::Crit => "CRITICAL",
            Level::Panic => "PANIC",
            Level::Fatal => "FATAL",
        }
    }

    /// Whether the level is severe enough to be a problem right now.
    ///
    /// # Examples
    ///
    /// ```
    /// use eventforth::Level;
    ///
    /// assert!(!Level::Warn.is_error());
    /// assert!(Level::Err.is_error());
    /// ```
    pub fn is_error(&self) -> bool {
        *self > Level::Warn
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;
    fn from_str(s: &str) -> Result<Level, Error> {
        for (names, level) in [
            (&["info"][..], Level::Info),
            (&["note"][..], Level::Note),
            (&["warn", "warning"][..], Level::Warn),
            (&["err", "error"][..], Level::Err),
            (&["crit", "critical"][..], Level::Crit),
            (&["panic"][..], Level::Panic),
            (&["fatal"][..], Level::Fatal),
        ] {
            if names.iter().any(|name| s.eq_ignore_ascii_case(name)) {
                return Ok(level);
            }
        }

        Err(Error::new(format!("malformed level: {s:?}")))
    }
}
