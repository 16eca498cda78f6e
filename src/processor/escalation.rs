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

/// The process-level effect requested by a dispatched event.
///
/// The [`Processor`](crate::Processor) never panics or exits on its own. It records the event
/// with every matching sink and returns the escalation; the caller decides when to act on it,
/// usually right away with [`Escalation::escalate`].
///
/// # Examples
///
/// ```should_panic
/// use eventforth::Event;
/// use eventforth::Processor;
///
/// let processor = Processor::builder().build();
/// processor.log(Event::panic("unrecoverable")).escalate();
/// ```
#[must_use = "PANIC and FATAL events only escalate when `escalate` is called"]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Escalation {
    /// Nothing to do.
    #[default]
    None,
    /// A panic carrying the event text is requested.
    Panic(String),
    /// A process exit with a non-zero status is requested.
    Fatal,
}

impl Escalation {
    /// The exit status used for [`Escalation::Fatal`].
    pub const FATAL_EXIT_CODE: i32 = 2;

    /// Whether no escalation is requested.
    pub fn is_none(&self) -> bool {
        matches!(self, Escalation::None)
    }

    /// Perform the requested effect.
    ///
    /// # Panics
    ///
    /// Panics with the event text for [`Escalation::Panic`]. For [`Escalation::Fatal`] the
    /// process exits immediately, without draining other sinks.
    pub fn escalate(self) {
        match self {
            Escalation::None => {}
            Escalation::Panic(text) => panic!("{text}"),
            Escalation::Fatal => std::process::exit(Escalation::FATAL_EXIT_CODE),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Escalation::None => 0,
            Escalation::Panic(_) => 1,
            Escalation::Fatal => 2,
        }
    }

    /// The stronger of two escalations, keeping `self` on a tie.
    pub(crate) fn strongest(self, other: Escalation) -> Escalation {
        if other.rank() > self.rank() { other } else { self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_does_nothing() {
        Escalation::None.escalate();
        assert!(Escalation::default().is_none());
    }

    #[test]
    #[should_panic(expected = "disk on fire")]
    fn test_panic_carries_text() {
        Escalation::Panic("disk on fire".to_string()).escalate();
    }

    #[test]
    fn test_strongest_escalation_wins() {
        let batch = Escalation::None
            .strongest(Escalation::Panic("first".to_string()))
            .strongest(Escalation::Fatal)
            .strongest(Escalation::Panic("later".to_string()));
        assert_eq!(batch, Escalation::Fatal);

        let tie = Escalation::Panic("first".to_string())
            .strongest(Escalation::Panic("second".to_string()));
        assert_eq!(tie, Escalation::Panic("first".to_string()));
    }
}
