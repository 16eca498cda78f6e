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

/// A tag used to decide which sinks receive an event.
///
/// Routing types are orthogonal to [`Level`](crate::Level): a critical event may be routed to any
/// type. A sink accepts a list of routing types and receives an event when one of them equals the
/// event's type, or when either side is [`RoutingType::ANY`].
///
/// # Examples
///
/// ```
/// use eventforth::RoutingType;
///
/// let requests = RoutingType::new("requests");
/// assert!(requests.matches(&RoutingType::ANY));
/// assert!(!requests.matches(&RoutingType::MAIN));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RoutingType(Cow<'static, str>);

impl RoutingType {
    /// The wildcard: an event of this type reaches every sink, and a sink accepting it receives
    /// every event.
    pub const ANY: RoutingType = RoutingType(Cow::Borrowed("Any"));
    /// The main event sequence of an application.
    pub const MAIN: RoutingType = RoutingType(Cow::Borrowed("Main"));
    /// Errors that should stay out of the main event sequence.
    pub const ERROR_FLOW: RoutingType = RoutingType(Cow::Borrowed("ErrorFlow"));
    /// Verbose events that only some sinks care about.
    pub const VERBOSE: RoutingType = RoutingType(Cow::Borrowed("Verbose"));
    /// Events meant for developers or QA.
    pub const DEBUG: RoutingType = RoutingType(Cow::Borrowed("Debug"));

    /// Create a custom routing type.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        RoutingType(name.into())
    }

    /// The name of this routing type.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the wildcard type.
    pub fn is_any(&self) -> bool {
        *self == RoutingType::ANY
    }

    /// Whether an event of type `self` should be written by a sink accepting `accepted`.
    pub fn matches(&self, accepted: &RoutingType) -> bool {
        self == accepted || accepted.is_any() || self.is_any()
    }
}

impl Default for RoutingType {
    fn default() -> Self {
        RoutingType::ANY
    }
}

impl fmt::Debug for RoutingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for RoutingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl From<&'static str> for RoutingType {
    fn from(name: &'static str) -> Self {
        RoutingType::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_matching() {
        let main = RoutingType::MAIN;
        assert!(main.matches(&RoutingType::MAIN));
        assert!(main.matches(&RoutingType::ANY));
        assert!(!main.matches(&RoutingType::ERROR_FLOW));
        assert!(RoutingType::ANY.matches(&RoutingType::ERROR_FLOW));
    }

    #[test]
    fn test_custom_type_equals_by_name() {
        assert_eq!(RoutingType::new("Main"), RoutingType::MAIN);
        assert_eq!(RoutingType::new(String::from("requests")), "requests".into());
        assert_eq!(RoutingType::default(), RoutingType::ANY);
    }
}
