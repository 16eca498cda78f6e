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

use crate::event::Event;

/// A layout for messages shipped to an external error reporter.
///
/// Output format:
///
/// ```text
/// [my-app] ERROR [MAIN] Hello error!
/// ```
///
/// Events without a source are formatted as `my-app\tERROR\tHello error!\n` instead.
#[derive(Debug, Clone)]
pub struct ReportLayout {
    app_id: String,
}

impl ReportLayout {
    /// Create a layout tagging every message with `app_id`.
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
        }
    }

    /// Format an event into a report message.
    pub fn format(&self, event: &Event) -> String {
        if event.source().is_empty() {
            format!("{}\t{}\t{}\n", self.app_id, event.level(), event.text())
        } else {
            format!(
                "[{}] {} {} {}",
                self.app_id,
                event.level(),
                event.source(),
                event.text()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Source;

    #[test]
    fn test_report_with_source() {
        let event = Event::error("Hello error!").with_source(Source::MAIN);
        assert_eq!(
            ReportLayout::new("my-app").format(&event),
            "[my-app] ERROR [MAIN] Hello error!"
        );
    }

    #[test]
    fn test_report_without_source() {
        let event = Event::warning("disk");
        assert_eq!(
            ReportLayout::new("my-app").format(&event),
            "my-app\tWARNING\tdisk\n"
        );
    }
}
