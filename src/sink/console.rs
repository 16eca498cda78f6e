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

use std::io::Write;

use crate::Error;
use crate::event::Event;
use crate::event::RoutingType;
use crate::layout::TextLayout;
use crate::sink::Sink;

/// A sink that prints events to stdout.
///
/// Events carrying a [`DisplayFormat`](crate::DisplayFormat) other than `None` are colored when
/// the `colored` feature is enabled. Write failures are ignored.
///
/// # Examples
///
/// ```
/// use eventforth::RoutingType;
/// use eventforth::sink::Console;
///
/// let errors_only = Console::default().accept([RoutingType::ERROR_FLOW]);
/// ```
#[derive(Debug)]
pub struct Console {
    layout: TextLayout,
    accepted: Vec<RoutingType>,
}

impl Default for Console {
    fn default() -> Self {
        Self {
            layout: TextLayout::default(),
            accepted: vec![RoutingType::ANY],
        }
    }
}

impl Console {
    /// Print only the event text, without ID, time, level or source.
    pub fn pure_text() -> Self {
        Self {
            layout: TextLayout::default().pure_text(),
            ..Default::default()
        }
    }

    /// Set the routing types the sink accepts.
    ///
    /// Default to [`RoutingType::ANY`].
    pub fn accept(mut self, types: impl IntoIterator<Item = RoutingType>) -> Self {
        self.accepted = types.into_iter().collect();
        self
    }

    /// The line printed for `event`, before coloring.
    fn render(&self, event: &Event, time_layout: &str) -> String {
        match self.layout.format(event, time_layout) {
            Ok(line) => line,
            // a malformed time layout still prints the text
            Err(_) => format!("{}\n", event.text()),
        }
    }

    #[cfg(feature = "colored")]
    fn paint(&self, event: &Event, line: String) -> String {
        if event.format().is_none() {
            return line;
        }
        crate::color::colorize(event.format(), &line).to_string()
    }

    #[cfg(not(feature = "colored"))]
    fn paint(&self, _: &Event, line: String) -> String {
        line
    }
}

impl Sink for Console {
    fn write(&self, event: &Event, time_layout: &str) -> Result<(), Error> {
        let line = self.paint(event, self.render(event, time_layout));
        let _ = std::io::stdout().write_all(line.as_bytes());
        Ok(())
    }

    fn accepted_types(&self) -> Vec<RoutingType> {
        self.accepted.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DisplayFormat;

    #[test]
    fn test_console_never_fails() {
        let console = Console::default();
        let event = Event::info("to stdout").with_format(DisplayFormat::Red);
        assert!(console.write(&event, "%Y-%").is_ok());
        assert!(Console::pure_text().write(&event, "%Y").is_ok());
    }

    #[test]
    fn test_console_render_falls_back_to_text() {
        let console = Console::default();
        let event = Event::info("kept");
        assert_eq!(console.render(&event, "%Y-%"), "kept\n");
        assert!(console.render(&event, "%Y").ends_with("\tINFO\tkept\n"));
    }

    #[test]
    fn test_console_types() {
        assert_eq!(Console::default().accepted_types(), vec![RoutingType::ANY]);
        let console = Console::pure_text().accept([RoutingType::ERROR_FLOW]);
        assert_eq!(console.accepted_types(), vec![RoutingType::ERROR_FLOW]);
    }
}
