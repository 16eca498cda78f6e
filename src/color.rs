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

//! Color utilities.

use colored::Color;
use colored::ColoredString;
use colored::Colorize;

use crate::DisplayFormat;

/// The terminal color of a display format, and whether it applies to the background.
///
/// Returns `None` for [`DisplayFormat::None`].
pub fn format_color(format: DisplayFormat) -> Option<(Color, bool)> {
    let color = match format {
        DisplayFormat::None => return None,
        DisplayFormat::Red | DisplayFormat::BgRed => Color::Red,
        DisplayFormat::Green | DisplayFormat::BgGreen => Color::Green,
        DisplayFormat::Yellow | DisplayFormat::BgYellow => Color::Yellow,
        DisplayFormat::Blue | DisplayFormat::BgBlue => Color::Blue,
        DisplayFormat::Magenta | DisplayFormat::BgMagenta => Color::Magenta,
        DisplayFormat::Cyan | DisplayFormat::BgCyan => Color::Cyan,
        DisplayFormat::Gray => Color::BrightBlack,
        DisplayFormat::White | DisplayFormat::BgWhite => Color::White,
        DisplayFormat::BgBlack => Color::Black,
    };
    Some((color, format.is_background()))
}

/// Wrap `text` in the escape sequences of `format`.
pub fn colorize(format: DisplayFormat, text: &str) -> ColoredString {
    match format_color(format) {
        None => ColoredString::from(text),
        Some((color, false)) => text.color(color),
        Some((color, true)) => text.on_color(color),
    }
}
