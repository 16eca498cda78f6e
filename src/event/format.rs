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

/// A presentation hint for sinks that support it.
///
/// Only the [`Console`](crate::sink::Console) sink interprets formats; file and external sinks
/// ignore them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DisplayFormat {
    /// The sink's default presentation.
    #[default]
    None,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
    White,
    BgBlack,
    BgRed,
    BgGreen,
    BgYellow,
    BgBlue,
    BgMagenta,
    BgCyan,
    BgWhite,
}

impl DisplayFormat {
    /// Whether this is [`DisplayFormat::None`].
    pub fn is_none(&self) -> bool {
        *self == DisplayFormat::None
    }

    /// Whether the format colors the background rather than the text.
    pub fn is_background(&self) -> bool {
        matches!(
            self,
            DisplayFormat::BgBlack
                | DisplayFormat::BgRed
                | DisplayFormat::BgGreen
                | DisplayFormat::BgYellow
                | DisplayFormat::BgBlue
                | DisplayFormat::BgMagenta
                | DisplayFormat::BgCyan
                | DisplayFormat::BgWhite
        )
    }
}
