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

//! Eventforth is an in-process event dispatcher. Applications build typed events and hand them to
//! a [`Processor`], which stamps them and fans them out to a set of sinks: the console, rotating
//! plaintext/JSON/CSV files, or an external error reporter.
//!
//! # Overview
//!
//! Every [`Event`] carries a [`Level`], a [`RoutingType`] and an optional [`Source`]. Sinks declare
//! which routing types they accept, so the same processor can keep a main log, a dedicated
//! error log and a verbose debug log apart. PANIC and FATAL events produce an [`Escalation`] the
//! caller performs, unless events are forwarded to a channel instead.
//!
//! # Examples
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use eventforth::Event;
//! use eventforth::Processor;
//! use eventforth::RoutingType;
//! use eventforth::sink::Console;
//! use eventforth::sink::FileBuilder;
//!
//! let errors = FileBuilder::new("logs/errors")
//!     .rotation(Duration::from_secs(3600))
//!     .accept([RoutingType::ERROR_FLOW])
//!     .build_csv()
//!     .unwrap();
//!
//! let processor = Processor::builder()
//!     .assign_ids(true)
//!     .sink(Console::default())
//!     .sink(errors)
//!     .build();
//!
//! let _ = processor.log(Event::info("service started").main());
//! processor
//!     .log_err_only(std::fs::read("settings.toml").err(), &[RoutingType::ERROR_FLOW])
//!     .escalate();
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod event;
pub mod layout;
pub mod processor;
pub mod sink;
pub mod trap;

#[cfg(feature = "bridge-log")]
pub mod bridge;
#[cfg(feature = "colored")]
pub mod color;

mod error;

pub use self::error::Error;
pub use self::event::DisplayFormat;
pub use self::event::Event;
pub use self::event::EventTemplate;
pub use self::event::Level;
pub use self::event::RoutingType;
pub use self::event::Source;
pub use self::layout::DEFAULT_TIME_LAYOUT;
pub use self::processor::Escalation;
pub use self::processor::Failure;
pub use self::processor::Processor;
pub use self::processor::ProcessorBuilder;
pub use self::sink::Sink;
pub use self::trap::Trap;
