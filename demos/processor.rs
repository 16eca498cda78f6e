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

use std::time::Duration;

use eventforth::DisplayFormat;
use eventforth::Error;
use eventforth::Event;
use eventforth::EventTemplate;
use eventforth::Processor;
use eventforth::RoutingType;
use eventforth::Source;
use eventforth::sink::Console;
use eventforth::sink::ErrorReporter;
use eventforth::sink::External;
use eventforth::sink::FileBuilder;

#[derive(Debug)]
struct StderrReporter;

impl ErrorReporter for StderrReporter {
    fn capture_message(&self, message: &str) -> Result<(), Error> {
        eprint!("reported: {message}");
        Ok(())
    }
}

fn main() {
    let main_log = FileBuilder::new("logs/main")
        .truncate(true)
        .rotation(Duration::from_secs(60))
        .accept([RoutingType::MAIN])
        .build_text()
        .unwrap();
    let error_log = FileBuilder::new("logs/errors")
        .rotation(Duration::from_secs(60))
        .accept([RoutingType::ERROR_FLOW])
        .build_csv()
        .unwrap();
    let debug_log = FileBuilder::new("logs/debug")
        .truncate(true)
        .accept([RoutingType::DEBUG, RoutingType::VERBOSE])
        .build_json()
        .unwrap();

    let (errors_tx, errors_rx) = crossbeam_channel::unbounded();
    let processor = Processor::builder()
        .assign_ids(true)
        .time_layout("%Y-%m-%d %H:%M:%S")
        .report_errors(errors_tx)
        .sink(Console::default())
        .sink(main_log)
        .sink(error_log)
        .sink(debug_log)
        .sink(External::new(StderrReporter, "demo").accept([RoutingType::ERROR_FLOW]))
        .build();

    let net = EventTemplate::default()
        .source(Source::bracketed("net"))
        .format(DisplayFormat::Cyan);

    let _ = processor.log(Event::info("Hello main!").main().with_source(Source::MAIN));
    let _ = processor.log(net.note("Hello network!").main());
    let _ = processor.log(net.info("Hello debug!").debug());
    let _ = processor.log(
        Event::warning("Hello warning!")
            .with_format(DisplayFormat::Yellow)
            .main(),
    );
    let _ = processor.log(Event::critical("Hello error flow!").error_flow());

    processor
        .log_err_only(
            std::fs::read("does/not/exist.toml").err(),
            &[RoutingType::MAIN, RoutingType::ERROR_FLOW],
        )
        .escalate();

    for err in errors_rx.try_iter() {
        eprintln!("{err}");
    }
}
