// Copyright (C) 2026 Ryan Daum <ryan.daum@gmail.com> This program is free
// software: you can redistribute it and/or modify it under the terms of the GNU
// General Public License as published by the Free Software Foundation, version
// 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

//! Correctness and latency harness for pattern-matching engines.
//!
//! - A fixed `Corpus` of patterns, inputs and expected outcomes
//! - Engines wrapped behind `EngineAdapter` / `CompiledMatcher`
//! - A `SamplingPolicy` that throttles expensive inputs
//! - A `BenchmarkRunner` producing raw timing samples per engine
//! - `StatsAggregator` and `ReportRenderer` to reduce and print them

pub mod clock;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod report;
pub mod runner;
pub mod sampling;
pub mod stats;
pub mod tracing;

pub use clock::{Clock, FrozenClock, MonotonicClock, format_micros};
pub use config::BenchConfig;
pub use corpus::{Corpus, InputSample, PatternCase};
pub use engine::{
    CompiledMatcher, EngineAdapter, EngineDescriptor, MatchSemantics, select_engines,
};
pub use error::{CompileError, ConfigError, CorpusError, EngineError, ExecutionError};
pub use report::{OutputFormat, ReportRenderer, render_summary};
pub use runner::{BenchmarkRunner, PatternStatus, RawEngineRun, TimingSample};
pub use sampling::SamplingPolicy;
pub use stats::{CellResult, CellStats, Correctness, EngineRunResult, StatsAggregator};
