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

use crate::corpus::Corpus;
use crate::error::{ConfigError, CorpusError};
use crate::report::OutputFormat;
use crate::sampling::SamplingPolicy;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ITERATIONS: usize = 10_000;
pub const DEFAULT_LARGE_INPUT_CAP: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Iterations per (engine, pattern). Must be at least 1.
    pub iteration_count: usize,
    /// Large inputs run at most `large_input_cap + 1` times per (engine, pattern).
    pub large_input_cap: usize,
    pub debug: bool,
    pub output_format: OutputFormat,
    /// Engines to run, by name. Empty runs every declared engine.
    pub engines: Vec<String>,
    /// Add the catastrophic-backtracking pattern to the corpus.
    pub include_pathological: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iteration_count: DEFAULT_ITERATIONS,
            large_input_cap: DEFAULT_LARGE_INPUT_CAP,
            debug: false,
            output_format: OutputFormat::default(),
            engines: vec![],
            include_pathological: false,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iteration_count == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(())
    }

    pub fn corpus(&self) -> Result<Corpus, CorpusError> {
        if self.include_pathological {
            Corpus::standard_with_pathological()
        } else {
            Corpus::standard()
        }
    }

    pub fn sampling_policy(&self, corpus: &Corpus) -> SamplingPolicy {
        SamplingPolicy::new(
            self.iteration_count,
            self.large_input_cap,
            corpus.large_inputs(),
        )
    }
}
