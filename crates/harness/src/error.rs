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

//! Error kinds raised across the harness.
//!
//! `CompileError` and `ExecutionError` are contained by the runner at the
//! (engine, pattern) boundary. `EngineError` is contained per engine.
//! `CorpusError` and `ConfigError` are fatal and surface to the binary.

use thiserror::Error;

/// Malformed or out-of-bounds corpus access.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CorpusError {
    #[error("corpus has no {0}")]
    Empty(&'static str),
    #[error("cell ({pattern}, {input}) is outside the {patterns}x{inputs} outcome matrix")]
    IndexOutOfBounds {
        pattern: usize,
        input: usize,
        patterns: usize,
        inputs: usize,
    },
}

/// A pattern rejected by an engine's dialect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{engine} rejected pattern: {reason}")]
pub struct CompileError {
    pub engine: String,
    pub reason: String,
}

impl CompileError {
    pub fn new(engine: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            engine: engine.into(),
            reason: reason.to_string(),
        }
    }
}

/// A compiled matcher that failed while testing an input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{engine} failed during match: {reason}")]
pub struct ExecutionError {
    pub engine: String,
    pub reason: String,
}

impl ExecutionError {
    pub fn new(engine: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            engine: engine.into(),
            reason: reason.to_string(),
        }
    }
}

/// Failure outside the per-pattern boundary, fatal for one engine's run only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("unable to instantiate engine {engine}: {reason}")]
    Instantiation { engine: String, reason: String },
    #[error("engine {engine} aborted: {source}")]
    Corpus {
        engine: String,
        #[source]
        source: CorpusError,
    },
}

impl EngineError {
    pub fn engine(&self) -> &str {
        match self {
            EngineError::Instantiation { engine, .. } | EngineError::Corpus { engine, .. } => engine,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("iteration_count must be at least 1")]
    ZeroIterations,
    #[error("unknown engine {0:?}; declared engines are: {1}")]
    UnknownEngine(String, String),
}
