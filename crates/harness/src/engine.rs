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

//! The capability every matcher library is wrapped in, and the descriptors used to
//! declare the engine list.

use crate::error::{CompileError, ConfigError, EngineError, ExecutionError};
use std::fmt::{Display, Formatter};

/// A pattern compiled by one engine.
///
/// `test` must be free of side effects, and repeated calls with the same input must
/// give the same answer.
pub trait CompiledMatcher {
    fn test(&self, input: &str) -> Result<bool, ExecutionError>;
}

/// One matcher library under test.
pub trait EngineAdapter {
    fn compile(&self, pattern: &str) -> Result<Box<dyn CompiledMatcher>, CompileError>;
}

/// How an engine decides that an input "matches". Engines are expected to disagree
/// here; the harness reports it, it does not correct for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSemantics {
    /// Match anywhere in the input.
    Search,
    /// Match must begin at the start of the input.
    AnchoredStart,
    /// Match must span the whole input.
    FullMatch,
}

impl Display for MatchSemantics {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchSemantics::Search => write!(f, "search"),
            MatchSemantics::AnchoredStart => write!(f, "anchored"),
            MatchSemantics::FullMatch => write!(f, "full"),
        }
    }
}

pub type EngineFactory = fn() -> Result<Box<dyn EngineAdapter>, EngineError>;

#[derive(Clone)]
pub struct EngineDescriptor {
    pub name: &'static str,
    pub semantics: MatchSemantics,
    factory: EngineFactory,
}

impl EngineDescriptor {
    pub const fn new(name: &'static str, semantics: MatchSemantics, factory: EngineFactory) -> Self {
        Self {
            name,
            semantics,
            factory,
        }
    }

    pub fn new_adapter(&self) -> Result<Box<dyn EngineAdapter>, EngineError> {
        (self.factory)()
    }
}

impl std::fmt::Debug for EngineDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineDescriptor")
            .field("name", &self.name)
            .field("semantics", &self.semantics)
            .finish()
    }
}

/// Narrow a declared engine list to the named engines, keeping declaration order.
/// An empty selection keeps everything.
pub fn select_engines(
    declared: &[EngineDescriptor],
    names: &[String],
) -> Result<Vec<EngineDescriptor>, ConfigError> {
    if names.is_empty() {
        return Ok(declared.to_vec());
    }
    if let Some(unknown) = names
        .iter()
        .find(|n| !declared.iter().any(|d| d.name == n.as_str()))
    {
        let known = declared
            .iter()
            .map(|d| d.name)
            .collect::<Vec<_>>()
            .join(", ");
        return Err(ConfigError::UnknownEngine(unknown.clone(), known));
    }
    Ok(declared
        .iter()
        .filter(|d| names.iter().any(|n| n == d.name))
        .cloned()
        .collect())
}
