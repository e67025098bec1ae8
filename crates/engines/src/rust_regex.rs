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

//! The `regex` crate: finite-automata based, no backreferences or lookaround.

use matchbench_harness::{CompileError, CompiledMatcher, EngineAdapter, EngineError, ExecutionError};

pub const SEARCH_NAME: &str = "regex";
pub const FULL_NAME: &str = "regex-full";

/// `Regex::is_match`, i.e. a match anywhere in the input.
pub struct RegexSearch;

/// The pattern wrapped as `^(?:...)$` so that only whole-input matches count.
pub struct RegexFull;

struct RegexMatcher(regex::Regex);

impl CompiledMatcher for RegexMatcher {
    fn test(&self, input: &str) -> Result<bool, ExecutionError> {
        Ok(self.0.is_match(input))
    }
}

impl EngineAdapter for RegexSearch {
    fn compile(&self, pattern: &str) -> Result<Box<dyn CompiledMatcher>, CompileError> {
        let regex = regex::Regex::new(pattern).map_err(|e| CompileError::new(SEARCH_NAME, e))?;
        Ok(Box::new(RegexMatcher(regex)))
    }
}

impl EngineAdapter for RegexFull {
    fn compile(&self, pattern: &str) -> Result<Box<dyn CompiledMatcher>, CompileError> {
        let anchored = format!("^(?:{pattern})$");
        let regex = regex::Regex::new(&anchored).map_err(|e| CompileError::new(FULL_NAME, e))?;
        Ok(Box::new(RegexMatcher(regex)))
    }
}

pub fn search() -> Result<Box<dyn EngineAdapter>, EngineError> {
    Ok(Box::new(RegexSearch))
}

pub fn full() -> Result<Box<dyn EngineAdapter>, EngineError> {
    Ok(Box::new(RegexFull))
}
