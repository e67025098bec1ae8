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

//! Oniguruma via the `onig` bindings, using Ruby syntax. A backtracking engine with
//! backreferences and lookaround.

use matchbench_harness::{CompileError, CompiledMatcher, EngineAdapter, EngineError, ExecutionError};
use onig::{MatchParam, RegexOptions, SearchOptions, Syntax};

pub const SEARCH_NAME: &str = "onig";
pub const ANCHORED_NAME: &str = "onig-anchored";

#[derive(Clone, Copy)]
enum Mode {
    Search,
    AnchoredStart,
}

impl Mode {
    fn name(self) -> &'static str {
        match self {
            Mode::Search => SEARCH_NAME,
            Mode::AnchoredStart => ANCHORED_NAME,
        }
    }
}

pub struct Oniguruma {
    mode: Mode,
    retry_limit: Option<u32>,
}

impl Oniguruma {
    /// Match anywhere in the input.
    pub fn searching() -> Self {
        Self {
            mode: Mode::Search,
            retry_limit: None,
        }
    }

    /// Match only at offset 0.
    pub fn anchored_at_start() -> Self {
        Self {
            mode: Mode::AnchoredStart,
            retry_limit: None,
        }
    }

    /// Bound backtracking per match attempt. Exceeding it is an execution error.
    pub fn with_retry_limit(mut self, limit: u32) -> Self {
        self.retry_limit = Some(limit);
        self
    }
}

struct OnigMatcher {
    regex: onig::Regex,
    mode: Mode,
    retry_limit: Option<u32>,
}

fn compile(pattern: &str) -> Result<onig::Regex, onig::Error> {
    onig::Regex::with_options(pattern, RegexOptions::REGEX_OPTION_NONE, Syntax::ruby())
}

impl EngineAdapter for Oniguruma {
    fn compile(&self, pattern: &str) -> Result<Box<dyn CompiledMatcher>, CompileError> {
        let regex = compile(pattern).map_err(|e| CompileError::new(self.mode.name(), e))?;
        Ok(Box::new(OnigMatcher {
            regex,
            mode: self.mode,
            retry_limit: self.retry_limit,
        }))
    }
}

impl OnigMatcher {
    fn match_param(&self) -> MatchParam {
        let mut param = MatchParam::default();
        if let Some(limit) = self.retry_limit {
            param.set_retry_limit_in_match(limit);
        }
        param
    }
}

impl CompiledMatcher for OnigMatcher {
    // The `*_with_options` calls panic on engine errors; the `*_with_param` ones report them.
    fn test(&self, input: &str) -> Result<bool, ExecutionError> {
        let found = match self.mode {
            Mode::Search => self.regex.search_with_param(
                input,
                0,
                input.len(),
                SearchOptions::SEARCH_OPTION_NONE,
                None,
                self.match_param(),
            ),
            Mode::AnchoredStart => self.regex.match_with_param(
                input,
                0,
                SearchOptions::SEARCH_OPTION_NONE,
                None,
                self.match_param(),
            ),
        };
        found
            .map(|at| at.is_some())
            .map_err(|e| ExecutionError::new(self.mode.name(), e))
    }
}

pub fn search() -> Result<Box<dyn EngineAdapter>, EngineError> {
    Ok(Box::new(Oniguruma::searching()))
}

pub fn anchored() -> Result<Box<dyn EngineAdapter>, EngineError> {
    Ok(Box::new(Oniguruma::anchored_at_start()))
}
