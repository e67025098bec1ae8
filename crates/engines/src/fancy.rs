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

//! `fancy-regex`: backtracking on top of `regex`, adding backreferences and lookaround.
//! Exceeding the backtrack limit is an execution error, not a non-match.

use matchbench_harness::{CompileError, CompiledMatcher, EngineAdapter, EngineError, ExecutionError};

pub const NAME: &str = "fancy-regex";

#[derive(Default)]
pub struct FancyRegex {
    backtrack_limit: Option<usize>,
}

impl FancyRegex {
    /// Replace the library's default backtrack limit.
    pub fn with_backtrack_limit(mut self, limit: usize) -> Self {
        self.backtrack_limit = Some(limit);
        self
    }
}

struct FancyMatcher(fancy_regex::Regex);

impl EngineAdapter for FancyRegex {
    fn compile(&self, pattern: &str) -> Result<Box<dyn CompiledMatcher>, CompileError> {
        let mut builder = fancy_regex::RegexBuilder::new(pattern);
        if let Some(limit) = self.backtrack_limit {
            builder.backtrack_limit(limit);
        }
        let regex = builder.build().map_err(|e| CompileError::new(NAME, e))?;
        Ok(Box::new(FancyMatcher(regex)))
    }
}

impl CompiledMatcher for FancyMatcher {
    fn test(&self, input: &str) -> Result<bool, ExecutionError> {
        self.0
            .is_match(input)
            .map_err(|e| ExecutionError::new(NAME, e))
    }
}

pub fn engine() -> Result<Box<dyn EngineAdapter>, EngineError> {
    Ok(Box::new(FancyRegex::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backreference() {
        let matcher = FancyRegex::default().compile(r"\b(\w+)(\s+\1)+\b").unwrap();
        assert_eq!(matcher.test("same same same"), Ok(true));
        assert_eq!(matcher.test("he said she said he said no"), Ok(false));
    }

    #[test]
    fn test_lookahead() {
        let matcher = FancyRegex::default().compile(r"a(?!b)").unwrap();
        assert_eq!(matcher.test("ab"), Ok(false));
        assert_eq!(matcher.test("ac"), Ok(true));
    }

    #[test]
    fn test_backtrack_limit_is_an_execution_error() {
        let matcher = FancyRegex::default()
            .with_backtrack_limit(100)
            .compile(r"(?i)(a|b|ab)*(?=c)")
            .unwrap();
        let err = matcher.test(&"ab".repeat(40)).unwrap_err();
        assert_eq!(err.engine, NAME);
    }
}
