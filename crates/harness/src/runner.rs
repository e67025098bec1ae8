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

//! Drives every declared engine through the corpus.
//!
//! Engines run one after another, patterns in corpus order, iterations in order, and
//! inputs in corpus order within an iteration. Each permitted `test` call is timed on
//! its own and recorded as a `TimingSample`.
//!
//! Failures are contained as tightly as possible:
//! - a pattern that does not compile is skipped for that engine only
//! - a `test` call that errors abandons the rest of that pattern for that engine
//! - an engine that cannot be instantiated is reported and the next engine runs

use crate::clock::Clock;
use crate::corpus::{Corpus, PatternCase};
use crate::engine::{EngineAdapter, EngineDescriptor, MatchSemantics};
use crate::error::EngineError;
use crate::sampling::SamplingPolicy;
use std::hint::black_box;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Iterations between debug progress lines.
const PROGRESS_INTERVAL: usize = 1000;

/// One timed `test` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSample {
    pub engine: &'static str,
    pub pattern: usize,
    pub input: usize,
    pub iteration: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternStatus {
    Measured,
    CompileFailed(String),
    ExecutionFailed {
        input: usize,
        iteration: usize,
        reason: String,
    },
}

impl PatternStatus {
    pub fn is_measured(&self) -> bool {
        matches!(self, PatternStatus::Measured)
    }
}

/// Raw data for one (engine, pattern, input) cell.
#[derive(Debug, Clone, Default)]
pub struct RawCell {
    pub samples: Vec<TimingSample>,
    /// Result of the most recent `test` call.
    pub observed: Option<bool>,
    /// Whether the most recent `test` call agreed with the corpus.
    pub agrees: Option<bool>,
}

impl RawCell {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
            ..Default::default()
        }
    }

    fn discard(&mut self) {
        self.samples.clear();
        self.observed = None;
        self.agrees = None;
    }
}

#[derive(Debug, Clone)]
pub struct RawPatternRun {
    pub pattern: usize,
    pub status: PatternStatus,
    /// Indexed by input.
    pub cells: Vec<RawCell>,
}

#[derive(Debug, Clone)]
pub struct RawEngineRun {
    pub engine: &'static str,
    pub semantics: MatchSemantics,
    pub iteration_count: usize,
    /// From before the first compile to after the last measured input.
    pub wall_time: Duration,
    pub patterns: Vec<RawPatternRun>,
}

pub struct BenchmarkRunner<'a, C: Clock> {
    corpus: &'a Corpus,
    policy: &'a SamplingPolicy,
    clock: C,
}

impl<'a, C: Clock> BenchmarkRunner<'a, C> {
    pub fn new(corpus: &'a Corpus, policy: &'a SamplingPolicy, clock: C) -> Self {
        Self {
            corpus,
            policy,
            clock,
        }
    }

    /// Run each engine in declared order. One engine's failure never stops the others.
    pub fn run_all(&self, engines: &[EngineDescriptor]) -> Vec<Result<RawEngineRun, EngineError>> {
        engines
            .iter()
            .map(|descriptor| {
                let result = self.run_engine(descriptor);
                if let Err(e) = &result {
                    error!("{}", e);
                }
                result
            })
            .collect()
    }

    pub fn run_engine(&self, descriptor: &EngineDescriptor) -> Result<RawEngineRun, EngineError> {
        info!("Testing {}...", descriptor.name);
        let adapter = descriptor.new_adapter()?;
        self.run_adapter(descriptor.name, descriptor.semantics, adapter.as_ref())
    }

    pub fn run_adapter(
        &self,
        engine: &'static str,
        semantics: MatchSemantics,
        adapter: &dyn EngineAdapter,
    ) -> Result<RawEngineRun, EngineError> {
        let start = self.clock.now();
        let mut patterns = Vec::with_capacity(self.corpus.patterns().len());
        for pattern in self.corpus.patterns() {
            patterns.push(self.run_pattern(engine, adapter, pattern)?);
        }
        let wall_time = self.clock.elapsed_since(start);

        let measured = patterns.iter().filter(|p| p.status.is_measured()).count();
        info!(
            "{}: {}/{} patterns measured in {:?}",
            engine,
            measured,
            patterns.len(),
            wall_time
        );

        Ok(RawEngineRun {
            engine,
            semantics,
            iteration_count: self.policy.iteration_count(),
            wall_time,
            patterns,
        })
    }

    fn run_pattern(
        &self,
        engine: &'static str,
        adapter: &dyn EngineAdapter,
        pattern: &PatternCase,
    ) -> Result<RawPatternRun, EngineError> {
        let inputs = self.corpus.inputs();
        let expected = inputs
            .iter()
            .map(|input| self.corpus.expected(pattern.index, input.index))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| EngineError::Corpus {
                engine: engine.to_string(),
                source,
            })?;
        let mut cells: Vec<RawCell> = inputs
            .iter()
            .map(|input| RawCell::with_capacity(self.policy.executions_for(input.index)))
            .collect();

        debug!("{}: new pattern {} ({})", engine, pattern.index, pattern.text);
        let matcher = match adapter.compile(&pattern.text) {
            Ok(matcher) => matcher,
            Err(e) => {
                debug!("{}: {} failed to compile: {}", engine, pattern.text, e.reason);
                return Ok(RawPatternRun {
                    pattern: pattern.index,
                    status: PatternStatus::CompileFailed(e.reason),
                    cells,
                });
            }
        };

        let mut throttle = self.policy.throttle();
        for iteration in 0..self.policy.iteration_count() {
            for input in inputs {
                if !throttle.permit(input.index) {
                    continue;
                }

                let started = self.clock.now();
                let observed = matcher.test(black_box(&input.text));
                let elapsed = self.clock.elapsed_since(started);

                let observed = match observed {
                    Ok(observed) => observed,
                    Err(e) => {
                        warn!(
                            "{}: {} failed against input {} on iteration {}: {}",
                            engine, pattern.text, input.index, iteration, e.reason
                        );
                        cells.iter_mut().for_each(RawCell::discard);
                        return Ok(RawPatternRun {
                            pattern: pattern.index,
                            status: PatternStatus::ExecutionFailed {
                                input: input.index,
                                iteration,
                                reason: e.reason,
                            },
                            cells,
                        });
                    }
                };

                if iteration % PROGRESS_INTERVAL == 0 {
                    debug!(
                        "{}: iteration/pattern/input {}/{}/{}: {} took {:?}",
                        engine, iteration, pattern.index, input.index, observed, elapsed
                    );
                }

                let cell = &mut cells[input.index];
                cell.observed = Some(observed);
                cell.agrees = Some(observed == expected[input.index]);
                cell.samples.push(TimingSample {
                    engine,
                    pattern: pattern.index,
                    input: input.index,
                    iteration,
                    elapsed,
                });
            }
        }

        Ok(RawPatternRun {
            pattern: pattern.index,
            status: PatternStatus::Measured,
            cells,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::clock::FrozenClock;
    use crate::engine::CompiledMatcher;
    use crate::error::{CompileError, ExecutionError};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Matches inputs that contain the pattern text. Patterns starting with `!` fail
    /// to compile; inputs equal to `boom` raise an execution error.
    #[derive(Default, Clone)]
    pub(crate) struct ContainsEngine {
        pub calls: Rc<RefCell<HashMap<(String, String), usize>>>,
    }

    struct ContainsMatcher {
        pattern: String,
        calls: Rc<RefCell<HashMap<(String, String), usize>>>,
    }

    impl EngineAdapter for ContainsEngine {
        fn compile(&self, pattern: &str) -> Result<Box<dyn CompiledMatcher>, CompileError> {
            if pattern.starts_with('!') {
                return Err(CompileError::new("contains", "leading ! is not supported"));
            }
            Ok(Box::new(ContainsMatcher {
                pattern: pattern.to_string(),
                calls: self.calls.clone(),
            }))
        }
    }

    impl CompiledMatcher for ContainsMatcher {
        fn test(&self, input: &str) -> Result<bool, ExecutionError> {
            *self
                .calls
                .borrow_mut()
                .entry((self.pattern.clone(), input.to_string()))
                .or_default() += 1;
            if input == "boom" {
                return Err(ExecutionError::new("contains", "input exploded"));
            }
            Ok(input.contains(&self.pattern))
        }
    }

    pub(crate) struct AlwaysMatch;

    impl EngineAdapter for AlwaysMatch {
        fn compile(&self, _pattern: &str) -> Result<Box<dyn CompiledMatcher>, CompileError> {
            Ok(Box::new(AlwaysMatch))
        }
    }

    impl CompiledMatcher for AlwaysMatch {
        fn test(&self, _input: &str) -> Result<bool, ExecutionError> {
            Ok(true)
        }
    }

    pub(crate) fn always_match() -> Result<Box<dyn EngineAdapter>, EngineError> {
        Ok(Box::new(AlwaysMatch))
    }

    fn broken() -> Result<Box<dyn EngineAdapter>, EngineError> {
        Err(EngineError::Instantiation {
            engine: "broken".to_string(),
            reason: "library missing".to_string(),
        })
    }

    pub(crate) fn small_corpus() -> Corpus {
        Corpus::new(
            ["ab", "!bad", "zz"],
            [
                ("xaby".to_string(), false),
                ("nothing".to_string(), false),
                ("ab ab ab ab".to_string(), true),
            ],
            &[(0, 0), (0, 2), (2, 1)],
        )
        .unwrap()
    }

    #[test]
    fn test_correctness_flags_follow_expected_table() {
        let corpus = small_corpus();
        let policy = SamplingPolicy::new(5, 10, corpus.large_inputs());
        let runner = BenchmarkRunner::new(&corpus, &policy, FrozenClock);
        let run = runner
            .run_adapter("contains", MatchSemantics::Search, &ContainsEngine::default())
            .unwrap();

        let ab = &run.patterns[0];
        assert_eq!(ab.status, PatternStatus::Measured);
        assert_eq!(ab.cells[0].agrees, Some(true));
        assert_eq!(ab.cells[1].agrees, Some(true));
        assert_eq!(ab.cells[2].agrees, Some(true));

        // "zz" is expected (wrongly) to match "nothing".
        let zz = &run.patterns[2];
        assert_eq!(zz.cells[1].observed, Some(false));
        assert_eq!(zz.cells[1].agrees, Some(false));
        assert_eq!(zz.cells[0].agrees, Some(true));
    }

    #[test]
    fn test_compile_failure_skips_only_that_pattern() {
        let corpus = small_corpus();
        let policy = SamplingPolicy::new(3, 10, corpus.large_inputs());
        let runner = BenchmarkRunner::new(&corpus, &policy, FrozenClock);
        let run = runner
            .run_adapter("contains", MatchSemantics::Search, &ContainsEngine::default())
            .unwrap();

        assert!(matches!(run.patterns[1].status, PatternStatus::CompileFailed(_)));
        assert!(run.patterns[1].cells.iter().all(|c| c.samples.is_empty()));
        assert!(run.patterns[1].cells.iter().all(|c| c.agrees.is_none()));
        assert!(run.patterns[0].status.is_measured());
        assert!(run.patterns[2].status.is_measured());
        assert_eq!(run.patterns[2].cells[0].samples.len(), 3);
    }

    #[test]
    fn test_large_input_cap_bounds_invocations() {
        let corpus = small_corpus();
        let policy = SamplingPolicy::new(200, 10, corpus.large_inputs());
        let engine = ContainsEngine::default();
        let runner = BenchmarkRunner::new(&corpus, &policy, FrozenClock);
        let run = runner
            .run_adapter("contains", MatchSemantics::Search, &engine)
            .unwrap();

        let calls = engine.calls.borrow();
        for pattern in ["ab", "zz"] {
            assert_eq!(calls[&(pattern.to_string(), "xaby".to_string())], 200);
            assert_eq!(calls[&(pattern.to_string(), "nothing".to_string())], 200);
            assert_eq!(calls[&(pattern.to_string(), "ab ab ab ab".to_string())], 11);
        }
        assert_eq!(run.patterns[0].cells[2].samples.len(), 11);
        assert_eq!(run.patterns[0].cells[0].samples.len(), 200);
    }

    #[test]
    fn test_two_large_inputs_are_capped_independently() {
        let corpus = Corpus::new(
            ["ab"],
            [
                ("short ab".to_string(), false),
                ("long ab ab ab".to_string(), true),
                ("longer ab ab ab ab".to_string(), true),
            ],
            &[(0, 0), (0, 1), (0, 2)],
        )
        .unwrap();
        let policy = SamplingPolicy::new(50, 3, corpus.large_inputs());
        let engine = ContainsEngine::default();
        let runner = BenchmarkRunner::new(&corpus, &policy, FrozenClock);
        let run = runner
            .run_adapter("contains", MatchSemantics::Search, &engine)
            .unwrap();

        let samples: Vec<_> = run.patterns[0].cells.iter().map(|c| c.samples.len()).collect();
        assert_eq!(samples, vec![50, 4, 4]);
        let calls = engine.calls.borrow();
        assert_eq!(calls[&("ab".to_string(), "long ab ab ab".to_string())], 4);
        assert_eq!(calls[&("ab".to_string(), "longer ab ab ab ab".to_string())], 4);
    }

    #[test]
    fn test_samples_are_tagged() {
        let corpus = small_corpus();
        let policy = SamplingPolicy::new(2, 0, corpus.large_inputs());
        let runner = BenchmarkRunner::new(&corpus, &policy, FrozenClock);
        let run = runner
            .run_adapter("contains", MatchSemantics::Search, &ContainsEngine::default())
            .unwrap();

        let samples = &run.patterns[2].cells[1].samples;
        assert_eq!(
            samples.iter().map(|s| s.iteration).collect::<Vec<_>>(),
            vec![0, 1]
        );
        assert!(
            samples
                .iter()
                .all(|s| s.engine == "contains" && s.pattern == 2 && s.input == 1)
        );
        assert_eq!(run.patterns[2].cells[2].samples.len(), 1);
    }

    #[test]
    fn test_execution_failure_abandons_pattern_only() {
        let corpus = Corpus::new(
            ["a", "b"],
            [("a".to_string(), false), ("boom".to_string(), false)],
            &[(0, 0)],
        )
        .unwrap();
        let policy = SamplingPolicy::new(4, 10, corpus.large_inputs());
        let runner = BenchmarkRunner::new(&corpus, &policy, FrozenClock);
        let run = runner
            .run_adapter("contains", MatchSemantics::Search, &ContainsEngine::default())
            .unwrap();

        for pattern in &run.patterns {
            assert_eq!(
                pattern.status,
                PatternStatus::ExecutionFailed {
                    input: 1,
                    iteration: 0,
                    reason: "input exploded".to_string()
                }
            );
            assert!(pattern.cells.iter().all(|c| c.samples.is_empty()));
        }
    }

    #[test]
    fn test_failed_engine_does_not_stop_others() {
        let corpus = small_corpus();
        let policy = SamplingPolicy::new(3, 10, corpus.large_inputs());
        let runner = BenchmarkRunner::new(&corpus, &policy, FrozenClock);
        let engines = [
            EngineDescriptor::new("broken", MatchSemantics::Search, broken),
            EngineDescriptor::new("always", MatchSemantics::Search, always_match),
        ];
        let results = runner.run_all(&engines);
        assert_eq!(results.len(), 2);
        assert!(matches!(
            results[0],
            Err(EngineError::Instantiation { .. })
        ));
        let always = results[1].as_ref().unwrap();
        assert_eq!(always.engine, "always");
        assert!(always.patterns.iter().all(|p| p.status.is_measured()));
    }

    #[test]
    fn test_frozen_clock_gives_zero_wall_time() {
        let corpus = small_corpus();
        let policy = SamplingPolicy::new(3, 10, corpus.large_inputs());
        let runner = BenchmarkRunner::new(&corpus, &policy, FrozenClock);
        let run = runner
            .run_adapter("always", MatchSemantics::Search, &AlwaysMatch)
            .unwrap();
        assert_eq!(run.wall_time, Duration::ZERO);
        assert_eq!(run.iteration_count, 3);
    }
}
