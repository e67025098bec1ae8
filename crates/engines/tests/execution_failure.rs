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

//! Real engines that error mid-match lose only the failing pattern.

use matchbench_engines::declared_engines;
use matchbench_engines::fancy::FancyRegex;
use matchbench_engines::oniguruma::Oniguruma;
use matchbench_harness::{
    BenchmarkRunner, Corpus, EngineAdapter, EngineDescriptor, EngineError, MatchSemantics,
    MonotonicClock, PatternStatus, SamplingPolicy, StatsAggregator,
};

const ITERATIONS: usize = 4;

const TRIPLED_WORD: &str = r"(\w+)\s+\1\s+\1";
const GREEK: &str =
    "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu nu xi omicron";

fn limited_onig() -> Result<Box<dyn EngineAdapter>, EngineError> {
    Ok(Box::new(Oniguruma::searching().with_retry_limit(5)))
}

fn limited_fancy() -> Result<Box<dyn EngineAdapter>, EngineError> {
    Ok(Box::new(FancyRegex::default().with_backtrack_limit(100)))
}

fn declared(name: &str) -> EngineDescriptor {
    declared_engines()
        .iter()
        .find(|d| d.name == name)
        .cloned()
        .unwrap()
}

#[test]
fn test_retry_limit_fails_pattern_then_next_pattern_and_engine_run() {
    let corpus = Corpus::new(
        [TRIPLED_WORD, "gamma"],
        [(GREEK.to_string(), false), ("go go go".to_string(), false)],
        &[(0, 1), (1, 0)],
    )
    .unwrap();
    let policy = SamplingPolicy::new(ITERATIONS, 10, corpus.large_inputs());
    let runner = BenchmarkRunner::new(&corpus, &policy, MonotonicClock::new());
    let engines = [
        EngineDescriptor::new("onig-limited", MatchSemantics::Search, limited_onig),
        declared("onig"),
    ];
    let results = runner.run_all(&engines);
    assert_eq!(results.len(), 2);

    let limited = results[0].as_ref().unwrap();
    match &limited.patterns[0].status {
        PatternStatus::ExecutionFailed {
            input,
            iteration,
            reason,
        } => {
            assert_eq!((*input, *iteration), (0, 0));
            assert!(reason.contains("retry-limit"), "{reason}");
        }
        other => panic!("expected an execution failure, got {other:?}"),
    }
    assert!(limited.patterns[0].cells.iter().all(|c| c.samples.is_empty()));

    let literal = &limited.patterns[1];
    assert_eq!(literal.status, PatternStatus::Measured);
    assert_eq!(literal.cells[0].agrees, Some(true));
    assert_eq!(literal.cells[0].samples.len(), ITERATIONS);

    let unlimited = StatsAggregator::aggregate(results[1].as_ref().unwrap());
    assert_eq!(unlimited.engine, "onig");
    assert_eq!(unlimited.unavailable_patterns(), 0);
    assert_eq!(unlimited.cells_passed(), 4);

    let limited = StatsAggregator::aggregate(limited);
    assert_eq!(limited.unavailable_patterns(), 1);
    assert_eq!(limited.cells_passed(), 2);
}

#[test]
fn test_backtrack_limit_fails_pattern_then_next_engine_runs() {
    let corpus = Corpus::new(
        [r"(?i)(a|b|ab)*(?=c)", "ab"],
        [("ab".repeat(40), false)],
        &[(1, 0)],
    )
    .unwrap();
    let policy = SamplingPolicy::new(ITERATIONS, 10, corpus.large_inputs());
    let runner = BenchmarkRunner::new(&corpus, &policy, MonotonicClock::new());
    let engines = [
        EngineDescriptor::new("fancy-limited", MatchSemantics::Search, limited_fancy),
        declared("regex"),
    ];
    let results = runner.run_all(&engines);

    let limited = results[0].as_ref().unwrap();
    assert!(matches!(
        limited.patterns[0].status,
        PatternStatus::ExecutionFailed { input: 0, iteration: 0, .. }
    ));
    assert!(limited.patterns[1].status.is_measured());
    assert_eq!(limited.patterns[1].cells[0].agrees, Some(true));

    // The lookahead is rejected by `regex` at compile time, but the literal still runs.
    let regex = results[1].as_ref().unwrap();
    assert!(matches!(
        regex.patterns[0].status,
        PatternStatus::CompileFailed(_)
    ));
    assert!(regex.patterns[1].status.is_measured());
}
