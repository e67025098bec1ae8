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

//! Reduces raw timing samples into per-cell descriptive statistics.
//!
//! Mean and standard deviation divide by the nominal iteration count `N`, not by the
//! number of samples actually collected. For throttled large-input cells this
//! understates both; it is kept so results stay comparable with earlier reports.

use crate::engine::MatchSemantics;
use crate::runner::{PatternStatus, RawCell, RawEngineRun, TimingSample};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct CellStats {
    pub samples: usize,
    pub total: Duration,
    /// `None` when no samples were collected.
    pub min: Option<Duration>,
    pub max: Option<Duration>,
    pub mean_ns: f64,
    /// `None` when `N < 2`.
    pub stddev_ns: Option<f64>,
}

impl CellStats {
    pub fn from_samples(samples: &[TimingSample], iteration_count: usize) -> Self {
        let n = iteration_count.max(1) as f64;
        let total_ns: u128 = samples.iter().map(|s| s.elapsed.as_nanos()).sum();
        let sum_sq = samples.iter().fold(0.0f64, |acc, s| {
            let ns = s.elapsed.as_nanos() as f64;
            acc + ns * ns
        });
        let total_f = total_ns as f64;

        // Cancellation can leave a negative or -0.0 variance; report a positive zero.
        let stddev_ns = (iteration_count >= 2).then(|| {
            let variance = (sum_sq - total_f * total_f / n) / (n - 1.0);
            if variance > 0.0 { variance.sqrt() } else { 0.0 }
        });

        Self {
            samples: samples.len(),
            total: samples.iter().map(|s| s.elapsed).sum(),
            min: samples.iter().map(|s| s.elapsed).min(),
            max: samples.iter().map(|s| s.elapsed).max(),
            mean_ns: total_f / n,
            stddev_ns,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correctness {
    Agrees,
    Disagrees,
    /// The pattern never ran for this engine. Counts as a failure.
    NoData,
}

impl Correctness {
    pub fn passed(&self) -> bool {
        matches!(self, Correctness::Agrees)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellResult {
    pub pattern: usize,
    pub input: usize,
    pub correctness: Correctness,
    pub stats: CellStats,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatternResult {
    pub pattern: usize,
    pub status: PatternStatus,
    pub cells: Vec<CellResult>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineRunResult {
    pub engine: &'static str,
    pub semantics: MatchSemantics,
    pub iteration_count: usize,
    pub wall_time: Duration,
    pub patterns: Vec<PatternResult>,
}

impl EngineRunResult {
    pub fn cells(&self) -> impl Iterator<Item = &CellResult> {
        self.patterns.iter().flat_map(|p| p.cells.iter())
    }

    pub fn cells_passed(&self) -> usize {
        self.cells().filter(|c| c.correctness.passed()).count()
    }

    pub fn unavailable_patterns(&self) -> usize {
        self.patterns
            .iter()
            .filter(|p| !p.status.is_measured())
            .count()
    }
}

pub struct StatsAggregator;

impl StatsAggregator {
    pub fn aggregate(run: &RawEngineRun) -> EngineRunResult {
        let patterns = run
            .patterns
            .iter()
            .map(|pattern| PatternResult {
                pattern: pattern.pattern,
                status: pattern.status.clone(),
                cells: pattern
                    .cells
                    .iter()
                    .enumerate()
                    .map(|(input, cell)| {
                        Self::reduce_cell(pattern.pattern, input, cell, run.iteration_count)
                    })
                    .collect(),
            })
            .collect();

        EngineRunResult {
            engine: run.engine,
            semantics: run.semantics,
            iteration_count: run.iteration_count,
            wall_time: run.wall_time,
            patterns,
        }
    }

    fn reduce_cell(pattern: usize, input: usize, cell: &RawCell, n: usize) -> CellResult {
        let correctness = match cell.agrees {
            Some(true) => Correctness::Agrees,
            Some(false) => Correctness::Disagrees,
            None => Correctness::NoData,
        };
        CellResult {
            pattern,
            input,
            correctness,
            stats: CellStats::from_samples(&cell.samples, n),
        }
    }
}
