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

//! Decides which (iteration, input) pairs actually invoke the matcher.
//!
//! Every ordinary input runs on all `N` iterations. Each large input runs until its own
//! execution count for the current pattern passes the cap, so it is exercised at most
//! `cap + 1` times per (engine, pattern).

#[derive(Debug, Clone)]
pub struct SamplingPolicy {
    iteration_count: usize,
    large_input_cap: usize,
    large_inputs: Vec<usize>,
}

impl SamplingPolicy {
    pub fn new(iteration_count: usize, large_input_cap: usize, large_inputs: Vec<usize>) -> Self {
        Self {
            iteration_count,
            large_input_cap,
            large_inputs,
        }
    }

    pub fn iteration_count(&self) -> usize {
        self.iteration_count
    }

    pub fn large_input_cap(&self) -> usize {
        self.large_input_cap
    }

    pub fn is_large(&self, input: usize) -> bool {
        self.large_inputs.contains(&input)
    }

    /// Fresh running counters for one (engine, pattern) iteration loop.
    pub fn throttle(&self) -> LargeInputThrottle<'_> {
        LargeInputThrottle {
            policy: self,
            executed: vec![0; self.large_inputs.len()],
        }
    }

    /// How many executions the policy allows for an input across a full loop.
    pub fn executions_for(&self, input: usize) -> usize {
        if self.is_large(input) {
            self.iteration_count.min(self.large_input_cap + 1)
        } else {
            self.iteration_count
        }
    }
}

/// Running execution counts, one per large input, owned by a single pattern's loop.
/// Never re-armed between iterations.
pub struct LargeInputThrottle<'a> {
    policy: &'a SamplingPolicy,
    // Parallel to `policy.large_inputs`.
    executed: Vec<usize>,
}

impl LargeInputThrottle<'_> {
    fn slot(&self, input: usize) -> Option<usize> {
        self.policy.large_inputs.iter().position(|&i| i == input)
    }

    /// Whether `input` should be executed now. Permitting a large input counts it.
    pub fn permit(&mut self, input: usize) -> bool {
        let Some(slot) = self.slot(input) else {
            return true;
        };
        if self.executed[slot] > self.policy.large_input_cap {
            return false;
        }
        self.executed[slot] += 1;
        true
    }

    /// Executions permitted so far for a large input; zero for ordinary inputs.
    pub fn large_executions(&self, input: usize) -> usize {
        self.slot(input).map_or(0, |slot| self.executed[slot])
    }
}
