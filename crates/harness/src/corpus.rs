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

//! The fixed test data every engine is measured against: patterns, inputs and
//! the dense table of expected match outcomes.

use crate::error::CorpusError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternCase {
    pub index: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSample {
    pub index: usize,
    pub text: String,
    /// Large inputs are throttled by the sampling policy.
    pub large: bool,
}

/// Immutable once built.
#[derive(Debug, Clone)]
pub struct Corpus {
    patterns: Vec<PatternCase>,
    inputs: Vec<InputSample>,
    // Row-major, patterns x inputs.
    expected: Vec<bool>,
}

const URL: &str = r"^(([^:]+)://)?([^:/]+)(:([0-9]+))?(/.*)";
const URL_UNANCHORED: &str = r"(([^:]+)://)?([^:/]+)(:([0-9]+))?(/.*)";
const US_DOLLARS: &str = r"usd [+-]?[0-9]+.[0-9][0-9]";
const DUPLICATE_WORDS: &str = r"\b(\w+)(\s+\1)+\b";
// Backtracks catastrophically on the large input in several engines.
const BRACED_BLOCK: &str = r"\{(\d+):(([^}](?!-} ))*)";

const LARGE_BODY_LINES: usize = 40;

fn large_block() -> String {
    let mut block = String::from("{1:\n");
    block.push_str("this is some more text - and some more and some more and even more\n");
    for _ in 0..LARGE_BODY_LINES {
        block.push_str("this is some more text and some more and some more and even more\n");
    }
    block.push_str("this is some more text and some more and some more and even more at the end\n");
    block.push_str("-}\n");
    block
}

impl Corpus {
    /// Build a corpus from its patterns, its inputs (text plus "large" flag), and the
    /// cells expected to match. All other cells are expected not to match.
    pub fn new<P, I>(
        patterns: P,
        inputs: I,
        matching: &[(usize, usize)],
    ) -> Result<Self, CorpusError>
    where
        P: IntoIterator,
        P::Item: Into<String>,
        I: IntoIterator<Item = (String, bool)>,
    {
        let patterns: Vec<PatternCase> = patterns
            .into_iter()
            .enumerate()
            .map(|(index, text)| PatternCase {
                index,
                text: text.into(),
            })
            .collect();
        let inputs: Vec<InputSample> = inputs
            .into_iter()
            .enumerate()
            .map(|(index, (text, large))| InputSample { index, text, large })
            .collect();

        if patterns.is_empty() {
            return Err(CorpusError::Empty("patterns"));
        }
        if inputs.is_empty() {
            return Err(CorpusError::Empty("inputs"));
        }

        let mut corpus = Self {
            expected: vec![false; patterns.len() * inputs.len()],
            patterns,
            inputs,
        };
        for &(pattern, input) in matching {
            let cell = corpus.cell_index(pattern, input)?;
            corpus.expected[cell] = true;
        }
        Ok(corpus)
    }

    /// The built-in corpus: URL, dollar amount and duplicate-word patterns against five
    /// short strings and one large block of text.
    pub fn standard() -> Result<Self, CorpusError> {
        Self::build_standard(false)
    }

    /// The standard corpus plus the braced-block lookahead pattern, which is prone to
    /// catastrophic backtracking against the large input.
    pub fn standard_with_pathological() -> Result<Self, CorpusError> {
        Self::build_standard(true)
    }

    fn build_standard(pathological: bool) -> Result<Self, CorpusError> {
        let mut patterns = vec![URL, URL_UNANCHORED, US_DOLLARS, DUPLICATE_WORDS];
        if pathological {
            patterns.push(BRACED_BLOCK);
        }
        let inputs = [
            "http://www.linux.com/",
            "http://www.thelinuxshow.com/main.php3",
            "usd 1234.00",
            "he said she said he said no",
            "same same same",
        ]
        .into_iter()
        .map(|s| (s.to_string(), false))
        .chain(std::iter::once((large_block(), true)));

        let matching = [(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (3, 4)];
        Self::new(patterns, inputs, &matching)
    }

    pub fn patterns(&self) -> &[PatternCase] {
        &self.patterns
    }

    pub fn inputs(&self) -> &[InputSample] {
        &self.inputs
    }

    pub fn large_inputs(&self) -> Vec<usize> {
        self.inputs
            .iter()
            .filter(|i| i.large)
            .map(|i| i.index)
            .collect()
    }

    pub fn expected(&self, pattern: usize, input: usize) -> Result<bool, CorpusError> {
        Ok(self.expected[self.cell_index(pattern, input)?])
    }

    pub fn cell_count(&self) -> usize {
        self.expected.len()
    }

    fn cell_index(&self, pattern: usize, input: usize) -> Result<usize, CorpusError> {
        if pattern >= self.patterns.len() || input >= self.inputs.len() {
            return Err(CorpusError::IndexOutOfBounds {
                pattern,
                input,
                patterns: self.patterns.len(),
                inputs: self.inputs.len(),
            });
        }
        Ok(pattern * self.inputs.len() + input)
    }
}
