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

//! Per-engine report rendering (HTML table or tab-delimited text), plus a
//! cross-engine summary table.
//!
//! Both per-engine layouts carry the same data. All durations are in microseconds.

use crate::clock::{format_duration, format_micros, format_micros_f64};
use crate::corpus::Corpus;
use crate::error::EngineError;
use crate::runner::PatternStatus;
use crate::stats::{CellResult, Correctness, EngineRunResult};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::str::FromStr;
use std::time::Duration;
use tabled::{Table, Tabled};

const NO_DATA: &str = "no data";
const SEPARATOR: &str = "------------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// HTML table markup.
    #[default]
    #[serde(alias = "html")]
    Structured,
    /// Tab-delimited text.
    #[serde(alias = "text")]
    Plain,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "structured" | "html" => Ok(OutputFormat::Structured),
            "plain" | "text" => Ok(OutputFormat::Plain),
            other => Err(format!(
                "unknown output format {other:?} (expected structured, html, plain or text)"
            )),
        }
    }
}

pub struct ReportRenderer<'a> {
    corpus: &'a Corpus,
    format: OutputFormat,
}

struct Row {
    total: String,
    max: String,
    mean: String,
    min: String,
    stddev: String,
    input: String,
    matched: &'static str,
}

impl Row {
    fn new(cell: &CellResult, input: &str) -> Self {
        let stats = &cell.stats;
        Self {
            total: format_micros(stats.total),
            max: stats.max.map(format_micros).unwrap_or_else(|| NO_DATA.into()),
            mean: format_micros_f64(stats.mean_ns),
            min: stats.min.map(format_micros).unwrap_or_else(|| NO_DATA.into()),
            stddev: match stats.stddev_ns {
                _ if stats.samples == 0 => NO_DATA.into(),
                Some(stddev) => format_micros_f64(stddev),
                None => "n/a".into(),
            },
            input: input.to_string(),
            matched: match cell.correctness {
                Correctness::Agrees => "true",
                Correctness::Disagrees => "false",
                Correctness::NoData => NO_DATA,
            },
        }
    }
}

fn skip_reason(status: &PatternStatus) -> Option<String> {
    match status {
        PatternStatus::Measured => None,
        PatternStatus::CompileFailed(reason) => Some(format!("did not compile: {reason}")),
        PatternStatus::ExecutionFailed {
            input,
            iteration,
            reason,
        } => Some(format!(
            "failed on input {input} at iteration {iteration}: {reason}"
        )),
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn single_line(text: &str) -> String {
    text.replace('\t', "\\t").replace('\n', "\\n")
}

impl<'a> ReportRenderer<'a> {
    pub fn new(corpus: &'a Corpus, format: OutputFormat) -> Self {
        Self { corpus, format }
    }

    pub fn render(&self, result: &EngineRunResult) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        match self.format {
            OutputFormat::Structured => self.write_structured(&mut out, result)?,
            OutputFormat::Plain => self.write_plain(&mut out, result)?,
        }
        Ok(out)
    }

    fn pattern_text(&self, pattern: usize) -> &str {
        self.corpus
            .patterns()
            .get(pattern)
            .map(|p| p.text.as_str())
            .unwrap_or_default()
    }

    fn input_text(&self, input: usize) -> &str {
        self.corpus
            .inputs()
            .get(input)
            .map(|i| i.text.as_str())
            .unwrap_or_default()
    }

    fn write_structured(&self, out: &mut String, result: &EngineRunResult) -> std::fmt::Result {
        writeln!(out, "<table>")?;
        writeln!(
            out,
            "<tr><th colspan=\"3\"><h2>Regular expression library:</h2></th><td colspan=\"4\"><h2>{} ({})</h2></td></tr>",
            escape_html(result.engine),
            result.semantics
        )?;
        for pattern in &result.patterns {
            writeln!(
                out,
                "<tr><th>RE:</th><td colspan=\"6\">{}</td></tr>",
                escape_html(self.pattern_text(pattern.pattern))
            )?;
            if let Some(reason) = skip_reason(&pattern.status) {
                writeln!(
                    out,
                    "<tr><th>SKIPPED:</th><td colspan=\"6\">{}</td></tr>",
                    escape_html(&reason)
                )?;
            }
            writeln!(
                out,
                "<tr><th>TOTAL (µs)</th><th>MAX</th><th>AVG</th><th>MIN</th><th>DEV</th><th>INPUT</th><th>MATCH</th></tr>"
            )?;
            for cell in &pattern.cells {
                let row = Row::new(cell, self.input_text(cell.input));
                writeln!(
                    out,
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                    row.total,
                    row.max,
                    row.mean,
                    row.min,
                    row.stddev,
                    escape_html(&row.input),
                    row.matched
                )?;
            }
        }
        writeln!(
            out,
            "<tr><th colspan=\"3\"><h2>Total time taken:</h2></th><td colspan=\"4\"><h2>{} µs</h2></td></tr>",
            format_micros(result.wall_time)
        )?;
        writeln!(out, "</table>")
    }

    fn write_plain(&self, out: &mut String, result: &EngineRunResult) -> std::fmt::Result {
        writeln!(out, "{SEPARATOR}")?;
        writeln!(
            out,
            "Regular expression library: {} ({})",
            result.engine, result.semantics
        )?;
        writeln!(out)?;
        for pattern in &result.patterns {
            writeln!(out, "RE: {}", self.pattern_text(pattern.pattern))?;
            if let Some(reason) = skip_reason(&pattern.status) {
                writeln!(out, "  SKIPPED: {reason}")?;
            }
            writeln!(out, "  TOTAL (µs)\tMAX\tAVG\tMIN\tDEV\tINPUT\tMATCH")?;
            for cell in &pattern.cells {
                let row = Row::new(cell, self.input_text(cell.input));
                writeln!(
                    out,
                    "  {}\t{}\t{}\t{}\t{}\t'{}'\t{}",
                    row.total,
                    row.max,
                    row.mean,
                    row.min,
                    row.stddev,
                    single_line(&row.input),
                    row.matched
                )?;
            }
        }
        writeln!(out, "Total time taken: {} µs", format_micros(result.wall_time))?;
        writeln!(out, "{SEPARATOR}")
    }
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Engine")]
    engine: String,
    #[tabled(rename = "Semantics")]
    semantics: String,
    #[tabled(rename = "Wall Time")]
    wall_time: String,
    #[tabled(rename = "Agreeing Cells")]
    agreeing: String,
    #[tabled(rename = "Unavailable Patterns")]
    unavailable: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// One row per engine, in run order, including engines that failed to run.
pub fn render_summary(outcomes: &[Result<EngineRunResult, EngineError>]) -> String {
    let rows: Vec<SummaryRow> = outcomes
        .iter()
        .map(|outcome| match outcome {
            Ok(result) => SummaryRow {
                engine: result.engine.to_string(),
                semantics: result.semantics.to_string(),
                wall_time: format_duration(result.wall_time),
                agreeing: format!("{}/{}", result.cells_passed(), result.cells().count()),
                unavailable: format!(
                    "{}/{}",
                    result.unavailable_patterns(),
                    result.patterns.len()
                ),
                status: "ok".to_string(),
            },
            Err(e) => SummaryRow {
                engine: e.engine().to_string(),
                semantics: "-".to_string(),
                wall_time: format_duration(Duration::ZERO),
                agreeing: "-".to_string(),
                unavailable: "-".to_string(),
                status: format!("failed: {e}"),
            },
        })
        .collect();
    Table::new(&rows).to_string()
}
