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

mod args;

use crate::args::Args;
use clap::Parser;
use eyre::eyre;
use matchbench_engines::declared_engines;
use matchbench_harness::tracing::init_tracing;
use matchbench_harness::{
    BenchmarkRunner, MonotonicClock, ReportRenderer, StatsAggregator, render_summary,
    select_engines,
};
use std::io::Write;
use tracing::{error, info};

fn main() -> Result<(), eyre::Report> {
    color_eyre::install()?;

    let args: Args = Args::parse();
    let config = args.load_config()?;

    init_tracing(config.debug).unwrap_or_else(|e| {
        eprintln!("Unable to configure logging: {e}");
        std::process::exit(1);
    });

    let corpus = config.corpus()?;
    let policy = config.sampling_policy(&corpus);
    let engines = select_engines(declared_engines(), &config.engines)?;

    info!(
        "Benchmarking {} engines over {} patterns x {} inputs, {} iterations (large inputs capped at {})",
        engines.len(),
        corpus.patterns().len(),
        corpus.inputs().len(),
        policy.iteration_count(),
        policy.large_input_cap() + 1
    );

    let runner = BenchmarkRunner::new(&corpus, &policy, MonotonicClock::new());
    let renderer = ReportRenderer::new(&corpus, config.output_format);

    // Each engine's report is written as soon as it completes.
    let mut stdout = std::io::stdout().lock();
    let mut outcomes = Vec::with_capacity(engines.len());
    for descriptor in &engines {
        let outcome = runner
            .run_engine(descriptor)
            .map(|raw| StatsAggregator::aggregate(&raw));
        match &outcome {
            Ok(result) => {
                write!(stdout, "{}", renderer.render(result)?)?;
                stdout.flush()?;
            }
            Err(e) => error!("{e}"),
        }
        outcomes.push(outcome);
    }

    eprintln!("{}", render_summary(&outcomes));

    let failed = outcomes.iter().filter(|o| o.is_err()).count();
    if failed > 0 {
        return Err(eyre!("{failed} of {} engines failed to run", outcomes.len()));
    }
    Ok(())
}
