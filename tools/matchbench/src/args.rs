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

use clap::builder::ValueHint;
use clap_derive::Parser;
use eyre::eyre;
use figment::Figment;
use figment::providers::{Format, Serialized, Yaml};
use matchbench_harness::{BenchConfig, OutputFormat};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "matchbench",
    about = "Benchmark pattern-matching engines against a fixed corpus"
)]
pub struct Args {
    #[arg(
        long,
        value_name = "iterations",
        help = "Iterations per engine and pattern [default: 10000]"
    )]
    pub iterations: Option<usize>,

    #[arg(
        long,
        value_name = "large-input-cap",
        help = "Large inputs run at most this many times plus one, per engine and pattern [default: 10]"
    )]
    pub large_input_cap: Option<usize>,

    #[arg(
        long,
        value_name = "format",
        help = "Report format: structured (html) or plain (text) [default: structured]"
    )]
    pub format: Option<OutputFormat>,

    #[arg(
        long = "engine",
        value_name = "engine",
        help = "Only run the named engine. May be repeated. Defaults to every declared engine."
    )]
    pub engines: Vec<String>,

    #[arg(
        long,
        help = "Add the lookahead pattern known to backtrack catastrophically on some engines"
    )]
    pub include_pathological: bool,

    #[arg(
        long,
        value_name = "config",
        help = "Path to configuration (YAML) file to use, if any. If not specified, defaults are used.\
                Configuration file values can be overridden by command line arguments.",
        value_hint = ValueHint::FilePath
    )]
    pub config_file: Option<PathBuf>,

    #[arg(long, help = "Enable debug logging", default_value = "false")]
    pub debug: bool,
}

impl Args {
    fn merge_config(&self, config: &mut BenchConfig) {
        if let Some(iterations) = self.iterations {
            config.iteration_count = iterations;
        }
        if let Some(cap) = self.large_input_cap {
            config.large_input_cap = cap;
        }
        if let Some(format) = self.format {
            config.output_format = format;
        }
        if !self.engines.is_empty() {
            config.engines = self.engines.clone();
        }
        config.include_pathological |= self.include_pathological;
        config.debug |= self.debug;
    }

    /// Load the configuration file if we have it, then merge the arguments over it.
    pub fn load_config(&self) -> Result<BenchConfig, eyre::Report> {
        let mut config = match &self.config_file {
            Some(config_path) => {
                if !config_path.exists() {
                    return Err(eyre!("Configuration file {:?} does not exist", config_path));
                }
                Figment::new()
                    .merge(Serialized::defaults(BenchConfig::default()))
                    .merge(Yaml::file(config_path))
                    .extract::<BenchConfig>()
                    .map_err(|e| {
                        eyre!(
                            "Failed to parse configuration from {:?}: {}",
                            config_path,
                            e
                        )
                    })?
            }
            None => BenchConfig::default(),
        };
        self.merge_config(&mut config);
        config.validate()?;
        Ok(config)
    }
}
