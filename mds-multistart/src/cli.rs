//! Multistart Multidirectional Search command-line interface definitions.
//!
//! Copyright (C) 2025 Pierre Aubert pierre(at)spinorama(dot)org
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program.  If not, see <https://www.gnu.org/licenses/>.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "mds-multistart",
    about = "Multistart Multidirectional Search over the box-bounded Rosenbrock function"
)]
pub struct Args {
    /// Problem dimension.
    #[arg(long, default_value_t = 4)]
    pub nvars: i64,

    /// Number of independent local searches to run.
    #[arg(long, default_value_t = 64)]
    pub ntrials: i64,

    /// Per-trial evaluation budget passed to the MDS engine.
    #[arg(long, default_value_t = 10_000)]
    pub maxfevals: i64,

    /// Per-trial iteration budget passed to the MDS engine.
    #[arg(long, default_value_t = 10_000)]
    pub maxiter: i64,

    /// Base seed mixed into each worker's starting-point RNG stream.
    #[arg(long, default_value_t = 1)]
    pub seed: i64,

    /// Number of worker threads splitting the trials. Defaults to the
    /// machine's available parallelism.
    #[arg(long)]
    pub workers: Option<usize>,

    /// Path the JSON report is written to.
    #[arg(long, default_value = "results_mds.json")]
    pub output: String,
}

impl Args {
    pub fn resolved_workers(&self) -> usize {
        self.workers.unwrap_or_else(|| num_cpus::get().max(1))
    }
}
