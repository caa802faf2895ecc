//! Multistart Multidirectional Search binary entry point.
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

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use mds_multistart::cli::Args;
use mds_multistart::config::MultistartConfig;
use mds_multistart::driver;
use mds_testfunctions::rosenbrock;

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match MultistartConfig::new(
        args.nvars,
        args.ntrials,
        args.resolved_workers(),
        args.seed,
        args.maxfevals,
        args.maxiter,
    ) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            return ExitCode::from(2);
        }
    };

    let result = match driver::run(&config, &rosenbrock) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("reduction error: {err}");
            return ExitCode::from(3);
        }
    };

    print_final_results(&config, &result.report);

    if let Err(err) = result.report.write_json(Path::new(&args.output)) {
        eprintln!("failed to write report: {err}");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

/// Mirrors the reference driver's closing `printf` block.
fn print_final_results(config: &MultistartConfig, report: &mds_multistart::Report) {
    println!("FINAL RESULTS");
    println!("  nvars           = {}", config.nvars);
    println!("  ntrials         = {}", report.ntrials);
    println!("  workers         = {}", config.workers);
    println!("  elapsed seconds = {:.6}", report.elapsed_seconds);
    println!("  total funevals  = {}", report.funevals);
    println!("  best trial      = {}", report.best_trial);
    println!("  best term code  = {}", report.best_term);
    println!("  best iterations = {}", report.best_iterations);
    println!("  best nfev       = {}", report.best_nfev);
    println!("  best fx         = {:.10e}", report.best_fx);
    println!("  best point      = {:?}", report.best_point);
}
