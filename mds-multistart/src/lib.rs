//! Multistart Multidirectional Search driver: partitions random-start
//! trials across worker threads, runs `mds_core::mds_minimize` on each, and
//! reduces to one global best (spec.md §§2-7).

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod reduce;
pub mod report;
pub mod rng;
pub mod trial;
pub mod worker;

pub use config::MultistartConfig;
pub use driver::{run, RunResult};
pub use error::{ConfigError, OutputError, ReductionError};
pub use reduce::{GlobalBest, InProcessReduction, Reduction};
pub use report::Report;
pub use trial::Trial;
