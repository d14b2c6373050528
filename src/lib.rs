//! Single-resource CPU scheduling simulator.
//!
//! Simulates, in discrete time, how tasks competing for one processing
//! resource execute under four classical disciplines and reports per-task
//! timing and aggregate averages.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Task`, `TaskSet`, `Schedule`, `Slice`, `SchedEvent`
//! - **`policy`**: `SchedulingPolicy` trait with `Fcfs`, `Sjf`, `Srtf`, `RoundRobin`
//! - **`metrics`**: Response, turnaround and waiting averages
//! - **`validation`**: Input integrity checks (arrivals, service times, quantum)
//! - **`runner`**: Runs every configured policy over independent task copies
//! - **`config`**, **`input`**, **`trace`**: Configuration, text input, trace rendering
//! - **`workload`**: Seeded synthetic workloads
//!
//! # Example
//!
//! ```
//! use u_cpusched::config::SimConfig;
//! use u_cpusched::models::TaskSet;
//! use u_cpusched::runner::run_all;
//!
//! let tasks = TaskSet::from_pairs(&[(0, 6), (1, 2), (2, 8), (3, 3)]).unwrap();
//! let reports = run_all(&tasks, &SimConfig::with_quantum(2)).unwrap();
//! let sjf = &reports[1];
//! assert_eq!(sjf.schedule.completion_order(), vec![1, 2, 4, 3]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7

pub mod config;
pub mod error;
pub mod input;
pub mod metrics;
pub mod models;
pub mod policy;
pub mod runner;
pub mod trace;
pub mod validation;
pub mod workload;

pub use error::{Result, SchedError};
