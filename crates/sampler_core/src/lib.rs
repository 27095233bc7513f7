//! # sampler_core: Point Sampling over Bounded Boxes
//!
//! Pseudo-random and quasi-random point sets inside an axis-aligned box
//! `[lo_1, hi_1] × … × [lo_d, hi_d]`, typically the initial design of an
//! optimiser or a design of experiments.
//!
//! ## Modules
//!
//! - [`rng`]: random state (`SamplerRng`), seed normalisation (`Seed`, `resolve`)
//! - [`bounds`]: validated box bounds and the accepted input shapes
//! - [`samplers`]: `uniform`, `latin`, `sobol`, `grid` and `SamplingMethod`
//! - [`qmc`]: low-discrepancy sequences (Sobol generator)
//! - [`matrix`]: `SampleMatrix`, the `n × d` result
//!
//! ## Usage Examples
//!
//! ```rust
//! use sampler_core::rng::SamplerRng;
//! use sampler_core::samplers::{grid, latin, sobol, uniform};
//!
//! let bounds = [(0.0, 1.0), (3.0, 4.0)];
//!
//! // Reproducible draws from an integer seed
//! let sample = uniform(bounds, 10, 42u64)?;
//! assert_eq!(sample.shape(), (10, 2));
//!
//! // One explicit state shared by several calls
//! let mut rng = SamplerRng::from_seed(7);
//! let design = latin(bounds, 8, &mut rng)?;
//! let extra = sobol(bounds, 8, &mut rng)?;
//! assert_eq!(design.nrows() + extra.nrows(), 16);
//!
//! // Deterministic grid, n^d rows
//! assert_eq!(grid(bounds, 10)?.shape(), (100, 2));
//! # Ok::<(), sampler_core::SamplingError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize` for `Bounds` and `SampleMatrix`, full serde
//!   support for `SamplingMethod`

pub mod bounds;
pub mod error;
pub mod matrix;
pub mod qmc;
pub mod rng;
pub mod samplers;

pub use bounds::{Bounds, IntoBounds};
pub use error::{Result, SamplingError};
pub use matrix::SampleMatrix;
pub use rng::{resolve, SamplerRng, Seed};
pub use samplers::{grid, latin, sobol, uniform, SamplingMethod};
