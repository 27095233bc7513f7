//! # Random State Infrastructure
//!
//! This module provides the random state every random sampler draws from,
//! and the normalisation of caller-supplied seeds into such a state.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: a seed or an explicit state makes every draw
//!   deterministic; the seed in use is always recoverable via
//!   [`SamplerRng::seed`]
//! - **Explicit sharing**: a caller-owned state is borrowed mutably, so
//!   several sampling calls can advance one stream in sequence
//! - **Process-wide default**: unseeded calls share one lazily initialised
//!   state, mirroring the usual global generator of numeric libraries
//!
//! ## Module Structure
//!
//! - [`prng`]: PRNG wrapper with seed management and permutations
//! - [`seed`]: [`Seed`] sum type, [`resolve`] and the default state
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::rng::{resolve, SamplerRng, Seed};
//!
//! // Fresh state from an integer seed
//! let mut owned = resolve(Seed::Value(12345));
//! let u = owned.gen_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! // Pass-through of an existing state
//! let mut rng = SamplerRng::from_seed(7);
//! let mut borrowed = resolve(Seed::State(&mut rng));
//! let _ = borrowed.gen_uniform();
//! ```

mod prng;
mod seed;

// Public re-exports
pub use prng::SamplerRng;
pub use seed::{reseed_default, resolve, ResolvedRng, Seed};
