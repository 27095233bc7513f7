//! Seed normalisation.
//!
//! Callers hand the samplers a [`Seed`]; [`resolve`] turns it into the
//! random state the sampler actually draws from.

use std::ops::{Deref, DerefMut};
use std::str::FromStr;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use tracing::trace;

use super::prng::SamplerRng;
use crate::error::SamplingError;

/// Process-wide default state, seeded from OS entropy on first use.
static DEFAULT_RNG: LazyLock<Mutex<SamplerRng>> = LazyLock::new(|| {
    let rng = SamplerRng::from_entropy();
    trace!(seed = rng.seed(), "Initialised default sampler state");
    Mutex::new(rng)
});

/// Seed or state specification accepted by every random sampler.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::{SamplerRng, Seed};
///
/// let unseeded = Seed::default();
/// let seeded: Seed<'_> = 42u64.into();
///
/// let mut rng = SamplerRng::from_seed(1);
/// let shared: Seed<'_> = (&mut rng).into();
/// # let _ = (unseeded, seeded, shared);
/// ```
#[derive(Debug, Default)]
pub enum Seed<'a> {
    /// Draw from the process-wide default state.
    #[default]
    Unseeded,
    /// Draw from a fresh state seeded with this value.
    Value(u64),
    /// Draw from, and advance, a caller-owned state.
    State(&'a mut SamplerRng),
}

impl From<u64> for Seed<'_> {
    fn from(seed: u64) -> Self {
        Seed::Value(seed)
    }
}

impl From<Option<u64>> for Seed<'_> {
    fn from(seed: Option<u64>) -> Self {
        seed.map_or(Seed::Unseeded, Seed::Value)
    }
}

impl<'a> From<&'a mut SamplerRng> for Seed<'a> {
    fn from(rng: &'a mut SamplerRng) -> Self {
        Seed::State(rng)
    }
}

/// Parses `""` or `none` as [`Seed::Unseeded`] and a non-negative integer
/// as [`Seed::Value`]. Anything else is [`SamplingError::InvalidSeed`].
///
/// ```rust
/// use sampler_core::rng::Seed;
///
/// assert!(matches!("17".parse::<Seed>(), Ok(Seed::Value(17))));
/// assert!(matches!("none".parse::<Seed>(), Ok(Seed::Unseeded)));
/// assert!("foo".parse::<Seed>().is_err());
/// ```
impl FromStr for Seed<'static> {
    type Err = SamplingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
            return Ok(Seed::Unseeded);
        }
        trimmed
            .parse::<u64>()
            .map(Seed::Value)
            .map_err(|_| SamplingError::InvalidSeed(trimmed.to_string()))
    }
}

/// Random state produced by [`resolve`].
///
/// Dereferences to [`SamplerRng`] regardless of where the state lives.
#[derive(Debug)]
pub enum ResolvedRng<'a> {
    /// Locked handle on the process-wide default state.
    Default(MutexGuard<'static, SamplerRng>),
    /// State created for this call.
    Owned(SamplerRng),
    /// The caller's own state.
    Borrowed(&'a mut SamplerRng),
}

impl Deref for ResolvedRng<'_> {
    type Target = SamplerRng;

    fn deref(&self) -> &SamplerRng {
        match self {
            ResolvedRng::Default(guard) => guard,
            ResolvedRng::Owned(rng) => rng,
            ResolvedRng::Borrowed(rng) => rng,
        }
    }
}

impl DerefMut for ResolvedRng<'_> {
    fn deref_mut(&mut self) -> &mut SamplerRng {
        match self {
            ResolvedRng::Default(guard) => guard,
            ResolvedRng::Owned(rng) => rng,
            ResolvedRng::Borrowed(rng) => rng,
        }
    }
}

/// Normalises a seed specification into a concrete random state.
///
/// - [`Seed::Unseeded`] locks and returns the process-wide default state.
/// - [`Seed::Value`] returns a fresh state; equal seeds yield equal draws.
/// - [`Seed::State`] returns the caller's state itself.
///
/// # Default state and threads
///
/// The default state is shared by every unseeded call in the process and
/// is held locked while the returned handle is alive. Unseeded calls from
/// several threads are serialised but interleave in an unspecified order,
/// so their draws are not reproducible; pass an explicit seed or state
/// whenever reproducibility matters. Resolving [`Seed::Unseeded`] again on
/// the same thread while a `Default` handle is alive deadlocks.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::{resolve, Seed};
///
/// let mut a = resolve(Seed::Value(1));
/// let mut b = resolve(Seed::Value(1));
/// assert_eq!(a.gen_uniform(), b.gen_uniform());
/// ```
pub fn resolve(seed: Seed<'_>) -> ResolvedRng<'_> {
    match seed {
        Seed::Unseeded => ResolvedRng::Default(lock_default()),
        Seed::Value(value) => ResolvedRng::Owned(SamplerRng::from_seed(value)),
        Seed::State(rng) => ResolvedRng::Borrowed(rng),
    }
}

/// Re-seeds the process-wide default state.
///
/// Subsequent unseeded calls on a single thread become reproducible.
pub fn reseed_default(seed: u64) {
    *lock_default() = SamplerRng::from_seed(seed);
    trace!(seed, "Re-seeded default sampler state");
}

fn lock_default() -> MutexGuard<'static, SamplerRng> {
    // A panic while drawing cannot leave the generator in an invalid state.
    DEFAULT_RNG.lock().unwrap_or_else(PoisonError::into_inner)
}
