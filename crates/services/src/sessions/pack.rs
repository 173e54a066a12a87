use rand::Rng;

use drill_core::model::{MaxFactor, PracticeConfig, Question};

use crate::error::PackError;

/// Produces `pack_size` questions with both factors drawn uniformly from
/// `2..=max_factor`. Repeats are allowed.
///
/// # Errors
///
/// Returns `PackError::EmptyPack` when `pack_size` is zero and
/// `PackError::MaxFactorTooSmall` / `PackError::MaxFactorTooLarge` when
/// `max_factor` falls outside `2..=12`.
pub fn generate_pack<R: Rng>(
    rng: &mut R,
    max_factor: u32,
    pack_size: usize,
) -> Result<Vec<Question>, PackError> {
    if pack_size == 0 {
        return Err(PackError::EmptyPack);
    }
    if max_factor < MaxFactor::MIN {
        return Err(PackError::MaxFactorTooSmall {
            value: max_factor,
            min: MaxFactor::MIN,
        });
    }
    if max_factor > MaxFactor::MAX {
        return Err(PackError::MaxFactorTooLarge {
            value: max_factor,
            max: MaxFactor::MAX,
        });
    }

    let pack = (0..pack_size)
        .map(|_| {
            let left = rng.random_range(MaxFactor::MIN..=max_factor);
            let right = rng.random_range(MaxFactor::MIN..=max_factor);
            Question::new(left, right)
        })
        .collect();
    Ok(pack)
}

/// Builds a question pack from the configuration form.
#[derive(Debug, Clone, Copy)]
pub struct PackBuilder {
    config: PracticeConfig,
}

impl PackBuilder {
    #[must_use]
    pub fn new(config: PracticeConfig) -> Self {
        Self { config }
    }

    /// Build a pack using the thread-local RNG.
    ///
    /// # Errors
    ///
    /// See [`generate_pack`]; a typed `PracticeConfig` never triggers them.
    pub fn build(self) -> Result<Vec<Question>, PackError> {
        let mut rng = rand::rng();
        self.build_with(&mut rng)
    }

    /// Build a pack from a caller-provided RNG (seeded in tests).
    ///
    /// # Errors
    ///
    /// See [`generate_pack`].
    pub fn build_with<R: Rng>(self, rng: &mut R) -> Result<Vec<Question>, PackError> {
        generate_pack(
            rng,
            self.config.max_factor().value(),
            self.config.pack_size().count(),
        )
    }
}
