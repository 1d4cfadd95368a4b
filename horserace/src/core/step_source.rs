use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// StepSource provides the progress increments applied to the horses. A single source is shared
/// by all horses for the whole lifetime of a race engine.
pub trait StepSource: Send {
    /// Returns the next increment, nominally within the inclusive range [step_min, step_max].
    fn next_step(&mut self, step_min: u32, step_max: u32) -> u32;
}

/// RandomSteps draws uniformly distributed increments from a pseudo-random generator.
#[derive(Debug)]
pub struct RandomSteps {
    rng: StdRng,
}

impl RandomSteps {
    /// Creates a seeded (reproducible) source if a seed is given, otherwise seeds from the OS.
    pub fn new(seed: Option<u64>) -> RandomSteps {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        RandomSteps { rng }
    }
}

impl StepSource for RandomSteps {
    fn next_step(&mut self, step_min: u32, step_max: u32) -> u32 {
        self.rng.random_range(step_min..=step_max)
    }
}

/// ConstSteps always returns the same increment and ignores the configured range.
#[derive(Debug, Clone, Copy)]
pub struct ConstSteps(pub u32);

impl StepSource for ConstSteps {
    fn next_step(&mut self, _step_min: u32, _step_max: u32) -> u32 {
        self.0
    }
}
