//! Sources of die faces

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Something that can produce a face for a die with `sides` sides
pub trait DieSource {
    /// Draw one face uniformly from `1..=sides`; `sides` of 0 is treated as 1
    fn draw(&mut self, sides: u32) -> u32;
}

impl<S: DieSource + ?Sized> DieSource for &mut S {
    fn draw(&mut self, sides: u32) -> u32 {
        (**self).draw(sides)
    }
}

/// Die source backed by a `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap an existing generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Use the thread-local generator
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// Deterministic generator for reproducible rolls
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DieSource for RngSource<R> {
    fn draw(&mut self, sides: u32) -> u32 {
        self.rng.random_range(1..=sides.max(1))
    }
}

/// Replays a fixed sequence of faces, cycling when exhausted.
///
/// Each face is clamped into `1..=sides` of the die being drawn.
#[derive(Debug, Clone)]
pub struct FixedSource {
    faces: Vec<u32>,
    next: usize,
}

impl FixedSource {
    /// Create a source from a list of faces; an empty list behaves like `[1]`
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        let mut faces: Vec<u32> = faces.into_iter().collect();
        if faces.is_empty() {
            faces.push(1);
        }
        Self { faces, next: 0 }
    }

    /// Number of faces drawn so far
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl DieSource for FixedSource {
    fn draw(&mut self, sides: u32) -> u32 {
        let face = self.faces[self.next % self.faces.len()];
        self.next += 1;
        face.clamp(1, sides.max(1))
    }
}
