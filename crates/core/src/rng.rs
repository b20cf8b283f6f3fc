//! RNG module - shape selection
//!
//! Sessions draw their next shape through the [`ShapeSource`] trait so tests
//! can inject a fixed sequence. [`UniformShapes`] is the default source: a
//! uniform choice over the shape set driven by a small deterministic LCG.

use crate::types::ShapeId;

/// Supplies the id of the next shape to spawn
pub trait ShapeSource {
    /// Pick the next shape out of `count` shapes.
    ///
    /// Ids at or above `count` are wrapped by the session.
    fn next_shape(&mut self, count: usize) -> ShapeId;
}

impl<F> ShapeSource for F
where
    F: FnMut(usize) -> ShapeId,
{
    fn next_shape(&mut self, count: usize) -> ShapeId {
        self(count)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max). Returns 0 when `max` is 0.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // High bits of an LCG are far better distributed than the low ones.
        (((self.next_u32() as u64) * (max as u64)) >> 32) as u32
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniformly random shape ids
#[derive(Debug, Clone)]
pub struct UniformShapes {
    rng: SimpleRng,
}

impl UniformShapes {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Current RNG state (seed for an identical continuation)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for UniformShapes {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ShapeSource for UniformShapes {
    fn next_shape(&mut self, count: usize) -> ShapeId {
        let count = count.clamp(1, u8::MAX as usize) as u32;
        ShapeId(self.rng.next_range(count) as u8)
    }
}

/// Replays a fixed sequence of ids, starting over at the end
#[derive(Debug, Clone)]
pub struct ScriptedShapes {
    ids: Vec<ShapeId>,
    pos: usize,
}

impl ScriptedShapes {
    /// An empty script always yields `ShapeId(0)`.
    pub fn new(ids: impl IntoIterator<Item = ShapeId>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
            pos: 0,
        }
    }

    /// Number of ids handed out so far
    pub fn drawn(&self) -> usize {
        self.pos
    }
}

impl ShapeSource for ScriptedShapes {
    fn next_shape(&mut self, _count: usize) -> ShapeId {
        if self.ids.is_empty() {
            return ShapeId(0);
        }
        let id = self.ids[self.pos % self.ids.len()];
        self.pos += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_not_stuck() {
        let mut rng = SimpleRng::new(0);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_uniform_shapes_cover_all_ids() {
        let mut source = UniformShapes::new(42);
        let mut seen = [0u32; 7];
        for _ in 0..700 {
            let id = source.next_shape(7);
            seen[id.index()] += 1;
        }
        assert!(seen.iter().all(|&n| n > 0), "distribution: {:?}", seen);
    }

    #[test]
    fn test_scripted_shapes_cycle() {
        let mut source = ScriptedShapes::new([ShapeId(3), ShapeId(1)]);
        assert_eq!(source.next_shape(7), ShapeId(3));
        assert_eq!(source.next_shape(7), ShapeId(1));
        assert_eq!(source.next_shape(7), ShapeId(3));
        assert_eq!(source.drawn(), 3);
    }

    #[test]
    fn test_closure_source() {
        let mut n = 0u8;
        let mut source = move |count: usize| {
            n = (n + 1) % count as u8;
            ShapeId(n)
        };
        assert_eq!(source.next_shape(3), ShapeId(1));
        assert_eq!(source.next_shape(3), ShapeId(2));
        assert_eq!(source.next_shape(3), ShapeId(0));
    }
}
