//! RNG module - deterministic piece generation
//!
//! Pieces come from a seeded LCG so that a seed fully determines a game.
//! Two rules are supported:
//!
//! - **Uniform**: every draw picks any of the seven kinds with equal odds.
//! - **Bag7**: shuffled bags containing each kind once.
//!
//! A scripted queue that cycles a fixed sequence is available for tests and
//! replays.

use crate::types::PieceKind;

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of an LCG are weak; use the high half.
        (self.next_u32() >> 16) % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// How a [`PieceQueue`] picks kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PieceRule {
    #[default]
    Uniform,
    Bag7,
}

impl PieceRule {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "uniform" => Some(PieceRule::Uniform),
            "bag7" | "bag" => Some(PieceRule::Bag7),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceRule::Uniform => "uniform",
            PieceRule::Bag7 => "bag7",
        }
    }
}

#[derive(Debug, Clone)]
enum Source {
    Uniform,
    Bag7 { bag: [PieceKind; 7], index: usize },
    Scripted { kinds: Vec<PieceKind>, index: usize },
}

/// Deterministic source of upcoming piece kinds
#[derive(Debug, Clone)]
pub struct PieceQueue {
    rng: SimpleRng,
    source: Source,
}

impl PieceQueue {
    /// Uniform queue with the given seed
    pub fn new(seed: u32) -> Self {
        Self::with_rule(seed, PieceRule::Uniform)
    }

    /// Queue using the given rule
    pub fn with_rule(seed: u32, rule: PieceRule) -> Self {
        let source = match rule {
            PieceRule::Uniform => Source::Uniform,
            // index 7 forces a shuffle on the first draw
            PieceRule::Bag7 => Source::Bag7 {
                bag: PieceKind::ALL,
                index: 7,
            },
        };
        Self {
            rng: SimpleRng::new(seed),
            source,
        }
    }

    /// Queue that cycles `kinds` forever.
    ///
    /// # Panics
    ///
    /// Panics if `kinds` is empty.
    pub fn scripted(kinds: &[PieceKind]) -> Self {
        assert!(!kinds.is_empty(), "scripted queue needs at least one piece");
        Self {
            rng: SimpleRng::new(1),
            source: Source::Scripted {
                kinds: kinds.to_vec(),
                index: 0,
            },
        }
    }

    /// Draw the next piece from the queue
    pub fn draw(&mut self) -> PieceKind {
        match &mut self.source {
            Source::Uniform => PieceKind::ALL[self.rng.next_range(7) as usize],
            Source::Bag7 { bag, index } => {
                if *index >= bag.len() {
                    *bag = PieceKind::ALL;
                    self.rng.shuffle(bag);
                    *index = 0;
                }
                let kind = bag[*index];
                *index += 1;
                kind
            }
            Source::Scripted { kinds, index } => {
                let kind = kinds[*index % kinds.len()];
                *index += 1;
                kind
            }
        }
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}
