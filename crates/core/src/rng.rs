//! RNG module - seedable piece selection
//!
//! Every piece the engine spawns comes from a [`PieceSource`] passed in by the
//! caller. [`UniformSource`] picks uniformly among the seven kinds from a
//! deterministic LCG, and [`ScriptedSource`] plays back a fixed sequence first,
//! which is how scenarios pin exact piece orders.

use std::collections::VecDeque;

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
        // 0 is remapped so the stream never sticks
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Where spawned piece kinds come from
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

/// Uniform random choice among the seven kinds
#[derive(Debug, Clone)]
pub struct UniformSource {
    seed: u32,
    rng: SimpleRng,
}

impl UniformSource {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            rng: SimpleRng::new(seed),
        }
    }

    /// Seed this source was created with (for replaying a session)
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for UniformSource {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for UniformSource {
    fn next_kind(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }
}

/// Plays back a fixed sequence, then falls back to uniform random choice
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: VecDeque<PieceKind>,
    fallback: UniformSource,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = PieceKind>) -> Self {
        Self::with_fallback(script, UniformSource::default())
    }

    pub fn with_fallback(
        script: impl IntoIterator<Item = PieceKind>,
        fallback: UniformSource,
    ) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback,
        }
    }

    /// Pieces still waiting in the script
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    pub fn push(&mut self, kind: PieceKind) {
        self.script.push_back(kind);
    }
}

impl PieceSource for ScriptedSource {
    fn next_kind(&mut self) -> PieceKind {
        match self.script.pop_front() {
            Some(kind) => kind,
            None => self.fallback.next_kind(),
        }
    }
}
