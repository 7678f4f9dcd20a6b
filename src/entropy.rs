//! Randomness sources.
//!
//! Every quantifier and character draw goes through [`Entropy`], so callers decide
//! where randomness comes from:
//! - any `rand::RngCore` (a per-call `StdRng`, the thread-local `thread_rng()`)
//! - [`ScriptedEntropy`]: a fixed, replayable sequence for tests
//! - [`SharedEntropy`]: one generator shared between threads, draws serialized by a mutex

use parking_lot::Mutex;
use rand::{Rng, RngCore};

/// A capability that draws uniform integers.
pub trait Entropy {
    /// Draw uniformly from the inclusive range `lo..=hi`. Callers guarantee `lo <= hi`.
    fn draw(&mut self, lo: usize, hi: usize) -> usize;
}

impl<R: RngCore> Entropy for R {
    #[inline]
    fn draw(&mut self, lo: usize, hi: usize) -> usize {
        self.gen_range(lo..=hi)
    }
}

/// Replays a fixed script of raw values, wrapping around when exhausted.
///
/// A raw value `v` drawn for `lo..=hi` yields `lo + v % (hi - lo + 1)`, so a script of
/// zeros always picks the lower bound and `usize::MAX` picks the upper bound of any
/// range whose width is a power of two. An empty script always yields `lo`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEntropy {
    script: Vec<usize>,
    pos: usize,
}

impl ScriptedEntropy {
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            pos: 0,
        }
    }

    /// Number of draws served so far.
    pub fn draws(&self) -> usize {
        self.pos
    }

    /// Restart the script from its first value.
    pub fn rewind(&mut self) {
        self.pos = 0;
    }
}

impl Entropy for ScriptedEntropy {
    fn draw(&mut self, lo: usize, hi: usize) -> usize {
        let raw = if self.script.is_empty() {
            0
        } else {
            self.script[self.pos % self.script.len()]
        };
        self.pos += 1;
        match (hi - lo).checked_add(1) {
            Some(width) => lo + raw % width,
            None => lo.saturating_add(raw),
        }
    }
}

/// One generator shared by several threads.
///
/// `&SharedEntropy` is itself an [`Entropy`]; each draw takes the lock, so concurrent
/// callers see a serialized sequence of draws from the same generator.
#[derive(Debug)]
pub struct SharedEntropy<R> {
    inner: Mutex<R>,
}

impl<R: RngCore> SharedEntropy<R> {
    pub fn new(rng: R) -> Self {
        Self {
            inner: Mutex::new(rng),
        }
    }

    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }
}

impl<R: RngCore> Entropy for &SharedEntropy<R> {
    fn draw(&mut self, lo: usize, hi: usize) -> usize {
        self.inner.lock().gen_range(lo..=hi)
    }
}
