use std::collections::VecDeque;

use rand::RngCore;

/// Replays a fixed list of raw words, then zeros.
///
/// `0` makes any probability roll hit, a coin flip land on featured and a
/// range pick return the first item. `u64::MAX` makes rolls and coin flips
/// miss.
pub struct Scripted {
    words: VecDeque<u64>,
}

impl Scripted {
    pub fn new<I: IntoIterator<Item = u64>>(words: I) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.words.len()
    }
}

impl RngCore for Scripted {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.words.pop_front().unwrap_or(0)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let word = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }
}
