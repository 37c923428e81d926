use serde::{Serialize, Deserialize};
use std::fmt;


/// One point of the hyper-parameter space searched by cBOSS.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    /// Length of the sliding window.
    pub window_size: usize,
    /// Length of the word each window is reduced to.
    pub word_length: usize,
    /// Whether each window is normalized before the reduction.
    pub normalize: bool,
}


impl Candidate {
    /// Construct a new [`Candidate`].
    #[inline]
    pub fn new(window_size: usize, word_length: usize, normalize: bool)
        -> Self
    {
        Self { window_size, word_length, normalize }
    }
}


impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(window: {}, word: {}, norm: {})",
            self.window_size, self.word_length, self.normalize
        )
    }
}
