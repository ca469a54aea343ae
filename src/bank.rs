use rand::Rng;

/// Fixed set of pre-generated sample buffers cycled round-robin, one per
/// frame. Generating up front keeps the paint path allocation-free and the
/// displayed shapes stable: the same `count` buffers repeat forever.
pub struct WaveformBank {
    buffers: Vec<Vec<f32>>,
    cursor: usize,
}

impl WaveformBank {
    /// Generate `count` buffers of `length` samples each, drawn uniformly
    /// from [-1, 1].
    pub fn generate<R: Rng>(count: usize, length: usize, rng: &mut R) -> Self {
        let buffers = (0..count)
            .map(|_| (0..length).map(|_| rng.gen_range(-1.0f32..=1.0)).collect())
            .collect();
        Self { buffers, cursor: 0 }
    }

    /// Buffer at the cursor; the cursor then advances modulo the bank size.
    /// Cycling is deterministic round-robin, not random selection.
    pub fn next(&mut self) -> &[f32] {
        if self.buffers.is_empty() {
            return &[];
        }
        let index = self.cursor;
        self.cursor = (self.cursor + 1) % self.buffers.len();
        &self.buffers[index]
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }
}
