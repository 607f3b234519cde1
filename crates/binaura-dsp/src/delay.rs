/// Single-ear circular delay line with a capacity fixed at construction.
///
/// Storage and retrieval only: the caller is responsible for clamping the
/// delay passed to [`read_delayed`](DelayLine::read_delayed) into
/// `[0, capacity - 1]`.
#[derive(Clone, Debug)]
pub struct DelayLine {
    buffer: Vec<f32>,
    write: usize,
}

impl DelayLine {
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: vec![0.0; capacity.max(1)],
            write: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Stores `sample` at the current write cursor without advancing it.
    #[inline]
    pub fn write(&mut self, sample: f32) {
        self.buffer[self.write] = sample;
    }

    /// Returns the sample stored `delay_samples` behind the write cursor.
    ///
    /// The capacity is added before the modulo so the index stays in range
    /// when the cursor sits near zero and the delay is near capacity.
    #[inline]
    pub fn read_delayed(&self, delay_samples: usize) -> f32 {
        let len = self.buffer.len();
        debug_assert!(delay_samples < len);
        self.buffer[(self.write + len - delay_samples) % len]
    }

    /// Moves the write cursor forward by one sample, wrapping at capacity.
    #[inline]
    pub fn advance(&mut self) {
        self.write += 1;
        if self.write >= self.buffer.len() {
            self.write = 0;
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        for sample in &mut self.buffer {
            *sample = 0.0;
        }
        self.write = 0;
    }
}
