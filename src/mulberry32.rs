use crate::bit_util::to_int32;

const INCREMENT: u32 = 0x6D2B79F5;
const INV_2_POW_32: f64 = 1. / 4294967296.;

/// Mulberry32 pseudo-random generator.
///
/// The sequence must stay bit-identical to the one the browser produces, so every
/// step is done in 32-bit wrapping arithmetic. Not suitable for anything security related.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mulberry32 {
    state: i32,
}

impl Mulberry32 {
    pub fn new(seed: i32) -> Self {
        Self { state: seed }
    }

    /// Keeps only the low 32 bits of the seed, like `seed | 0` does for a safe integer.
    pub fn from_i64(seed: i64) -> Self {
        Self::new(seed as i32)
    }

    /// Coerces an arbitrary JS number with `ToInt32` semantics, so fractional and
    /// non-finite seeds behave as they do in the browser.
    pub fn from_js_number(seed: f64) -> Self {
        Self::new(to_int32(seed))
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT as i32);
        let s = self.state as u32;
        let t = (s ^ (s >> 15)).wrapping_mul(s | 1);
        let t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61)) ^ t;
        t ^ (t >> 14)
    }

    /// Returns a value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 * INV_2_POW_32
    }
}

impl Iterator for Mulberry32 {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Closure form of the generator: each call advances the captured state.
pub fn create_generator(seed: i32) -> impl FnMut() -> f64 {
    let mut rng = Mulberry32::new(seed);
    move || rng.next_f64()
}
