use std::ops::{Add, AddAssign};

// implement Complex instead of using the num-complex trait for learning
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn modulus_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// Squares in place. This is only the `z²` half of the recurrence step,
    /// the caller adds `c` separately.
    pub fn square(&mut self) {
        let real = self.real * self.real - self.imag * self.imag;
        let imag = 2.0 * self.real * self.imag;

        self.real = real;
        self.imag = imag;
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }
}

impl AddAssign for Complex {
    fn add_assign(&mut self, other: Self) {
        self.real += other.real;
        self.imag += other.imag;
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}
