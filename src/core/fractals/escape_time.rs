use crate::core::data::complex::Complex;

/// `|z|² < 4.0`, i.e. escape radius 2.
pub const ESCAPE_MODULUS_SQUARED: f64 = 4.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Escape {
    pub iterations: u32,
    pub final_modulus_squared: f64,
}

/// Iterates `z ← z² + c` from `z0` until `|z|` reaches 2 or `max_iterations`
/// steps have run.
#[must_use]
pub fn iterate(z0: Complex, c: Complex, max_iterations: u32) -> Escape {
    let mut z = z0;
    let mut iterations = 0;

    while iterations < max_iterations && z.modulus_squared() < ESCAPE_MODULUS_SQUARED {
        z.square();
        z += c;
        iterations += 1;
    }

    Escape {
        iterations,
        final_modulus_squared: z.modulus_squared(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        let escape = iterate(Complex::default(), Complex::default(), 1000);

        assert_eq!(escape.iterations, 1000);
        assert_eq!(escape.final_modulus_squared, 0.0);
    }

    #[test]
    fn test_point_on_boundary_escapes_immediately() {
        let c = Complex::new(2.0, 0.0);
        let escape = iterate(c, c, 1000);

        assert_eq!(escape.iterations, 0);
        assert_eq!(escape.final_modulus_squared, 4.0);
    }

    #[test]
    fn test_zero_budget_runs_no_steps() {
        let c = Complex::new(0.1, 0.1);
        let escape = iterate(c, c, 0);

        assert_eq!(escape.iterations, 0);
        assert_eq!(escape.final_modulus_squared, c.modulus_squared());
    }

    #[test]
    fn test_known_escape_count() {
        // z: 1 -> 2, |z|² reaches 4 after one step
        let c = Complex::new(1.0, 0.0);
        let escape = iterate(c, c, 100);

        assert_eq!(escape.iterations, 1);
        assert_eq!(escape.final_modulus_squared, 4.0);
    }

    #[test]
    fn test_escaped_points_are_outside_radius() {
        for i in -20..=20 {
            for j in -16..=16 {
                let c = Complex::new(i as f64 / 10.0, j as f64 / 10.0);
                let escape = iterate(c, c, 200);

                if escape.iterations < 200 {
                    assert!(
                        escape.final_modulus_squared >= ESCAPE_MODULUS_SQUARED,
                        "c = {:?} escaped with |z|² = {}",
                        c,
                        escape.final_modulus_squared
                    );
                }
            }
        }
    }

    #[test]
    fn test_julia_constant_differs_from_start() {
        // z0 = 0 with c = 1: 0 -> 1 -> 2
        let escape = iterate(Complex::default(), Complex::new(1.0, 0.0), 100);

        assert_eq!(escape.iterations, 2);
        assert_eq!(escape.final_modulus_squared, 4.0);
    }
}
