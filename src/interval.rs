use crate::prelude::INFINITY;

/// Closed range of reals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Admissible ray parameters past the self-intersection epsilon.
    pub const fn forward(t_min: f64) -> Self {
        Self::new(t_min, INFINITY)
    }

    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    pub fn clamp(&self, x: f64) -> f64 {
        if x < self.min {
            self.min
        } else if x > self.max {
            self.max
        } else {
            x
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive() {
        let i = Interval::new(0.0, 1.0);
        assert!(i.contains(0.0));
        assert!(i.contains(1.0));
        assert!(!i.contains(1.0 + 1e-12));
        assert!(!i.contains(f64::NAN));
    }

    #[test]
    fn clamp_pins_to_bounds() {
        let i = Interval::new(0.0, 0.999);
        assert_eq!(i.clamp(-3.0), 0.0);
        assert_eq!(i.clamp(0.5), 0.5);
        assert_eq!(i.clamp(1.0), 0.999);
    }
}
