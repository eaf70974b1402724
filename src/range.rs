use serde::{Deserialize, Serialize};

/// An inclusive range `minimum ..= maximum`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeLimits {
    pub minimum: i32,
    pub maximum: i32,
}

impl RangeLimits {
    pub const fn new(minimum: i32, maximum: i32) -> Self {
        Self { minimum, maximum }
    }

    /// Returns `true` if `minimum <= maximum`.
    pub const fn is_ordered(&self) -> bool {
        self.minimum <= self.maximum
    }

    /// Distance between the bounds.
    pub const fn span(&self) -> i64 {
        self.maximum as i64 - self.minimum as i64
    }

    pub const fn contains(&self, value: i32) -> bool {
        value >= self.minimum && value <= self.maximum
    }

    pub fn clamp(&self, value: i32) -> i32 {
        if value < self.minimum {
            self.minimum
        } else if value > self.maximum {
            self.maximum
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RangeLimits;

    #[test]
    fn clamp_keeps_values_inside() {
        let range = RangeLimits::new(-10, 10);
        assert_eq!(range.clamp(-11), -10);
        assert_eq!(range.clamp(3), 3);
        assert_eq!(range.clamp(42), 10);
    }

    #[test]
    fn single_point_range() {
        let range = RangeLimits::new(0, 0);
        assert!(range.is_ordered());
        assert!(range.contains(0));
        assert!(!range.contains(1));
        assert_eq!(range.span(), 0);
    }

    #[test]
    fn span_does_not_overflow() {
        let range = RangeLimits::new(i32::MIN, i32::MAX);
        assert_eq!(range.span(), u32::MAX as i64);
        assert!(!RangeLimits::new(5, -5).is_ordered());
    }
}
