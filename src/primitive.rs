use tracing::trace;

/// `x^y` by squaring: one multiplication per bit of `y`.
pub fn power(mut x: f64, y: i32) -> f64 {
    if y < 0 {
        x = 1.0 / x;
    }
    let mut exponent = y.unsigned_abs();
    let mut result = 1.0;

    while exponent != 0 {
        if exponent & 1 == 1 {
            result *= x;
        }
        x *= x;
        exponent >>= 1;
    }
    result
}

pub fn power_recursive(x: f64, y: i32) -> f64 {
    fn power_of(x: f64, exponent: u32) -> f64 {
        match exponent {
            0 => 1.0,
            e if e % 2 == 1 => x * power_of(x, e - 1),
            e => {
                let half = power_of(x, e / 2);
                half * half
            }
        }
    }

    if y < 0 {
        power_of(1.0 / x, y.unsigned_abs())
    } else {
        power_of(x, y.unsigned_abs())
    }
}

/// Reverses the decimal digits, keeping the sign: -314 -> -413.
/// `None` if the result does not fit.
pub fn reverse_digits(x: i64) -> Option<i64> {
    let mut rest = x.unsigned_abs();
    let mut reversed: i64 = 0;

    while rest != 0 {
        reversed = reversed.checked_mul(10)?.checked_add((rest % 10) as i64)?;
        rest /= 10;
    }
    trace!("reversed {} -> {}", x, reversed);
    Some(if x < 0 { -reversed } else { reversed })
}

/// Checks the decimal digits from both ends, stopping at the first mismatch.
pub fn is_palindrome_number(x: i64) -> bool {
    if x < 0 {
        return false;
    }
    if x == 0 {
        return true;
    }

    let mut mask = 10_i64.pow(x.ilog10());
    let mut rest = x;
    while rest != 0 {
        if rest / mask != rest % 10 {
            return false;
        }
        // drop the leading and the trailing digit
        rest = (rest % mask) / 10;
        mask /= 100;
    }
    true
}

/// Same answer through a full reversal; never exits early.
pub fn is_palindrome_by_reversal(x: i64) -> bool {
    x >= 0 && reverse_digits(x) == Some(x)
}

/// Axis aligned, `(x, y)` is the lower left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rectangle {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Rectangle {
            x,
            y,
            width,
            height,
        }
    }

    // edges are computed in i128: x + width can leave the i64 range
    fn right(&self) -> i128 {
        i128::from(self.x) + i128::from(self.width)
    }

    fn top(&self) -> i128 {
        i128::from(self.y) + i128::from(self.height)
    }

    /// Touching edges count.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        i128::from(self.x) <= other.right()
            && i128::from(other.x) <= self.right()
            && i128::from(self.y) <= other.top()
            && i128::from(other.y) <= self.top()
    }

    /// The overlap, at most as wide and as high as either rectangle, so it always fits in `i64`.
    pub fn intersection(&self, other: &Rectangle) -> Option<Rectangle> {
        if !self.intersects(other) {
            return None;
        }
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let width = self.right().min(other.right()) - i128::from(x);
        let height = self.top().min(other.top()) - i128::from(y);
        Some(Rectangle {
            x,
            y,
            width: i64::try_from(width).ok()?,
            height: i64::try_from(height).ok()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power() {
        assert_eq!(power(2.0, 10), 1024.0);
        assert_eq!(power(2.0, -2), 0.25);
        assert_eq!(power(-3.0, 3), -27.0);
        assert_eq!(power(7.5, 0), 1.0);
        assert_eq!(power_recursive(2.0, 10), 1024.0);
        assert_eq!(power_recursive(2.0, -3), 0.125);
        assert_eq!(power(1.0, i32::MIN), 1.0);
    }

    #[test]
    fn test_reverse_digits() {
        assert_eq!(reverse_digits(42), Some(24));
        assert_eq!(reverse_digits(-314), Some(-413));
        assert_eq!(reverse_digits(1200), Some(21));
        assert_eq!(reverse_digits(0), Some(0));
        assert_eq!(reverse_digits(1_999_999_999_999_999_999), None);
    }

    #[test]
    fn test_palindrome() {
        for x in [0, 1, 7, 11, 121, 1001, 12321, 1002001, 100001] {
            assert!(is_palindrome_number(x), "{x}");
            assert!(is_palindrome_by_reversal(x), "{x}");
        }
        for x in [-1, 10, 12, 1021, 10011, 1000021, 123] {
            assert!(!is_palindrome_number(x), "{x}");
            assert!(!is_palindrome_by_reversal(x), "{x}");
        }
    }

    #[test]
    fn test_rectangle_intersection() {
        let r1 = Rectangle::new(0, 0, 1, 1);
        let r2 = Rectangle::new(1, 1, 2, 3);
        let r3 = Rectangle::new(2, 0, 1, 3);

        // corners touch
        assert_eq!(r1.intersection(&r2), Some(Rectangle::new(1, 1, 0, 0)));
        assert_eq!(r2.intersection(&r3), Some(Rectangle::new(2, 1, 1, 2)));
        assert_eq!(r1.intersection(&r3), None);
        assert!(!r3.intersects(&r1));
    }

    #[test]
    fn test_rectangle_near_i64_max() {
        let unit = Rectangle::new(0, 0, 1, 1);
        let far = Rectangle::new(i64::MAX - 1, 0, 5, 5);
        assert!(!unit.intersects(&far));
        assert_eq!(unit.intersection(&far), None);

        let edge = Rectangle::new(i64::MAX - 10, i64::MAX - 10, 20, 20);
        let inside = Rectangle::new(i64::MAX - 5, i64::MAX - 5, 3, 100);
        assert_eq!(
            edge.intersection(&inside),
            Some(Rectangle::new(i64::MAX - 5, i64::MAX - 5, 3, 15))
        );

        let low = Rectangle::new(i64::MIN, i64::MIN, 1, 1);
        assert_eq!(low.intersection(&low), Some(low));
    }
}
