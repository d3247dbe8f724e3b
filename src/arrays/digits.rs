// Arbitrary-precision decimals stored most significant digit first.

use crate::error::InputError;
use tracing::trace;

/// Adds one: `[1, 2, 9]` becomes `[1, 3, 0]`, `[9, 9]` becomes `[1, 0, 0]`.
pub fn increment_digits(digits: &mut Vec<u8>) -> Result<(), InputError> {
    if let Some(index) = digits.iter().position(|&d| d > 9) {
        return Err(InputError::InvalidDigit {
            index,
            digit: i16::from(digits[index]),
        });
    }

    for digit in digits.iter_mut().rev() {
        if *digit != 9 {
            *digit += 1;
            return Ok(());
        }
        *digit = 0;
    }
    // carry out of the leading digit (or an empty number, i.e. zero)
    digits.insert(0, 1);
    Ok(())
}

/// Splits a signed number (sign on the leading digit) into sign and magnitude digits.
fn magnitude(number: &[i8]) -> Result<(bool, Vec<u8>), InputError> {
    let (&leading, _) = number.split_first().ok_or(InputError::Empty)?;

    let mut digits = Vec::with_capacity(number.len());
    for (index, &digit) in number.iter().enumerate() {
        let value = if index == 0 { digit.unsigned_abs() } else { digit as u8 };
        if (digit < 0 && index > 0) || value > 9 {
            return Err(InputError::InvalidDigit {
                index,
                digit: i16::from(digit),
            });
        }
        digits.push(value);
    }
    Ok((leading < 0, digits))
}

/// Schoolbook multiplication: `[-1, 2] * [1, 2]` is `[-1, 4, 4]`.
pub fn multiply_digits(a: &[i8], b: &[i8]) -> Result<Vec<i8>, InputError> {
    let (negative_a, a) = magnitude(a)?;
    let (negative_b, b) = magnitude(b)?;

    let mut product = vec![0u32; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate().rev() {
        for (j, &y) in b.iter().enumerate().rev() {
            product[i + j + 1] += u32::from(x) * u32::from(y);
            product[i + j] += product[i + j + 1] / 10;
            product[i + j + 1] %= 10;
        }
    }
    trace!("raw product {:?}", product);

    let first = product
        .iter()
        .position(|&d| d != 0)
        .unwrap_or(product.len() - 1);
    let mut result: Vec<i8> = product[first..].iter().map(|&d| d as i8).collect();

    if negative_a != negative_b && result[0] != 0 {
        result[0] = -result[0];
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment() {
        let mut digits = vec![1, 2, 9];
        increment_digits(&mut digits).unwrap();
        assert_eq!(digits, vec![1, 3, 0]);

        let mut digits = vec![9, 9, 9];
        increment_digits(&mut digits).unwrap();
        assert_eq!(digits, vec![1, 0, 0, 0]);

        let mut digits = vec![];
        increment_digits(&mut digits).unwrap();
        assert_eq!(digits, vec![1]);
    }

    #[test]
    fn test_increment_rejects_non_digits() {
        let mut digits = vec![1, 12, 3];
        assert_eq!(
            increment_digits(&mut digits),
            Err(InputError::InvalidDigit {
                index: 1,
                digit: 12
            })
        );
        assert_eq!(digits, vec![1, 12, 3]);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply_digits(&[-1, 2], &[1, 2]), Ok(vec![-1, 4, 4]));
        assert_eq!(multiply_digits(&[-1, 2], &[-1, 2]), Ok(vec![1, 4, 4]));
        assert_eq!(multiply_digits(&[9, 9], &[9, 9]), Ok(vec![9, 8, 0, 1]));
        assert_eq!(
            multiply_digits(&[1, 9, 3, 7, 0, 7, 7, 2, 1], &[-7, 6, 1, 8, 3, 8, 2, 5, 7, 2, 8, 7]),
            Ok(vec![-1, 4, 7, 5, 7, 3, 9, 5, 2, 5, 8, 9, 6, 7, 6, 4, 1, 2, 9, 2, 7])
        );
    }

    #[test]
    fn test_multiply_by_zero() {
        assert_eq!(multiply_digits(&[0], &[-4, 2]), Ok(vec![0]));
        assert_eq!(multiply_digits(&[0, 0], &[3]), Ok(vec![0]));
    }

    #[test]
    fn test_multiply_invalid() {
        assert_eq!(multiply_digits(&[], &[1]), Err(InputError::Empty));
        assert_eq!(
            multiply_digits(&[1, -2], &[1]),
            Err(InputError::InvalidDigit {
                index: 1,
                digit: -2
            })
        );
        assert_eq!(
            multiply_digits(&[1], &[10]),
            Err(InputError::InvalidDigit {
                index: 0,
                digit: 10
            })
        );
    }
}
