// parity: 1 when the number of set bits is odd.
use tracing::trace;

/// One bit at a time.
pub fn parity_brute_force(mut x: u64) -> u8 {
    let mut parity = 0;
    while x != 0 {
        parity ^= (x & 1) as u8;
        x >>= 1;
    }
    parity
}

/// `x & (x - 1)` clears the lowest set bit, so this loops once per set bit.
pub fn parity_drop_lowest(mut x: u64) -> u8 {
    let mut parity = 0;
    while x != 0 {
        parity ^= 1;
        x &= x - 1;
    }
    parity
}

/// XOR of the two halves keeps the parity of the whole word: fold 32, 16, ... 1 bits down.
pub fn parity(mut x: u64) -> u8 {
    let mut shift = 32;
    while shift > 0 {
        trace!("{:064b}", x);
        x ^= x >> shift;
        shift >>= 1;
    }
    (x & 1) as u8
}

/// Swaps bits `i` and `j`. Flipping both is a swap exactly when they differ.
pub fn swap_bits(x: u64, i: u32, j: u32) -> u64 {
    debug_assert!(i < u64::BITS && j < u64::BITS, "bit index out of range");
    if (x >> i) & 1 != (x >> j) & 1 {
        x ^ ((1 << i) | (1 << j))
    } else {
        x
    }
}

pub fn reverse_bits(mut x: u64) -> u64 {
    for i in 0..u64::BITS / 2 {
        x = swap_bits(x, i, u64::BITS - 1 - i);
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_variants() {
        for x in [0u64, 1, 36, 0b1011, u64::MAX, 1 << 63, 0xdead_beef] {
            let expected = (x.count_ones() % 2) as u8;
            assert_eq!(parity_brute_force(x), expected, "{x}");
            assert_eq!(parity_drop_lowest(x), expected, "{x}");
            assert_eq!(parity(x), expected, "{x}");
        }
    }

    #[test]
    fn test_swap_bits() {
        assert_eq!(swap_bits(0b0100_1001, 1, 6), 0b0000_1011);
        assert_eq!(swap_bits(0b0100_1001, 0, 3), 0b0100_1001);
        assert_eq!(swap_bits(1, 0, 63), 1 << 63);
        assert_eq!(swap_bits(5, 2, 2), 5);
    }

    #[test]
    fn test_reverse_bits() {
        assert_eq!(reverse_bits(1), 1 << 63);
        assert_eq!(reverse_bits(0b1101), 0b1011 << 60);
        let x = 0x0123_4567_89ab_cdef;
        assert_eq!(reverse_bits(x), x.reverse_bits());
        assert_eq!(reverse_bits(reverse_bits(x)), x);
    }
}
