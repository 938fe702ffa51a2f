// Bit-length capability used to size rejection-sampling windows.
//
// The intrinsic and the software fallback agree on every input, including
// `leading_zeros(0) == 32`. The `portable-clz` feature selects the fallback.

/// Number of leading zero bits in `value`; 32 for zero.
#[inline]
pub fn leading_zeros(value: u32) -> u32 {
    #[cfg(not(feature = "portable-clz"))]
    {
        value.leading_zeros()
    }
    #[cfg(feature = "portable-clz")]
    {
        portable_leading_zeros(value)
    }
}

/// Binary-search leading-zero count for targets without a usable bit-scan.
pub const fn portable_leading_zeros(value: u32) -> u32 {
    if value == 0 {
        return 32;
    }
    let mut v = value;
    let mut n = 0;
    if v & 0xFFFF_0000 == 0 {
        n += 16;
        v <<= 16;
    }
    if v & 0xFF00_0000 == 0 {
        n += 8;
        v <<= 8;
    }
    if v & 0xF000_0000 == 0 {
        n += 4;
        v <<= 4;
    }
    if v & 0xC000_0000 == 0 {
        n += 2;
        v <<= 2;
    }
    if v & 0x8000_0000 == 0 {
        n += 1;
    }
    n
}

/// Smallest number of bits that can represent `value`.
#[inline]
pub fn bit_length(value: u32) -> u32 {
    u32::BITS - leading_zeros(value)
}
