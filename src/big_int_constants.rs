pub const BITS_IN_LIMB: u32 = 32;

pub const LIMB_BASE: u64 = 1 << BITS_IN_LIMB;

pub const MAX_CONSTANT: usize = 16;

// 10^9 is the largest power of ten below 2^32, so a decimal string is
// parsed and printed nine digits at a time.
pub const DIGITS_PER_LIMB: usize = 9;

pub const DECIMAL_LIMB_RADIX: u32 = 1_000_000_000;

// Magnitudes up to four limbs (128 bits) live inline, everything larger
// spills to the heap.
pub const INLINE_LIMBS: usize = 4;
