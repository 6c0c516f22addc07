/// Base of one digit group. A group stores nine decimal digits as one integer.
pub const GROUP_RADIX: u64 = 1_000_000_000;

/// Largest value a single group may hold.
pub const GROUP_MAX: u32 = 999_999_999;

/// Number of decimal digits stored in one group.
pub const DIGITS_PER_GROUP: usize = 9;

pub const MAX_CONSTANT: usize = 16;
