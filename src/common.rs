pub type Int = i64;
pub type UInt = u64;

/// The value shown on a single die, always in `1..=faces`.
pub type Face = u32;

