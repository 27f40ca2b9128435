//! Helpers for reading loosely typed NBT values.

use simdnbt::owned::{NbtCompound, NbtTag};

/// Parses an i32 (accepts Byte, Short or Int).
#[must_use]
pub fn nbt_i32(tag: &NbtTag) -> Option<i32> {
    match tag {
        NbtTag::Byte(b) => Some(i32::from(*b)),
        NbtTag::Short(s) => Some(i32::from(*s)),
        NbtTag::Int(i) => Some(*i),
        _ => None,
    }
}

/// Parses a string.
#[must_use]
pub fn nbt_string(tag: &NbtTag) -> Option<String> {
    match tag {
        NbtTag::String(s) => Some(s.to_str().to_string()),
        _ => None,
    }
}

/// Parses a compound.
#[must_use]
pub fn nbt_compound(tag: &NbtTag) -> Option<&NbtCompound> {
    match tag {
        NbtTag::Compound(compound) => Some(compound),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_widening() {
        assert_eq!(nbt_i32(&NbtTag::Byte(3)), Some(3));
        assert_eq!(nbt_i32(&NbtTag::Short(-2)), Some(-2));
        assert_eq!(nbt_i32(&NbtTag::String("1".into())), None);
    }

    #[test]
    fn test_string() {
        assert_eq!(
            nbt_string(&NbtTag::String("water".into())),
            Some("water".to_owned())
        );
        assert_eq!(nbt_string(&NbtTag::Int(1)), None);
    }
}
