//! Primitive value types.

use core::fmt;

/// A primitive value type: a signed or unsigned integer of some bit width.
///
/// `bool` is the unsigned 1-bit integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeDef {
    pub signed: bool,
    pub bits: u32,
}

impl TypeDef {
    pub const BOOL: TypeDef = TypeDef::new(false, 1);

    /// Create a new type definition.
    pub const fn new(signed: bool, bits: u32) -> Self {
        Self { signed, bits }
    }

    /// Parse a type name (`bool`, `i32`, `u8`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        if name == "bool" {
            return Some(Self::BOOL);
        }
        let signed = match name.as_bytes().first()? {
            b'i' => true,
            b'u' => false,
            _ => return None,
        };
        let digits = &name[1..];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse::<u32>().ok().map(|bits| Self::new(signed, bits))
    }

    /// Check if this is the boolean type.
    pub fn is_bool(&self) -> bool {
        *self == Self::BOOL
    }

    /// Smallest representable value.
    pub fn min_value(&self) -> i128 {
        match self.effective_bits() {
            0 => 0,
            bits if self.signed => -(1i128 << (bits - 1)),
            _ => 0,
        }
    }

    /// Largest representable value.
    pub fn max_value(&self) -> i128 {
        match self.effective_bits() {
            0 => 0,
            bits if self.signed => (1i128 << (bits - 1)) - 1,
            bits => (1i128 << bits) - 1,
        }
    }

    /// Check whether `value` is representable in this type.
    pub fn contains(&self, value: i128) -> bool {
        (self.min_value()..=self.max_value()).contains(&value)
    }

    /// Wrap a 64-bit value to this type's width, sign- or zero-extending
    /// the result back to 64 bits.
    pub fn normalize(&self, value: i64) -> i64 {
        match self.effective_bits() {
            0 => 0,
            64 => value,
            bits => {
                let shift = 64 - bits;
                if self.signed {
                    (value << shift) >> shift
                } else {
                    (((value as u64) << shift) >> shift) as i64
                }
            }
        }
    }

    // Values never exceed 64 bits, whatever width the backend was asked for.
    fn effective_bits(&self) -> u32 {
        self.bits.min(64)
    }
}

impl fmt::Display for TypeDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_bool() {
            write!(f, "bool")
        } else if self.signed {
            write!(f, "i{}", self.bits)
        } else {
            write!(f, "u{}", self.bits)
        }
    }
}
