//! Declarative fixed-offset binary layouts
//!
//! A [`Layout`] is an ordered list of [`FieldSpec`]s. Offsets are cumulative
//! with no padding or alignment between fields, and every integer is
//! little-endian. One generic codec interprets any layout:
//!
//! ```rust
//! use burnscreen::layout::{self, FieldSpec, Layout};
//!
//! const HEADER: Layout = Layout::new("header", &[
//!     FieldSpec::u32("version"),
//!     FieldSpec::bool("enabled"),
//! ]);
//!
//! let record = layout::decode(&HEADER, &[2, 0, 0, 0, 1]).unwrap();
//! assert_eq!(record.u32("version"), Some(2));
//! assert_eq!(record.bool("enabled"), Some(true));
//! ```

mod codec;

pub use codec::{decode, encode};

use solana_sdk::pubkey::Pubkey;

/// Width of an on-chain public key
pub const PUBKEY_BYTES: usize = 32;

/// Decode rule for a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    U8,
    U32,
    U64,
    U128,
    /// Opaque 32-byte identifier, copied verbatim
    PublicKey,
    /// One byte; exactly 1 is true, every other value is false
    Bool,
    /// Reserved bytes. Skipped on decode, left untouched on encode.
    Padding(usize),
}

impl FieldKind {
    pub const fn width(&self) -> usize {
        match self {
            FieldKind::U8 | FieldKind::Bool => 1,
            FieldKind::U32 => 4,
            FieldKind::U64 => 8,
            FieldKind::U128 => 16,
            FieldKind::PublicKey => PUBKEY_BYTES,
            FieldKind::Padding(width) => *width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }

    pub const fn u8(name: &'static str) -> Self {
        Self::new(name, FieldKind::U8)
    }

    pub const fn u32(name: &'static str) -> Self {
        Self::new(name, FieldKind::U32)
    }

    pub const fn u64(name: &'static str) -> Self {
        Self::new(name, FieldKind::U64)
    }

    pub const fn u128(name: &'static str) -> Self {
        Self::new(name, FieldKind::U128)
    }

    pub const fn public_key(name: &'static str) -> Self {
        Self::new(name, FieldKind::PublicKey)
    }

    pub const fn bool(name: &'static str) -> Self {
        Self::new(name, FieldKind::Bool)
    }

    pub const fn padding(name: &'static str, width: usize) -> Self {
        Self::new(name, FieldKind::Padding(width))
    }

    pub const fn width(&self) -> usize {
        self.kind.width()
    }
}

/// Named, ordered field list describing a packed account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    name: &'static str,
    fields: &'static [FieldSpec],
}

impl Layout {
    pub const fn new(name: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self { name, fields }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Total byte span of the layout
    pub const fn span(&self) -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < self.fields.len() {
            total += self.fields[i].kind.width();
            i += 1;
        }
        total
    }

    /// Byte offset of the named field, if it is part of this layout
    pub fn offset_of(&self, name: &str) -> Option<usize> {
        let mut offset = 0;
        for field in self.fields {
            if field.name == name {
                return Some(offset);
            }
            offset += field.width();
        }
        None
    }
}

/// A decoded field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    U8(u8),
    U32(u32),
    U64(u64),
    U128(u128),
    PublicKey(Pubkey),
    Bool(bool),
}

impl FieldValue {
    /// Whether this value can be written into a field of the given kind
    pub fn fits(&self, kind: FieldKind) -> bool {
        matches!(
            (self, kind),
            (FieldValue::U8(_), FieldKind::U8)
                | (FieldValue::U32(_), FieldKind::U32)
                | (FieldValue::U64(_), FieldKind::U64)
                | (FieldValue::U128(_), FieldKind::U128)
                | (FieldValue::PublicKey(_), FieldKind::PublicKey)
                | (FieldValue::Bool(_), FieldKind::Bool)
        )
    }
}

/// Field values in layout order, addressed by field name.
/// Padding fields never appear in a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRecord {
    values: Vec<(&'static str, FieldValue)>,
}

impl LayoutRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Set a field, replacing any earlier value under the same name
    pub fn set(&mut self, name: &'static str, value: FieldValue) {
        match self.values.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.values.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn u8(&self, name: &str) -> Option<u8> {
        match self.get(name)? {
            FieldValue::U8(v) => Some(*v),
            _ => None,
        }
    }

    pub fn u32(&self, name: &str) -> Option<u32> {
        match self.get(name)? {
            FieldValue::U32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn u64(&self, name: &str) -> Option<u64> {
        match self.get(name)? {
            FieldValue::U64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn u128(&self, name: &str) -> Option<u128> {
        match self.get(name)? {
            FieldValue::U128(v) => Some(*v),
            _ => None,
        }
    }

    pub fn pubkey(&self, name: &str) -> Option<Pubkey> {
        match self.get(name)? {
            FieldValue::PublicKey(v) => Some(*v),
            _ => None,
        }
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        match self.get(name)? {
            FieldValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: Layout = Layout::new("sample", &[
        FieldSpec::u32("option"),
        FieldSpec::public_key("key"),
        FieldSpec::padding("reserved", 6),
        FieldSpec::u128("big"),
        FieldSpec::u8("small"),
    ]);

    #[test]
    fn test_span_and_offsets_are_cumulative() {
        assert_eq!(SAMPLE.span(), 4 + 32 + 6 + 16 + 1);
        assert_eq!(SAMPLE.offset_of("option"), Some(0));
        assert_eq!(SAMPLE.offset_of("key"), Some(4));
        assert_eq!(SAMPLE.offset_of("big"), Some(42));
        assert_eq!(SAMPLE.offset_of("small"), Some(58));
        assert_eq!(SAMPLE.offset_of("missing"), None);
    }

    #[test]
    fn test_record_typed_getters() {
        let mut record = LayoutRecord::new();
        record.set("a", FieldValue::U64(7));
        record.set("b", FieldValue::Bool(true));
        record.set("a", FieldValue::U64(9));

        assert_eq!(record.len(), 2);
        assert_eq!(record.u64("a"), Some(9));
        assert_eq!(record.u32("a"), None);
        assert_eq!(record.bool("b"), Some(true));
        assert_eq!(record.pubkey("c"), None);
    }

    #[test]
    fn test_value_fits_kind() {
        assert!(FieldValue::U32(1).fits(FieldKind::U32));
        assert!(!FieldValue::U32(1).fits(FieldKind::U64));
        assert!(!FieldValue::Bool(true).fits(FieldKind::Padding(1)));
    }
}
