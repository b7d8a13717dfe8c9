/// Generic decode/encode for declarative layouts
///
/// Both directions walk the layout in declared order with a running offset.
/// All reads go through checked slicing, so a malformed buffer yields a
/// `DecodeError` instead of a panic.
use super::{FieldKind, FieldSpec, FieldValue, Layout, LayoutRecord};
use crate::errors::DecodeError;
use solana_sdk::pubkey::Pubkey;

/// Decode `buffer` against `layout`. Bytes past the layout span are ignored.
pub fn decode(layout: &Layout, buffer: &[u8]) -> Result<LayoutRecord, DecodeError> {
    let mut record = LayoutRecord::with_capacity(layout.fields().len());
    let mut offset = 0usize;

    for field in layout.fields() {
        let value = match field.kind {
            FieldKind::U8 => FieldValue::U8(read::<1>(layout, field, buffer, offset)?[0]),
            FieldKind::U32 => {
                FieldValue::U32(u32::from_le_bytes(read(layout, field, buffer, offset)?))
            }
            FieldKind::U64 => {
                FieldValue::U64(u64::from_le_bytes(read(layout, field, buffer, offset)?))
            }
            FieldKind::U128 => {
                FieldValue::U128(u128::from_le_bytes(read(layout, field, buffer, offset)?))
            }
            FieldKind::PublicKey => {
                FieldValue::PublicKey(Pubkey::new_from_array(read(layout, field, buffer, offset)?))
            }
            FieldKind::Bool => FieldValue::Bool(read::<1>(layout, field, buffer, offset)?[0] == 1),
            FieldKind::Padding(width) => {
                span(layout, field, buffer.len(), offset, width)?;
                offset += width;
                continue;
            }
        };

        record.set(field.name, value);
        offset += field.width();
    }

    Ok(record)
}

/// Encode `record` into `buffer` at each field's fixed offset.
///
/// Returns the number of bytes covered (the layout span). Padding and any
/// bytes beyond the span are left as the caller provided them. The whole
/// record is validated before the first byte is written.
pub fn encode(
    layout: &Layout,
    record: &LayoutRecord,
    buffer: &mut [u8],
) -> Result<usize, DecodeError> {
    let mut offset = 0usize;
    for field in layout.fields() {
        let end = span(layout, field, buffer.len(), offset, field.width())?;
        if !matches!(field.kind, FieldKind::Padding(_)) {
            match record.get(field.name) {
                Some(value) if value.fits(field.kind) => {}
                _ => {
                    return Err(DecodeError::FieldMismatch {
                        layout: layout.name(),
                        field: field.name,
                    });
                }
            }
        }
        offset = end;
    }

    let mut offset = 0usize;
    for field in layout.fields() {
        let end = offset + field.width();
        if matches!(field.kind, FieldKind::Padding(_)) {
            offset = end;
            continue;
        }
        if let Some(value) = record.get(field.name) {
            let target = &mut buffer[offset..end];
            match value {
                FieldValue::U8(v) => target.copy_from_slice(&[*v]),
                FieldValue::U32(v) => target.copy_from_slice(&v.to_le_bytes()),
                FieldValue::U64(v) => target.copy_from_slice(&v.to_le_bytes()),
                FieldValue::U128(v) => target.copy_from_slice(&v.to_le_bytes()),
                FieldValue::PublicKey(v) => target.copy_from_slice(v.as_ref()),
                FieldValue::Bool(v) => target.copy_from_slice(&[u8::from(*v)]),
            }
        }
        offset = end;
    }

    Ok(offset)
}

/// End offset of a field, or `BufferTooShort` if it runs past the buffer
fn span(
    layout: &Layout,
    field: &FieldSpec,
    available: usize,
    offset: usize,
    width: usize,
) -> Result<usize, DecodeError> {
    match offset.checked_add(width) {
        Some(end) if end <= available => Ok(end),
        _ => Err(DecodeError::BufferTooShort {
            layout: layout.name(),
            field: field.name,
            offset,
            needed: width,
            available,
        }),
    }
}

fn read<const N: usize>(
    layout: &Layout,
    field: &FieldSpec,
    buffer: &[u8],
    offset: usize,
) -> Result<[u8; N], DecodeError> {
    let end = span(layout, field, buffer.len(), offset, N)?;
    let mut bytes = [0u8; N];
    bytes.copy_from_slice(&buffer[offset..end]);
    Ok(bytes)
}
