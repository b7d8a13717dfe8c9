/// SPL token mint account decoder
///
/// Mint accounts are 82 packed bytes: authority options are 4-byte tags
/// followed by a 32-byte key that is only meaningful when the tag is 1.
/// Token-2022 mints append extensions after the base layout; those bytes are
/// ignored here.
use crate::errors::DecodeError;
use crate::layout::{self, FieldSpec, FieldValue, Layout, LayoutRecord};
use serde::Serialize;
use solana_sdk::pubkey::Pubkey;

pub const MINT_LAYOUT: Layout = Layout::new("spl_mint", &[
    FieldSpec::u32("mint_authority_option"),
    FieldSpec::public_key("mint_authority"),
    FieldSpec::u64("supply"),
    FieldSpec::u8("decimals"),
    FieldSpec::bool("is_initialized"),
    FieldSpec::u32("freeze_authority_option"),
    FieldSpec::public_key("freeze_authority"),
]);

/// Size of the base mint layout
pub const MINT_ACCOUNT_LEN: usize = MINT_LAYOUT.span();

/// Decoded mint account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintRecord {
    /// Raw option tag; 0 means the mint authority is revoked
    pub mint_authority_option: u32,
    pub mint_authority: Pubkey,
    pub supply: u64,
    pub decimals: u8,
    pub is_initialized: bool,
    /// Raw option tag; 0 means the freeze authority is revoked
    pub freeze_authority_option: u32,
    pub freeze_authority: Pubkey,
}

impl MintRecord {
    /// Current mint authority, if one is set
    pub fn mint_authority(&self) -> Option<Pubkey> {
        (self.mint_authority_option == 1).then_some(self.mint_authority)
    }

    /// Current freeze authority, if one is set
    pub fn freeze_authority(&self) -> Option<Pubkey> {
        (self.freeze_authority_option == 1).then_some(self.freeze_authority)
    }

    /// Supply in whole-token units
    pub fn ui_supply(&self) -> f64 {
        (self.supply as f64) / 10f64.powi(i32::from(self.decimals))
    }

    pub fn from_record(record: &LayoutRecord) -> Result<Self, DecodeError> {
        let missing = |field: &str| DecodeError::SchemaMismatch {
            schema: MINT_LAYOUT.name(),
            reason: format!("decoded record has no '{}' field", field),
        };

        Ok(Self {
            mint_authority_option: record
                .u32("mint_authority_option")
                .ok_or_else(|| missing("mint_authority_option"))?,
            mint_authority: record
                .pubkey("mint_authority")
                .ok_or_else(|| missing("mint_authority"))?,
            supply: record.u64("supply").ok_or_else(|| missing("supply"))?,
            decimals: record.u8("decimals").ok_or_else(|| missing("decimals"))?,
            is_initialized: record
                .bool("is_initialized")
                .ok_or_else(|| missing("is_initialized"))?,
            freeze_authority_option: record
                .u32("freeze_authority_option")
                .ok_or_else(|| missing("freeze_authority_option"))?,
            freeze_authority: record
                .pubkey("freeze_authority")
                .ok_or_else(|| missing("freeze_authority"))?,
        })
    }

    pub fn to_record(&self) -> LayoutRecord {
        let mut record = LayoutRecord::with_capacity(MINT_LAYOUT.fields().len());
        record.set("mint_authority_option", FieldValue::U32(self.mint_authority_option));
        record.set("mint_authority", FieldValue::PublicKey(self.mint_authority));
        record.set("supply", FieldValue::U64(self.supply));
        record.set("decimals", FieldValue::U8(self.decimals));
        record.set("is_initialized", FieldValue::Bool(self.is_initialized));
        record.set("freeze_authority_option", FieldValue::U32(self.freeze_authority_option));
        record.set("freeze_authority", FieldValue::PublicKey(self.freeze_authority));
        record
    }
}

/// Display-friendly summary of a mint, used in reports
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MintSummary {
    pub supply: u64,
    pub ui_supply: f64,
    pub decimals: u8,
    pub is_initialized: bool,
    pub mint_authority: Option<String>,
    pub freeze_authority: Option<String>,
}

impl From<&MintRecord> for MintSummary {
    fn from(mint: &MintRecord) -> Self {
        Self {
            supply: mint.supply,
            ui_supply: mint.ui_supply(),
            decimals: mint.decimals,
            is_initialized: mint.is_initialized,
            mint_authority: mint.mint_authority().map(|k| k.to_string()),
            freeze_authority: mint.freeze_authority().map(|k| k.to_string()),
        }
    }
}

/// Decode a mint account from raw bytes
pub fn decode_mint(buffer: &[u8]) -> Result<MintRecord, DecodeError> {
    let record = layout::decode(&MINT_LAYOUT, buffer)?;
    MintRecord::from_record(&record)
}

/// Write a mint record into the first 82 bytes of `buffer`
pub fn encode_mint(mint: &MintRecord, buffer: &mut [u8]) -> Result<usize, DecodeError> {
    layout::encode(&MINT_LAYOUT, &mint.to_record(), buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_program::program_option::COption;
    use solana_program::program_pack::Pack;
    use spl_token::state::Mint;

    fn authority() -> Pubkey {
        Pubkey::new_from_array([7u8; 32])
    }

    fn sample_mint() -> MintRecord {
        MintRecord {
            mint_authority_option: 1,
            mint_authority: authority(),
            supply: 1_000_000_000_000_000,
            decimals: 6,
            is_initialized: true,
            freeze_authority_option: 0,
            freeze_authority: Pubkey::default(),
        }
    }

    #[test]
    fn test_mint_layout_is_82_bytes() {
        assert_eq!(MINT_ACCOUNT_LEN, 82);
        assert_eq!(MINT_ACCOUNT_LEN, Mint::LEN);
        assert_eq!(MINT_LAYOUT.offset_of("supply"), Some(36));
        assert_eq!(MINT_LAYOUT.offset_of("decimals"), Some(44));
        assert_eq!(MINT_LAYOUT.offset_of("freeze_authority_option"), Some(46));
    }

    #[test]
    fn test_round_trip() {
        let records = [
            sample_mint(),
            MintRecord {
                mint_authority_option: 0,
                mint_authority: Pubkey::default(),
                supply: 0,
                decimals: 0,
                is_initialized: false,
                freeze_authority_option: 1,
                freeze_authority: Pubkey::new_from_array([9u8; 32]),
            },
            MintRecord {
                supply: u64::MAX,
                decimals: u8::MAX,
                ..sample_mint()
            },
        ];

        for record in records {
            let mut buf = vec![0u8; MINT_ACCOUNT_LEN];
            assert_eq!(encode_mint(&record, &mut buf).unwrap(), 82);
            assert_eq!(decode_mint(&buf).unwrap(), record);
        }
    }

    #[test]
    fn test_boundary_81_bytes_fails_82_succeeds() {
        let mut buf = vec![0u8; MINT_ACCOUNT_LEN];
        encode_mint(&sample_mint(), &mut buf).unwrap();

        let err = decode_mint(&buf[..81]).unwrap_err();
        assert!(matches!(err, DecodeError::BufferTooShort {
            field: "freeze_authority",
            offset: 50,
            needed: 32,
            available: 81,
            ..
        }));

        assert_eq!(decode_mint(&buf).unwrap(), sample_mint());
    }

    #[test]
    fn test_trailing_extension_bytes_are_ignored() {
        let mut buf = vec![0xEEu8; MINT_ACCOUNT_LEN + 83];
        encode_mint(&sample_mint(), &mut buf).unwrap();
        assert_eq!(decode_mint(&buf).unwrap(), sample_mint());
    }

    #[test]
    fn test_is_initialized_byte_values() {
        let mut buf = vec![0u8; MINT_ACCOUNT_LEN];
        for (byte, expected) in [(0u8, false), (1, true), (2, false)] {
            buf[45] = byte;
            assert_eq!(decode_mint(&buf).unwrap().is_initialized, expected);
        }
    }

    #[test]
    fn test_decodes_bytes_packed_by_spl_token() {
        let mint = Mint {
            mint_authority: COption::Some(authority()),
            supply: 42_000_000,
            decimals: 9,
            is_initialized: true,
            freeze_authority: COption::None,
        };
        let mut buf = vec![0u8; Mint::LEN];
        Mint::pack(mint, &mut buf).unwrap();

        let decoded = decode_mint(&buf).unwrap();
        assert_eq!(decoded.mint_authority_option, 1);
        assert_eq!(decoded.mint_authority(), Some(authority()));
        assert_eq!(decoded.supply, 42_000_000);
        assert_eq!(decoded.decimals, 9);
        assert!(decoded.is_initialized);
        assert_eq!(decoded.freeze_authority_option, 0);
        assert_eq!(decoded.freeze_authority(), None);
    }

    #[test]
    fn test_unusual_option_tag_is_kept_raw() {
        let mut buf = vec![0u8; MINT_ACCOUNT_LEN];
        buf[0..4].copy_from_slice(&2u32.to_le_bytes());
        let decoded = decode_mint(&buf).unwrap();
        assert_eq!(decoded.mint_authority_option, 2);
        assert_eq!(decoded.mint_authority(), None);
    }

    #[test]
    fn test_summary_and_ui_supply() {
        let summary = MintSummary::from(&sample_mint());
        assert_eq!(summary.mint_authority, Some(authority().to_string()));
        assert_eq!(summary.freeze_authority, None);
        assert_eq!(sample_mint().ui_supply(), 1_000_000_000.0);
    }
}
