/// Token account decoding
pub mod mint;

pub use mint::{decode_mint, encode_mint, MintRecord, MintSummary, MINT_ACCOUNT_LEN, MINT_LAYOUT};
