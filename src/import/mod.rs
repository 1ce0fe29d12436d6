//! Import module for CashIO
//!
//! Turns loosely-typed JSON (pasted exports, the persisted ledger blob) into
//! well-formed entries. Normalization happens once here; nothing downstream
//! re-validates entries.

pub mod json;

pub use json::{coerce_amount, normalize_imported, normalize_persisted, parse_import};
