//! Category labels
//!
//! Categories are plain strings. These are the built-in labels offered
//! before the user has recorded anything.

/// Category assigned when an entry is created or imported without one
pub const DEFAULT_CATEGORY: &str = "Umum";

/// Label an entry with a blank category contributes to the category set
pub const FALLBACK_CATEGORY: &str = "Lainnya";

/// Built-in categories, in display order
pub const BUILTIN_CATEGORIES: [&str; 8] = [
    "Umum",
    "Gaji",
    "Penjualan",
    "Makan",
    "Transport",
    "Tagihan",
    "Hiburan",
    "Lainnya",
];

/// Return `category`, or the default category if it is empty
pub fn or_default(category: &str) -> String {
    if category.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        category.to_string()
    }
}
