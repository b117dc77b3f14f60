use rust_decimal::Decimal;

use crate::types::{ProductNumber, Quantity};

/// A single sales record as read from the pipe-delimited input file.
///
/// All text fields are already trimmed. The sale amount is intentionally not stored: it is
/// derived from `quantity` and `unit_price` every time it is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Transaction identifier, expected to start with `T`.
    pub transaction_id: String,
    /// Sale date. Compared as text, so it must be in a sortable format such as `YYYY-MM-DD`.
    pub date: String,
    /// Product identifier, expected to start with `P` followed by the catalog number.
    pub product_id: String,
    /// Product display name with commas removed.
    pub product_name: String,
    pub quantity: Quantity,
    pub unit_price: Decimal,
    /// Customer identifier, expected to start with `C`.
    pub customer_id: String,
    pub region: String
}

impl Transaction {
    /// Calculates `quantity × unit_price`.
    ///
    /// Returns `None` when the product does not fit in a `Decimal`.
    pub fn sale_amount(&self) -> Option<Decimal> {
        Decimal::from(self.quantity).checked_mul(self.unit_price)
    }

    /// Extracts the catalog number embedded in the product identifier (`"P101"` -> `101`).
    ///
    /// Every non-digit character is discarded before parsing, so `None` means the identifier
    /// holds no digits or the number does not fit in a `ProductNumber`.
    pub fn product_number(&self) -> Option<ProductNumber> {
        let digits: String = self.product_id.chars().filter(char::is_ascii_digit).collect();
        digits.parse().ok()
    }
}
