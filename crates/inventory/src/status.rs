//! Stock level classification derived from a quantity.

use stockbook_core::ValueObject;

/// Upper bound (inclusive) of the low stock band.
pub const LOW_STOCK_MAX: i64 = 10;

/// Upper bound (inclusive) of the normal stock band.
pub const NORMAL_STOCK_MAX: i64 = 50;

/// Stock status, computed from the quantity at read time. Never persisted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    NormalStock,
    HighStock,
}

impl ValueObject for StockStatus {}

impl StockStatus {
    pub fn from_quantity(quantity: i64) -> Self {
        match quantity {
            i64::MIN..=0 => StockStatus::OutOfStock,
            1..=LOW_STOCK_MAX => StockStatus::LowStock,
            _ if quantity <= NORMAL_STOCK_MAX => StockStatus::NormalStock,
            _ => StockStatus::HighStock,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::NormalStock => "Normal Stock",
            StockStatus::HighStock => "High Stock",
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
