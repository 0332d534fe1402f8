//! Warehouse item categories.
//!
//! Each category is an independent value type. [`WarehouseItem`] is the
//! closed set of categories a single store can hold side by side; it is
//! persisted as an internally tagged record (`"kind": "electronic"` / `"grocery"`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockbook_core::{DomainError, DomainResult, Entity, EntityId};

use crate::stock::StockItem;

/// Electronic goods, tracked with brand and warranty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ElectronicRecord")]
pub struct ElectronicItem {
    id: EntityId,
    name: String,
    quantity: i64,
    brand: String,
    warranty_months: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ElectronicRecord {
    id: EntityId,
    name: String,
    quantity: i64,
    brand: String,
    warranty_months: u32,
}

impl TryFrom<ElectronicRecord> for ElectronicItem {
    type Error = DomainError;

    fn try_from(r: ElectronicRecord) -> Result<Self, Self::Error> {
        ElectronicItem::validated(r.id, r.name, r.quantity, r.brand, r.warranty_months)
    }
}

impl ElectronicItem {
    pub fn create(
        id: i64,
        name: impl Into<String>,
        quantity: i64,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> DomainResult<Self> {
        let id = EntityId::try_from(id)?;
        Self::validated(id, name.into(), quantity, brand.into(), warranty_months)
    }

    fn validated(
        id: EntityId,
        name: String,
        quantity: i64,
        brand: String,
        warranty_months: u32,
    ) -> DomainResult<Self> {
        DomainError::ensure_not_blank("name", &name)?;
        DomainError::ensure_not_blank("brand", &brand)?;
        DomainError::ensure_non_negative("quantity", quantity)?;
        Ok(Self {
            id,
            name,
            quantity,
            brand,
            warranty_months,
        })
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }
}

impl Entity for ElectronicItem {
    type Id = EntityId;

    fn id(&self) -> EntityId {
        self.id
    }
}

impl StockItem for ElectronicItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn with_quantity(&self, quantity: i64) -> DomainResult<Self> {
        DomainError::ensure_non_negative("quantity", quantity)?;
        Ok(Self {
            quantity,
            ..self.clone()
        })
    }
}

impl core::fmt::Display for ElectronicItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Electronic [ID: {}, Name: {}, Quantity: {}, Brand: {}, Warranty: {} months]",
            self.id, self.name, self.quantity, self.brand, self.warranty_months
        )
    }
}

/// Perishable goods, tracked with an expiry date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "GroceryRecord")]
pub struct GroceryItem {
    id: EntityId,
    name: String,
    quantity: i64,
    expiry_date: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroceryRecord {
    id: EntityId,
    name: String,
    quantity: i64,
    expiry_date: DateTime<Utc>,
}

impl TryFrom<GroceryRecord> for GroceryItem {
    type Error = DomainError;

    fn try_from(r: GroceryRecord) -> Result<Self, Self::Error> {
        GroceryItem::validated(r.id, r.name, r.quantity, r.expiry_date)
    }
}

impl GroceryItem {
    /// Expiry dates may lie in the past; an expired item is still valid stock.
    pub fn create(
        id: i64,
        name: impl Into<String>,
        quantity: i64,
        expiry_date: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let id = EntityId::try_from(id)?;
        Self::validated(id, name.into(), quantity, expiry_date)
    }

    fn validated(
        id: EntityId,
        name: String,
        quantity: i64,
        expiry_date: DateTime<Utc>,
    ) -> DomainResult<Self> {
        DomainError::ensure_not_blank("name", &name)?;
        DomainError::ensure_non_negative("quantity", quantity)?;
        Ok(Self {
            id,
            name,
            quantity,
            expiry_date,
        })
    }

    pub fn expiry_date(&self) -> DateTime<Utc> {
        self.expiry_date
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expiry_date
    }

    /// Whole days until expiry; negative once expired.
    pub fn days_until_expiry(&self, now: DateTime<Utc>) -> i64 {
        self.expiry_date.signed_duration_since(now).num_days()
    }
}

impl Entity for GroceryItem {
    type Id = EntityId;

    fn id(&self) -> EntityId {
        self.id
    }
}

impl StockItem for GroceryItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn with_quantity(&self, quantity: i64) -> DomainResult<Self> {
        DomainError::ensure_non_negative("quantity", quantity)?;
        Ok(Self {
            quantity,
            ..self.clone()
        })
    }
}

impl core::fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Grocery [ID: {}, Name: {}, Quantity: {}, Expiry: {}]",
            self.id,
            self.name,
            self.quantity,
            self.expiry_date.format("%Y-%m-%d")
        )
    }
}

/// Any warehouse item category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WarehouseItem {
    Electronic(ElectronicItem),
    Grocery(GroceryItem),
}

impl From<ElectronicItem> for WarehouseItem {
    fn from(item: ElectronicItem) -> Self {
        WarehouseItem::Electronic(item)
    }
}

impl From<GroceryItem> for WarehouseItem {
    fn from(item: GroceryItem) -> Self {
        WarehouseItem::Grocery(item)
    }
}

impl WarehouseItem {
    pub fn as_electronic(&self) -> Option<&ElectronicItem> {
        match self {
            WarehouseItem::Electronic(e) => Some(e),
            WarehouseItem::Grocery(_) => None,
        }
    }

    pub fn as_grocery(&self) -> Option<&GroceryItem> {
        match self {
            WarehouseItem::Grocery(g) => Some(g),
            WarehouseItem::Electronic(_) => None,
        }
    }
}

impl Entity for WarehouseItem {
    type Id = EntityId;

    fn id(&self) -> EntityId {
        match self {
            WarehouseItem::Electronic(e) => e.id(),
            WarehouseItem::Grocery(g) => g.id(),
        }
    }
}

impl StockItem for WarehouseItem {
    fn name(&self) -> &str {
        match self {
            WarehouseItem::Electronic(e) => e.name(),
            WarehouseItem::Grocery(g) => g.name(),
        }
    }

    fn quantity(&self) -> i64 {
        match self {
            WarehouseItem::Electronic(e) => e.quantity(),
            WarehouseItem::Grocery(g) => g.quantity(),
        }
    }

    fn with_quantity(&self, quantity: i64) -> DomainResult<Self> {
        Ok(match self {
            WarehouseItem::Electronic(e) => WarehouseItem::Electronic(e.with_quantity(quantity)?),
            WarehouseItem::Grocery(g) => WarehouseItem::Grocery(g.with_quantity(quantity)?),
        })
    }
}

macro_rules! impl_id_equality {
    ($($t:ty),*) => {
        $(
            impl PartialEq for $t {
                fn eq(&self, other: &Self) -> bool {
                    self.id() == other.id()
                }
            }

            impl Eq for $t {}

            impl core::hash::Hash for $t {
                fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                    self.id().hash(state);
                }
            }
        )*
    };
}

impl_id_equality!(ElectronicItem, GroceryItem, WarehouseItem);

impl core::fmt::Display for WarehouseItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WarehouseItem::Electronic(e) => core::fmt::Display::fmt(e, f),
            WarehouseItem::Grocery(g) => core::fmt::Display::fmt(g, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    fn laptop() -> ElectronicItem {
        ElectronicItem::create(1001, "Laptop", 10, "Dell", 24).unwrap()
    }

    fn milk() -> GroceryItem {
        GroceryItem::create(2001, "Milk", 40, now() + Duration::days(5)).unwrap()
    }

    #[test]
    fn electronic_requires_brand_and_name() {
        assert!(ElectronicItem::create(1, "Phone", 1, "", 12).is_err());
        assert!(ElectronicItem::create(1, "", 1, "Acme", 12).is_err());
        assert!(ElectronicItem::create(0, "Phone", 1, "Acme", 12).is_err());
        assert!(ElectronicItem::create(1, "Phone", -4, "Acme", 12).is_err());
    }

    #[test]
    fn grocery_expiry() {
        let g = milk();
        assert!(!g.is_expired(now()));
        assert_eq!(g.days_until_expiry(now()), 5);
        assert!(g.is_expired(now() + Duration::days(6)));
        assert_eq!(g.days_until_expiry(now() + Duration::days(7)), -2);
    }

    #[test]
    fn union_dispatches_capability() {
        let items: Vec<WarehouseItem> = vec![laptop().into(), milk().into()];
        let names: Vec<_> = items.iter().map(|i| i.name().to_string()).collect();
        assert_eq!(names, vec!["Laptop", "Milk"]);
        assert_eq!(items.iter().map(StockItem::quantity).sum::<i64>(), 50);
        assert!(items[0].as_electronic().is_some());
        assert!(items[1].as_grocery().is_some());
    }

    #[test]
    fn union_with_quantity_keeps_variant() {
        let item: WarehouseItem = milk().into();
        let updated = item.with_quantity(3).unwrap();
        assert_eq!(updated.quantity(), 3);
        assert_eq!(item.quantity(), 40);
        assert!(updated.as_grocery().is_some());
        assert!(item.with_quantity(-1).is_err());
    }

    #[test]
    fn union_serializes_with_kind_tag() {
        let item: WarehouseItem = laptop().into();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["kind"], "electronic");
        assert_eq!(json["warrantyMonths"], 24);

        let back: WarehouseItem = serde_json::from_value(json).unwrap();
        let e = back.as_electronic().unwrap();
        assert_eq!(e.brand(), "Dell");
        assert_eq!(e.warranty_months(), 24);
    }

    #[test]
    fn union_rejects_invalid_payload() {
        let json = r#"{"kind":"grocery","id":5,"name":"","quantity":1,"expiryDate":"2025-01-01T00:00:00Z"}"#;
        assert!(serde_json::from_str::<WarehouseItem>(json).is_err());
        let unknown = r#"{"kind":"furniture","id":5,"name":"Chair","quantity":1}"#;
        assert!(serde_json::from_str::<WarehouseItem>(unknown).is_err());
    }

    #[test]
    fn equality_is_by_id() {
        let a = laptop();
        let b = a.with_quantity(1).unwrap();
        assert_eq!(a, b);
        assert_ne!(WarehouseItem::from(a), WarehouseItem::from(milk()));
    }
}
