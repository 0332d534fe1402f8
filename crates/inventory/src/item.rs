use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockbook_core::{DomainError, DomainResult, Entity, EntityId};

use crate::status::StockStatus;
use crate::stock::StockItem;

/// Inventory record: a named quantity of stock, dated when it was added.
///
/// Immutable once built. Changes go through `with_*` methods which return a
/// new validated value. Equality and hashing look at `id` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "InventoryItemRecord")]
pub struct InventoryItem {
    id: EntityId,
    name: String,
    quantity: i64,
    date_added: DateTime<Utc>,
}

/// Wire shape of [`InventoryItem`]; converted through the same checks as `create`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InventoryItemRecord {
    id: EntityId,
    name: String,
    quantity: i64,
    date_added: DateTime<Utc>,
}

impl TryFrom<InventoryItemRecord> for InventoryItem {
    type Error = DomainError;

    // The future-date rule only applies at creation time.
    fn try_from(record: InventoryItemRecord) -> Result<Self, Self::Error> {
        DomainError::ensure_not_blank("name", &record.name)?;
        DomainError::ensure_non_negative("quantity", record.quantity)?;
        Ok(Self {
            id: record.id,
            name: record.name,
            quantity: record.quantity,
            date_added: record.date_added,
        })
    }
}

impl InventoryItem {
    /// Validating factory, checked against the current clock.
    pub fn create(
        id: i64,
        name: impl Into<String>,
        quantity: i64,
        date_added: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Self::create_at(Utc::now(), id, name, quantity, date_added)
    }

    /// Validating factory with an explicit "now".
    ///
    /// Fails when `id <= 0`, `name` is blank, `quantity < 0`, or `date_added`
    /// lies after `now`.
    pub fn create_at(
        now: DateTime<Utc>,
        id: i64,
        name: impl Into<String>,
        quantity: i64,
        date_added: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let id = EntityId::try_from(id)?;
        let name = name.into();
        DomainError::ensure_not_blank("name", &name)?;
        DomainError::ensure_non_negative("quantity", quantity)?;
        if date_added > now {
            return Err(DomainError::validation("date added cannot be in the future"));
        }

        Ok(Self {
            id,
            name,
            quantity,
            date_added,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn date_added(&self) -> DateTime<Utc> {
        self.date_added
    }

    pub fn status(&self) -> StockStatus {
        StockStatus::from_quantity(self.quantity)
    }

    /// Whole days elapsed between `date_added` and `now`.
    pub fn age_days(&self, now: DateTime<Utc>) -> i64 {
        now.signed_duration_since(self.date_added).num_days()
    }

    pub fn with_quantity(&self, quantity: i64) -> DomainResult<Self> {
        DomainError::ensure_non_negative("quantity", quantity)?;
        Ok(Self {
            quantity,
            ..self.clone()
        })
    }

    pub fn with_name(&self, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        DomainError::ensure_not_blank("name", &name)?;
        Ok(Self {
            name,
            ..self.clone()
        })
    }
}

impl Entity for InventoryItem {
    type Id = EntityId;

    fn id(&self) -> EntityId {
        self.id
    }
}

impl StockItem for InventoryItem {
    fn name(&self) -> &str {
        InventoryItem::name(self)
    }

    fn quantity(&self) -> i64 {
        InventoryItem::quantity(self)
    }

    fn with_quantity(&self, quantity: i64) -> DomainResult<Self> {
        InventoryItem::with_quantity(self, quantity)
    }
}

impl PartialEq for InventoryItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for InventoryItem {}

impl core::hash::Hash for InventoryItem {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl core::fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "InventoryItem {{ ID: {}, Name: '{}', Quantity: {}, DateAdded: {}, Status: {} }}",
            self.id,
            self.name,
            self.quantity,
            self.date_added.format("%Y-%m-%d"),
            self.status()
        )
    }
}
