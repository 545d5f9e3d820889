//! Order aggregate and its line items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::money::{Currency, Money};
use crate::error::DomainError;

/// Unique identifier for an Order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Creates a new random OrderId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an OrderId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for OrderId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Unique identifier for a Customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(Uuid);

impl CustomerId {
    /// Creates a new random CustomerId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a CustomerId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CustomerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CustomerId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Unique identifier for a Product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Creates a new random ProductId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a ProductId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// The lifecycle state of an order.
///
/// `Cancelled` is declared for future use; no transition produces it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Paid => write!(f, "paid"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A single line item within an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// The product being ordered
    pub product_id: ProductId,
    /// Human-readable product name
    pub product_name: String,
    /// Units ordered
    pub quantity: u32,
    /// Price per unit
    pub unit_price: Money,
}

impl OrderLine {
    /// Creates a new order line.
    pub fn new(
        product_id: ProductId,
        product_name: impl Into<String>,
        quantity: u32,
        unit_price: Money,
    ) -> Self {
        Self {
            product_id,
            product_name: product_name.into(),
            quantity,
            unit_price,
        }
    }

    /// Returns the total price for this line (`unit_price * quantity`).
    pub fn total_price(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}

/// An order placed by a customer.
///
/// The order owns its lines and is the consistency boundary for them:
/// lines change only through `add_line`/`remove_line`, and only while the
/// order is still pending. `pay()` is the single state transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    lines: Vec<OrderLine>,
    status: OrderStatus,
    version: u64,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new pending order with no lines.
    pub fn new(id: OrderId, customer_id: CustomerId) -> Self {
        Self {
            id,
            customer_id,
            lines: Vec::new(),
            status: OrderStatus::Pending,
            version: 0,
            created_at: Utc::now(),
        }
    }

    /// Unique identifier, assigned at creation.
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// The customer who placed the order.
    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    /// Line items in insertion order.
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Current lifecycle state.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Monotonic counter bumped on each state transition.
    /// Not compared anywhere yet - reserved for optimistic concurrency.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// When the order was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Appends a line item.
    ///
    /// Quantity and price are taken as given; callers own input validation.
    pub fn add_line(
        &mut self,
        product_id: ProductId,
        product_name: impl Into<String>,
        quantity: u32,
        unit_price: Money,
    ) -> Result<(), DomainError> {
        if self.status == OrderStatus::Paid {
            return Err(DomainError::PaidOrderImmutable);
        }

        self.lines
            .push(OrderLine::new(product_id, product_name, quantity, unit_price));
        self.check_invariants()
    }

    /// Removes every line for the given product. Unknown products are a no-op.
    pub fn remove_line(&mut self, product_id: ProductId) -> Result<(), DomainError> {
        if self.status == OrderStatus::Paid {
            return Err(DomainError::PaidOrderImmutable);
        }

        self.lines.retain(|line| line.product_id != product_id);
        self.check_invariants()
    }

    /// Transitions the order from pending to paid.
    pub fn pay(&mut self) -> Result<(), DomainError> {
        if self.status == OrderStatus::Paid {
            return Err(DomainError::AlreadyPaid);
        }

        if self.lines.is_empty() {
            return Err(DomainError::EmptyOrder);
        }

        self.status = OrderStatus::Paid;
        self.version += 1;
        Ok(())
    }

    /// Sum of all line totals, recomputed on every call.
    ///
    /// A line set spanning more than one currency cannot be totalled.
    pub fn total_amount(&self) -> Result<Money, DomainError> {
        let mut lines = self.lines.iter();

        let first = match lines.next() {
            Some(line) => line.total_price(),
            None => return Ok(Money::zero(Currency::default())),
        };

        lines.try_fold(first, |total, line| total.checked_add(line.total_price()))
    }

    // Hook for future aggregate-level invariants.
    fn check_invariants(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
