//! Data Transfer Objects (DTOs) for requests and responses.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Currency, CustomerId, Money, Order, OrderId, OrderStatus, ProductId};
use crate::error::DomainError;

// ─────────────────────────────────────────────────────────────────────────────
// Order DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to open a new order for a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// The customer placing the order
    pub customer_id: CustomerId,
}

/// Request to append a line item to a pending order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddLineRequest {
    /// The product being ordered
    pub product_id: ProductId,
    /// Human-readable product name
    pub product_name: String,
    /// Units ordered
    pub quantity: u32,
    /// Price per unit, as an exact decimal
    pub unit_price: Decimal,
    /// Currency of the unit price (USD when omitted)
    #[serde(default)]
    pub currency: Currency,
}

/// A line item as returned to API clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineResponse {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub currency: Currency,
    pub total_price: Decimal,
}

/// An order as returned to API clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub status: OrderStatus,
    pub version: u64,
    /// Formatted total across all lines, e.g. `"$100"`
    pub total: String,
    pub lines: Vec<OrderLineResponse>,
}

impl OrderResponse {
    /// Builds the client view of an order.
    ///
    /// Fails when the line set spans more than one currency, because no
    /// single total exists for it.
    pub fn from_order(order: &Order) -> Result<Self, DomainError> {
        let total = order.total_amount()?;

        Ok(Self {
            id: order.id(),
            customer_id: order.customer_id(),
            status: order.status(),
            version: order.version(),
            total: total.to_string(),
            lines: order
                .lines()
                .iter()
                .map(|line| OrderLineResponse {
                    product_id: line.product_id,
                    product_name: line.product_name.clone(),
                    quantity: line.quantity,
                    unit_price: line.unit_price.amount(),
                    currency: line.unit_price.currency(),
                    total_price: line.total_price().amount(),
                })
                .collect(),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Structured outcome of a payment attempt.
///
/// The use case reports through this value on every path - callers never
/// see an error from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResult {
    pub success: bool,
    pub order_id: OrderId,
    /// Bare decimal amount charged, `"0"` when nothing was charged
    pub amount_paid: String,
    pub message: String,
}

impl PaymentResult {
    /// A successful charge of the given amount.
    pub fn success(order_id: OrderId, amount: Money) -> Self {
        Self {
            success: true,
            order_id,
            amount_paid: amount.amount().to_string(),
            message: "Order paid successfully".into(),
        }
    }

    /// A failed attempt; nothing was charged.
    pub fn failure(order_id: OrderId, message: impl Into<String>) -> Self {
        Self {
            success: false,
            order_id,
            amount_paid: "0".into(),
            message: message.into(),
        }
    }
}
