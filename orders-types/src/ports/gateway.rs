//! Payment gateway port.
//!
//! This trait defines the interface for charging a customer's payment
//! method. Implementations can be real processor clients, simulated
//! gateways, test stubs, etc.

use crate::domain::{Money, OrderId};

/// Error type for gateway operations.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Payment gateway unavailable: {0}")]
    Unavailable(String),
}

/// Port trait for payment gateways.
///
/// `charge` resolves to `Ok(false)` when the processor declines the
/// transaction; `Err` is reserved for infrastructure failures.
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
    /// Attempts to charge the given amount for an order.
    async fn charge(&self, order_id: OrderId, amount: Money) -> Result<bool, GatewayError>;
}
