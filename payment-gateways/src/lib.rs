//! # Payment Gateways
//!
//! Gateway adapters implementing the `PaymentGateway` port. No real
//! processor is integrated; the one adapter here simulates an acquirer
//! that approves a configurable fraction of charges.

use async_trait::async_trait;

use orders_types::{GatewayError, Money, OrderId, PaymentGateway};

/// Default fraction of charges the simulated acquirer approves.
pub const DEFAULT_APPROVAL_RATE: f64 = 0.8;

/// Simulated payment gateway.
///
/// Each charge is approved with the configured probability. The roll is
/// independent per call, so retrying a declined charge may succeed.
#[derive(Debug, Clone)]
pub struct FakePaymentGateway {
    approval_rate: f64,
}

impl FakePaymentGateway {
    /// Creates a gateway approving the given fraction of charges,
    /// clamped to `[0.0, 1.0]`.
    pub fn new(approval_rate: f64) -> Self {
        Self {
            approval_rate: approval_rate.clamp(0.0, 1.0),
        }
    }

    /// Gateway that approves every charge.
    pub fn always_approve() -> Self {
        Self::new(1.0)
    }

    /// Gateway that declines every charge.
    pub fn always_decline() -> Self {
        Self::new(0.0)
    }

    /// The configured approval rate.
    pub fn approval_rate(&self) -> f64 {
        self.approval_rate
    }
}

impl Default for FakePaymentGateway {
    fn default() -> Self {
        Self::new(DEFAULT_APPROVAL_RATE)
    }
}

#[async_trait]
impl PaymentGateway for FakePaymentGateway {
    async fn charge(&self, order_id: OrderId, amount: Money) -> Result<bool, GatewayError> {
        let approved = rand::random::<f64>() < self.approval_rate;

        if approved {
            tracing::info!(%order_id, %amount, "charge approved");
        } else {
            tracing::warn!(%order_id, %amount, "charge declined");
        }

        Ok(approved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orders_types::Currency;
    use rust_decimal_macros::dec;

    fn amount() -> Money {
        Money::new(dec!(100), Currency::USD).unwrap()
    }

    #[tokio::test]
    async fn test_always_approve() {
        let gateway = FakePaymentGateway::always_approve();

        for _ in 0..20 {
            assert!(gateway.charge(OrderId::new(), amount()).await.unwrap());
        }
    }

    #[tokio::test]
    async fn test_always_decline() {
        let gateway = FakePaymentGateway::always_decline();

        for _ in 0..20 {
            assert!(!gateway.charge(OrderId::new(), amount()).await.unwrap());
        }
    }

    #[test]
    fn test_rate_is_clamped() {
        assert_eq!(FakePaymentGateway::new(1.7).approval_rate(), 1.0);
        assert_eq!(FakePaymentGateway::new(-0.3).approval_rate(), 0.0);
        assert_eq!(FakePaymentGateway::default().approval_rate(), 0.8);
    }
}
