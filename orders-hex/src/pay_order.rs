//! Pay Order Use Case
//!
//! Orchestrates a single payment attempt: load the order, transition it to
//! paid, charge the gateway, persist on approval. This is the one error
//! boundary of the service - every failure comes back as a structured
//! `PaymentResult`, never as an error.

use std::sync::Arc;

use orders_types::{
    DomainError, GatewayError, OrderId, OrderRepository, PaymentGateway, PaymentResult, RepoError,
};

/// Everything that can interrupt a payment attempt before a result exists.
///
/// Domain violations carry their own message to the caller; infrastructure
/// failures are reported as unexpected.
#[derive(Debug, thiserror::Error)]
enum PayOrderError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repo(#[from] RepoError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Use case for paying an order.
pub struct PayOrderUseCase<R: OrderRepository, G: PaymentGateway> {
    repo: Arc<R>,
    gateway: Arc<G>,
}

impl<R: OrderRepository, G: PaymentGateway> PayOrderUseCase<R, G> {
    /// Creates the use case over a repository and a payment gateway.
    pub fn new(repo: Arc<R>, gateway: Arc<G>) -> Self {
        Self { repo, gateway }
    }

    /// Attempts to pay the given order.
    pub async fn execute(&self, order_id: OrderId) -> PaymentResult {
        match self.settle(order_id).await {
            Ok(result) => result,
            Err(PayOrderError::Domain(err)) => {
                tracing::warn!(%order_id, %err, "payment rejected");
                PaymentResult::failure(order_id, err.to_string())
            }
            Err(err) => {
                tracing::error!(%order_id, %err, "payment failed unexpectedly");
                PaymentResult::failure(order_id, format!("Unexpected error: {err}"))
            }
        }
    }

    async fn settle(&self, order_id: OrderId) -> Result<PaymentResult, PayOrderError> {
        let mut order = self.repo.get_by_id(order_id).await?;

        order.pay()?;
        let total = order.total_amount()?;

        let approved = self.gateway.charge(order_id, total).await?;
        if !approved {
            // The in-memory transition stands; the stored copy is untouched.
            return Ok(PaymentResult::failure(
                order_id,
                "Payment gateway declined the transaction",
            ));
        }

        self.repo.save(&order).await?;

        tracing::info!(%order_id, amount = %total, "order paid");
        Ok(PaymentResult::success(order_id, total))
    }
}
