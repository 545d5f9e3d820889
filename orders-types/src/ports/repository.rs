//! Order repository port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (in-memory today, a database tomorrow) implement this trait.

use crate::domain::{Order, OrderId};
use crate::error::RepoError;

/// Keyed store mapping order identifiers to orders.
#[async_trait::async_trait]
pub trait OrderRepository: Send + Sync + 'static {
    /// Loads an order by ID. Fails with `RepoError::NotFound` when absent.
    async fn get_by_id(&self, order_id: OrderId) -> Result<Order, RepoError>;

    /// Persists an order, overwriting any previous state (idempotent upsert).
    async fn save(&self, order: &Order) -> Result<(), RepoError>;
}
