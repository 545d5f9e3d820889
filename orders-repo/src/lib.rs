//! # Orders Repository
//!
//! Concrete repository implementation (adapter) for the order payments
//! service. The service keeps no durable state, so the only adapter is an
//! in-memory keyed store implementing the `OrderRepository` port.

use async_trait::async_trait;
use dashmap::DashMap;

use orders_types::{Order, OrderId, OrderRepository, RepoError};


/// In-memory order store.
///
/// Orders are cloned in and out, so callers always hold a private copy;
/// nothing they do to it is visible until they `save` again.
#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: DashMap<OrderId, Order>,
}

impl InMemoryOrderRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Returns true when nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn get_by_id(&self, order_id: OrderId) -> Result<Order, RepoError> {
        self.orders
            .get(&order_id)
            .map(|entry| entry.value().clone())
            .ok_or(RepoError::NotFound)
    }

    async fn save(&self, order: &Order) -> Result<(), RepoError> {
        self.orders.insert(order.id(), order.clone());
        Ok(())
    }
}
