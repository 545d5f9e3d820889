//! Order Application Service
//!
//! Orchestrates order management through the repository port.
//! Contains NO infrastructure logic - pure business orchestration.

use std::sync::Arc;

use orders_types::{
    AddLineRequest, AppError, CreateOrderRequest, Money, Order, OrderId, OrderRepository,
    OrderResponse, ProductId,
};

/// Application service for order management.
///
/// Generic over `R: OrderRepository` - the adapter is injected at compile
/// time, so the same service runs against the in-memory repository in tests
/// and whatever storage the binary wires in.
pub struct OrderService<R: OrderRepository> {
    repo: Arc<R>,
}

impl<R: OrderRepository> OrderService<R> {
    /// Creates a new order service with the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Opens a new empty order for a customer.
    pub async fn create_order(&self, req: CreateOrderRequest) -> Result<OrderResponse, AppError> {
        let order = Order::new(OrderId::new(), req.customer_id);
        self.repo.save(&order).await?;

        tracing::info!(order_id = %order.id(), customer_id = %order.customer_id(), "order created");

        OrderResponse::from_order(&order).map_err(Into::into)
    }

    /// Gets an order by ID.
    pub async fn get_order(&self, order_id: OrderId) -> Result<OrderResponse, AppError> {
        let order = self.repo.get_by_id(order_id).await?;
        OrderResponse::from_order(&order).map_err(Into::into)
    }

    /// Appends a line item to a pending order.
    pub async fn add_line(
        &self,
        order_id: OrderId,
        req: AddLineRequest,
    ) -> Result<OrderResponse, AppError> {
        let unit_price = Money::new(req.unit_price, req.currency)?;

        let mut order = self.repo.get_by_id(order_id).await?;
        order.add_line(req.product_id, req.product_name, req.quantity, unit_price)?;
        self.repo.save(&order).await?;

        OrderResponse::from_order(&order).map_err(Into::into)
    }

    /// Removes all lines for a product from a pending order.
    pub async fn remove_line(
        &self,
        order_id: OrderId,
        product_id: ProductId,
    ) -> Result<OrderResponse, AppError> {
        let mut order = self.repo.get_by_id(order_id).await?;
        order.remove_line(product_id)?;
        self.repo.save(&order).await?;

        OrderResponse::from_order(&order).map_err(Into::into)
    }
}
