//! Orders as returned by the API plus the client side draft used to build one

use chrono::{DateTime, Utc};
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::{
    catalog::Product,
    errors::OrderDraftError,
    id::DbId,
    req_args::orders::{NewOrderLine, NewOrderReqArgs},
};

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct Order {
    pub id: DbId,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub total: f64,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "orderItems", default)]
    pub items: Vec<OrderItem>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct OrderItem {
    #[serde(default)]
    pub id: Option<DbId>,
    pub product: Product,
    pub quantity: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub price: f64,
}

impl Order {
    pub fn units(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

impl OrderItem {
    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// Figures shown on the dashboard
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SalesSummary {
    pub revenue: f64,
    pub order_count: usize,
    pub units: u64,
    pub average_order_value: f64,
}

impl SalesSummary {
    pub fn from_orders(orders: &[Order]) -> Self {
        let revenue: f64 = orders.iter().map(|order| order.total).sum();
        let order_count = orders.len();
        let units = orders.iter().map(Order::units).sum();
        let average_order_value = if order_count == 0 {
            0.0
        } else {
            revenue / order_count as f64
        };
        Self {
            revenue,
            order_count,
            units,
            average_order_value,
        }
    }
}

/// A line of an order that has not been sent yet
#[derive(Debug, Clone, PartialEq)]
pub struct DraftLine {
    pub product: Product,
    pub quantity: u32,
}

/// Order being put together on the order creation screen
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OrderDraft {
    lines: Vec<DraftLine>,
}

impl DraftLine {
    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

impl OrderDraft {
    pub fn lines(&self) -> &[DraftLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds one unit of `product`, a product already in the draft has its
    /// quantity increased instead
    pub fn add(&mut self, product: &Product) {
        match self.lines.iter_mut().find(|x| x.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(DraftLine {
                product: product.clone(),
                quantity: 1,
            }),
        }
    }

    /// A quantity of zero removes the line
    pub fn set_quantity(&mut self, product_id: DbId, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
        } else if let Some(line) = self.lines.iter_mut().find(|x| x.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    pub fn remove(&mut self, product_id: DbId) {
        self.lines.retain(|x| x.product.id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(DraftLine::subtotal).sum()
    }

    pub fn units(&self) -> u64 {
        self.lines.iter().map(|x| u64::from(x.quantity)).sum()
    }

    pub fn to_req_args(&self) -> Result<NewOrderReqArgs, OrderDraftError> {
        if self.lines.is_empty() {
            return Err(OrderDraftError::Empty);
        }
        Ok(NewOrderReqArgs {
            items: self
                .lines
                .iter()
                .map(|line| NewOrderLine {
                    product_id: line.product.id,
                    quantity: line.quantity,
                })
                .collect(),
        })
    }
}
