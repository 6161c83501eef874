//! Order confirmation.

use crate::cart::CartLine;
use crate::checkout::{OrderTotals, PaymentMethod, ShippingInfo, ShippingMethod};
use crate::ids::OrderId;
use chrono::{Datelike, Days, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Receipt for a placed order. Lives for the rest of the session only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    /// e.g. "ORD-2024-004217".
    pub order_number: OrderId,
    /// e.g. "TRK123456789".
    pub tracking_number: String,
    pub order_date: NaiveDate,
    pub estimated_delivery: NaiveDate,
    pub lines: Vec<CartLine>,
    pub totals: OrderTotals,
    pub shipping_method: ShippingMethod,
    pub payment_method: PaymentMethod,
    pub shipping_info: ShippingInfo,
}

/// What was bought and how, before numbers are assigned.
#[derive(Debug, Clone)]
pub struct PlacedOrder {
    pub lines: Vec<CartLine>,
    pub totals: OrderTotals,
    pub shipping_method: ShippingMethod,
    pub payment_method: PaymentMethod,
    pub shipping_info: ShippingInfo,
}

impl OrderConfirmation {
    /// Assign order and tracking numbers and delivery date.
    pub fn issue<R: Rng + ?Sized>(
        order: PlacedOrder,
        order_date: NaiveDate,
        delivery_days: u32,
        rng: &mut R,
    ) -> Self {
        let estimated_delivery = order_date
            .checked_add_days(Days::new(u64::from(delivery_days)))
            .unwrap_or(order_date);

        Self {
            order_number: order_number(order_date.year(), rng),
            tracking_number: tracking_number(rng),
            order_date,
            estimated_delivery,
            lines: order.lines,
            totals: order.totals,
            shipping_method: order.shipping_method,
            payment_method: order.payment_method,
            shipping_info: order.shipping_info,
        }
    }

    /// Total units ordered.
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |n, l| n.saturating_add(l.quantity))
    }
}

fn order_number<R: Rng + ?Sized>(year: i32, rng: &mut R) -> OrderId {
    OrderId::new(format!("ORD-{}-{:06}", year, rng.gen_range(0..1_000_000u32)))
}

fn tracking_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("TRK{:09}", rng.gen_range(0..1_000_000_000u32))
}
