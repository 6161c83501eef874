//! Demo customer account: profile, order history, saved addresses.

use crate::ids::{AddressId, OrderId, UserId};
use crate::money::{Currency, Money};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    Pending,
    /// Order confirmed.
    Confirmed,
    /// Order being prepared.
    Processing,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub join_date: NaiveDate,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Initials for the avatar, e.g. "SJ".
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .collect()
    }
}

/// A past order in the history tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: OrderId,
    pub date: NaiveDate,
    pub status: OrderStatus,
    pub total: Money,
    pub item_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
}

/// A saved shipping address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAddress {
    pub id: AddressId,
    /// Label such as "Home".
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub is_default: bool,
}

impl SavedAddress {
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}, {}",
            self.street, self.city, self.state, self.zip_code, self.country
        )
    }
}

/// Everything the account screens show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub profile: UserProfile,
    pub orders: Vec<OrderSummary>,
    pub addresses: Vec<SavedAddress>,
}

impl Account {
    /// The demo customer.
    pub fn demo() -> Self {
        Self {
            profile: UserProfile {
                id: UserId::new("1"),
                first_name: "Sarah".to_string(),
                last_name: "Johnson".to_string(),
                email: "sarah.johnson@example.com".to_string(),
                phone: "+1 (555) 123-4567".to_string(),
                join_date: date(2023, 1, 15),
            },
            orders: vec![
                order(
                    "ORD-001",
                    date(2024, 1, 20),
                    OrderStatus::Delivered,
                    8997,
                    3,
                    Some("TRK123456789"),
                ),
                order(
                    "ORD-002",
                    date(2024, 1, 15),
                    OrderStatus::Shipped,
                    4599,
                    2,
                    Some("TRK987654321"),
                ),
                order(
                    "ORD-003",
                    date(2024, 1, 10),
                    OrderStatus::Processing,
                    12998,
                    4,
                    None,
                ),
            ],
            addresses: vec![
                address("1", "Home", "123 Main Street", "10001", true),
                address("2", "Work", "456 Office Plaza", "10002", false),
            ],
        }
    }

    pub fn default_address(&self) -> Option<&SavedAddress> {
        self.addresses.iter().find(|a| a.is_default)
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn order(
    id: &str,
    date: NaiveDate,
    status: OrderStatus,
    total_cents: i64,
    item_count: u32,
    tracking: Option<&str>,
) -> OrderSummary {
    OrderSummary {
        id: OrderId::new(id),
        date,
        status,
        total: Money::from_cents(total_cents, Currency::USD),
        item_count,
        tracking_number: tracking.map(str::to_string),
    }
}

fn address(id: &str, name: &str, street: &str, zip: &str, is_default: bool) -> SavedAddress {
    SavedAddress {
        id: AddressId::new(id),
        name: name.to_string(),
        street: street.to_string(),
        city: "New York".to_string(),
        state: "NY".to_string(),
        zip_code: zip.to_string(),
        country: "United States".to_string(),
        is_default,
    }
}
