//! Customer review types.

use crate::ids::{ReviewId, UserId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A customer review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub user_id: UserId,
    /// Display name, usually first name and initial.
    pub user_name: String,
    /// Star rating, 1-5.
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
    /// Reviewer bought the product.
    pub verified: bool,
}

impl Review {
    /// Star string for terminal display, e.g. "★★★★☆".
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        format!("{}{}", "\u{2605}".repeat(filled), "\u{2606}".repeat(5 - filled))
    }
}
