//! Checkout flow state machine.

use std::str::FromStr;
use std::time::Duration;

use crate::checkout::{OrderConfirmation, PlacedOrder, ShippingInfo, ShippingMethod};
use crate::config::CheckoutConfig;
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    /// Contact, address, and shipping method.
    Shipping,
    /// Payment method and submission.
    Payment,
    /// Order placed.
    Complete,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Complete => "complete",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "Shipping",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Complete => "Complete",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Shipping => 1,
            CheckoutStep::Payment => 2,
            CheckoutStep::Complete => 3,
        }
    }
}

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    PayPal,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::Card, PaymentMethod::PayPal];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::PayPal => "paypal",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit Card",
            PaymentMethod::PayPal => "PayPal",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CommerceError::UnknownPaymentMethod(s.to_string()))
    }
}

/// One pass through checkout.
///
/// `processing` is raised for the whole simulated payment wait and rejects a
/// second submission. The wait cannot be cancelled: a submission future
/// dropped mid-wait leaves the session processing.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSession {
    step: CheckoutStep,
    shipping_info: ShippingInfo,
    shipping_method: ShippingMethod,
    payment_method: PaymentMethod,
    processing: bool,
}

impl Default for CheckoutSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutSession {
    pub fn new() -> Self {
        Self {
            step: CheckoutStep::Shipping,
            shipping_info: ShippingInfo::default(),
            shipping_method: ShippingMethod::default(),
            payment_method: PaymentMethod::default(),
            processing: false,
        }
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn shipping_info(&self) -> &ShippingInfo {
        &self.shipping_info
    }

    pub fn shipping_method(&self) -> ShippingMethod {
        self.shipping_method
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Whether a payment is in flight; the submit action is disabled while set.
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn set_shipping_info(&mut self, info: ShippingInfo) {
        self.shipping_info = info;
    }

    pub fn select_shipping(&mut self, method: ShippingMethod) {
        self.shipping_method = method;
    }

    pub fn select_payment(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    /// Move from the shipping step to payment.
    pub fn continue_to_payment(&mut self) -> Result<(), CommerceError> {
        if self.step != CheckoutStep::Shipping {
            return Err(self.transition_error(CheckoutStep::Payment));
        }
        let missing = self.shipping_info.missing_fields();
        if !missing.is_empty() {
            return Err(CommerceError::CheckoutIncomplete(missing.join(", ")));
        }
        self.step = CheckoutStep::Payment;
        tracing::debug!(step = self.step.as_str(), "Checkout advanced");
        Ok(())
    }

    /// Return to the shipping step.
    pub fn back_to_shipping(&mut self) -> Result<(), CommerceError> {
        if self.step != CheckoutStep::Payment || self.processing {
            return Err(self.transition_error(CheckoutStep::Shipping));
        }
        self.step = CheckoutStep::Shipping;
        Ok(())
    }

    /// Check that an order can be submitted from the current state.
    pub fn ensure_submittable(&self, line_count: usize) -> Result<(), CommerceError> {
        if self.processing {
            return Err(CommerceError::PaymentInProgress);
        }
        if line_count == 0 {
            return Err(CommerceError::EmptyCart);
        }
        if self.step != CheckoutStep::Payment {
            return Err(self.transition_error(CheckoutStep::Complete));
        }
        Ok(())
    }

    /// Simulate the payment round trip and issue a confirmation.
    ///
    /// Payment always succeeds after the configured delay.
    pub async fn submit(
        &mut self,
        order: PlacedOrder,
        config: &CheckoutConfig,
    ) -> Result<OrderConfirmation, CommerceError> {
        self.ensure_submittable(order.lines.len())?;

        self.processing = true;
        tracing::info!(
            payment = self.payment_method.as_str(),
            total = %order.totals.total.display(),
            "Processing payment"
        );
        tokio::time::sleep(Duration::from_millis(config.payment_delay_ms)).await;

        let today = chrono::Local::now().date_naive();
        let confirmation = OrderConfirmation::issue(
            order,
            today,
            config.estimated_delivery_days,
            &mut rand::thread_rng(),
        );

        self.processing = false;
        self.step = CheckoutStep::Complete;
        tracing::info!(order = %confirmation.order_number, "Order placed");
        Ok(confirmation)
    }

    fn transition_error(&self, to: CheckoutStep) -> CommerceError {
        CommerceError::InvalidCheckoutTransition {
            from: self.step.as_str().to_string(),
            to: to.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartLine;
    use crate::catalog::fixtures;
    use crate::checkout::calculate;
    use crate::config::PricingConfig;

    fn info() -> ShippingInfo {
        ShippingInfo {
            email: "sarah.johnson@example.com".to_string(),
            first_name: "Sarah".to_string(),
            last_name: "Johnson".to_string(),
            address: "123 Main Street".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            zip_code: "10001".to_string(),
            ..ShippingInfo::default()
        }
    }

    fn order(quantity: u32) -> PlacedOrder {
        let lines = if quantity == 0 {
            vec![]
        } else {
            vec![CartLine::new(fixtures::products().remove(1), quantity, None)]
        };
        let totals = calculate(&lines, None, ShippingMethod::Express, &PricingConfig::default());
        PlacedOrder {
            lines,
            totals,
            shipping_method: ShippingMethod::Express,
            payment_method: PaymentMethod::PayPal,
            shipping_info: info(),
        }
    }

    fn fast() -> CheckoutConfig {
        CheckoutConfig {
            payment_delay_ms: 1,
            ..CheckoutConfig::default()
        }
    }

    #[test]
    fn test_shipping_step_requires_fields() {
        let mut session = CheckoutSession::new();
        let err = session.continue_to_payment().unwrap_err();
        assert!(matches!(err, CommerceError::CheckoutIncomplete(ref m) if m.starts_with("email")));
        assert_eq!(session.step(), CheckoutStep::Shipping);

        session.set_shipping_info(info());
        session.continue_to_payment().unwrap();
        assert_eq!(session.step(), CheckoutStep::Payment);
        assert_eq!(session.step().number(), 2);
    }

    #[test]
    fn test_back_to_shipping() {
        let mut session = CheckoutSession::new();
        assert!(session.back_to_shipping().is_err());

        session.set_shipping_info(info());
        session.continue_to_payment().unwrap();
        session.back_to_shipping().unwrap();
        assert_eq!(session.step(), CheckoutStep::Shipping);
    }

    #[test]
    fn test_payment_method_parse() {
        assert_eq!("paypal".parse::<PaymentMethod>().unwrap(), PaymentMethod::PayPal);
        assert_eq!("CARD".parse::<PaymentMethod>().unwrap(), PaymentMethod::Card);
        assert!("cash".parse::<PaymentMethod>().is_err());
    }

    #[tokio::test]
    async fn test_submit_requires_payment_step() {
        let mut session = CheckoutSession::new();
        let err = session.submit(order(1), &fast()).await.unwrap_err();
        assert!(matches!(err, CommerceError::InvalidCheckoutTransition { .. }));
    }

    #[tokio::test]
    async fn test_submit_rejects_empty_cart() {
        let mut session = CheckoutSession::new();
        session.set_shipping_info(info());
        session.continue_to_payment().unwrap();

        let err = session.submit(order(0), &fast()).await.unwrap_err();
        assert!(matches!(err, CommerceError::EmptyCart));
    }

    #[tokio::test]
    async fn test_submit_issues_confirmation() {
        let mut session = CheckoutSession::new();
        session.set_shipping_info(info());
        session.select_payment(PaymentMethod::PayPal);
        session.continue_to_payment().unwrap();

        let confirmation = session.submit(order(2), &fast()).await.unwrap();
        assert!(!session.is_processing());
        assert_eq!(session.step(), CheckoutStep::Complete);
        assert_eq!(confirmation.item_count(), 2);
        assert_eq!(confirmation.payment_method, PaymentMethod::PayPal);
        assert_eq!(
            confirmation.estimated_delivery - confirmation.order_date,
            chrono::Duration::days(5)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_interrupted_submit_stays_processing() {
        let mut session = CheckoutSession::new();
        session.set_shipping_info(info());
        session.continue_to_payment().unwrap();

        let config = CheckoutConfig::default();
        let first = tokio::time::timeout(
            Duration::from_millis(10),
            session.submit(order(1), &config),
        )
        .await;
        assert!(first.is_err());
        assert!(session.is_processing());

        let err = session.submit(order(1), &config).await.unwrap_err();
        assert!(matches!(err, CommerceError::PaymentInProgress));
        assert!(session.back_to_shipping().is_err());
    }
}
