/// Mock submission boundary
///
/// The enquiry form and both checkout flows hand their payloads to a
/// simulated backend that resolves to a `{success, message}` outcome after a
/// short delay. The delay is injectable so tests run with `Duration::ZERO`.
/// There is no retry, cancellation, or backpressure; real delivery is out of
/// scope.

use std::time::Duration;

use chrono::NaiveDate;
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::order::cart::Order;

/// Time the mock backend takes to "process" a submission
pub const SUBMIT_DELAY: Duration = Duration::from_secs(1);

/// What the enquiry is about; bookings carry extra scheduling fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnquiryType {
    Booking,
    Songwriting,
    Other,
}

/// A contact/enquiry form payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enquiry {
    pub name: String,
    pub email: String,
    pub message: String,
    pub enquiry_type: EnquiryType,
    pub phone: Option<String>,
    pub event_date: Option<NaiveDate>,
    /// KES budget for performance bookings
    pub performance_budget: Option<Decimal>,
    /// Free-form budget range for songwriting enquiries
    pub songwriting_budget: Option<String>,
}

impl Enquiry {
    /// Serialize the payload for the backend collaborator
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Field checks applied before the mock backend "accepts" the enquiry
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Please provide your name.".to_string());
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err("Please provide a valid email address.".to_string());
        }
        if self.message.trim().is_empty() {
            return Err("Please include a message.".to_string());
        }
        if self.enquiry_type == EnquiryType::Booking {
            if self.event_date.is_none() {
                return Err("Booking enquiries need an event date.".to_string());
            }
            if self.phone.as_deref().map_or(true, |p| p.trim().is_empty()) {
                return Err("Booking enquiries need a phone number.".to_string());
            }
        }
        if self.enquiry_type == EnquiryType::Songwriting
            && self
                .songwriting_budget
                .as_deref()
                .map_or(true, |b| b.trim().is_empty())
        {
            return Err("Please indicate a songwriting budget range.".to_string());
        }
        if matches!(self.performance_budget, Some(budget) if budget < Decimal::ZERO) {
            return Err("Budgets cannot be negative.".to_string());
        }
        Ok(())
    }
}

/// How the customer pays at checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Mobile money; the prompt goes to this phone number
    Mpesa { phone: String },
    Card,
}

/// Result shape shared by every submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitOutcome {
    pub success: bool,
    pub message: String,
}

impl SubmitOutcome {
    fn ok(message: String) -> Self {
        SubmitOutcome {
            success: true,
            message,
        }
    }

    fn failed(message: String) -> Self {
        SubmitOutcome {
            success: false,
            message,
        }
    }
}

/// Submit an enquiry with the standard processing delay
pub async fn submit_enquiry(enquiry: &Enquiry) -> SubmitOutcome {
    submit_enquiry_after(enquiry, SUBMIT_DELAY).await
}

/// Submit an enquiry after an injected delay (tests pass `Duration::ZERO`)
pub async fn submit_enquiry_after(enquiry: &Enquiry, delay: Duration) -> SubmitOutcome {
    tokio::time::sleep(delay).await;

    match enquiry.validate() {
        Ok(()) => SubmitOutcome::ok(
            "Thank you for your message. We will get back to you soon!".to_string(),
        ),
        Err(message) => SubmitOutcome::failed(message),
    }
}

/// Submit an order for mock payment with the standard processing delay
pub async fn submit_order(order: &Order, payment: &PaymentMethod) -> SubmitOutcome {
    submit_order_after(order, payment, SUBMIT_DELAY).await
}

/// Submit an order after an injected delay (tests pass `Duration::ZERO`)
///
/// On success the message carries the mock order number; the caller is
/// expected to clear the order afterwards.
pub async fn submit_order_after(
    order: &Order,
    payment: &PaymentMethod,
    delay: Duration,
) -> SubmitOutcome {
    tokio::time::sleep(delay).await;

    if order.is_empty() {
        return SubmitOutcome::failed("Your cart is empty.".to_string());
    }

    if let PaymentMethod::Mpesa { phone } = payment {
        if phone.trim().is_empty() {
            return SubmitOutcome::failed(
                "An M-PESA phone number is required to complete payment.".to_string(),
            );
        }
    }

    SubmitOutcome::ok(format!(
        "Order {} confirmed. A confirmation email is on its way.",
        order_number()
    ))
}

/// Mock order number: "ORD-" plus up to six random digits
pub fn order_number() -> String {
    let n: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("ORD-{n}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data::default_products;

    fn valid_enquiry() -> Enquiry {
        Enquiry {
            name: "Amina W.".to_string(),
            email: "amina@example.com".to_string(),
            message: "Booking for a private event.".to_string(),
            enquiry_type: EnquiryType::Booking,
            phone: Some("0712 345 678".to_string()),
            event_date: NaiveDate::from_ymd_opt(2025, 8, 30),
            performance_budget: Some(Decimal::from(250_000)),
            songwriting_budget: None,
        }
    }

    #[tokio::test]
    async fn test_valid_enquiry_succeeds() {
        let outcome = submit_enquiry_after(&valid_enquiry(), Duration::ZERO).await;
        assert!(outcome.success);
        assert!(outcome.message.contains("Thank you"));
    }

    #[tokio::test]
    async fn test_enquiry_requires_valid_email() {
        let mut enquiry = valid_enquiry();
        enquiry.email = "not-an-email".to_string();
        let outcome = submit_enquiry_after(&enquiry, Duration::ZERO).await;
        assert!(!outcome.success);
        assert!(outcome.message.contains("email"));
    }

    #[tokio::test]
    async fn test_booking_requires_event_date() {
        let mut enquiry = valid_enquiry();
        enquiry.event_date = None;
        let outcome = submit_enquiry_after(&enquiry, Duration::ZERO).await;
        assert!(!outcome.success);

        enquiry.enquiry_type = EnquiryType::Other;
        let outcome = submit_enquiry_after(&enquiry, Duration::ZERO).await;
        assert!(outcome.success);
    }

    #[tokio::test]
    async fn test_songwriting_requires_budget_range() {
        let mut enquiry = valid_enquiry();
        enquiry.enquiry_type = EnquiryType::Songwriting;
        let outcome = submit_enquiry_after(&enquiry, Duration::ZERO).await;
        assert!(!outcome.success);
        assert!(outcome.message.contains("budget"));

        enquiry.songwriting_budget = Some("KES 50,000 - 100,000".to_string());
        let outcome = submit_enquiry_after(&enquiry, Duration::ZERO).await;
        assert!(outcome.success);
    }

    #[tokio::test]
    async fn test_negative_budget_rejected() {
        let mut enquiry = valid_enquiry();
        enquiry.performance_budget = Some(Decimal::from(-1));
        let outcome = submit_enquiry_after(&enquiry, Duration::ZERO).await;
        assert!(!outcome.success);
    }

    #[tokio::test]
    async fn test_order_submission_reports_order_number() {
        let products = default_products();
        let vinyl = products.iter().find(|p| p.id == 2).unwrap();
        let mut order = Order::new();
        order.add_product(vinyl, None, 1).unwrap();

        let payment = PaymentMethod::Mpesa {
            phone: "0712 345 678".to_string(),
        };
        let outcome = submit_order_after(&order, &payment, Duration::ZERO).await;
        assert!(outcome.success);
        assert!(outcome.message.contains("ORD-"));
    }

    #[tokio::test]
    async fn test_empty_order_is_rejected() {
        let order = Order::new();
        let outcome = submit_order_after(&order, &PaymentMethod::Card, Duration::ZERO).await;
        assert!(!outcome.success);
    }

    #[tokio::test]
    async fn test_mpesa_needs_phone_number() {
        let products = default_products();
        let vinyl = products.iter().find(|p| p.id == 2).unwrap();
        let mut order = Order::new();
        order.add_product(vinyl, None, 1).unwrap();

        let payment = PaymentMethod::Mpesa {
            phone: "  ".to_string(),
        };
        let outcome = submit_order_after(&order, &payment, Duration::ZERO).await;
        assert!(!outcome.success);
        assert!(outcome.message.contains("M-PESA"));
    }

    #[test]
    fn test_enquiry_json_round_trip() {
        let enquiry = valid_enquiry();
        let json = enquiry.to_json().unwrap();
        assert!(json.contains("\"enquiry_type\":\"booking\""));

        let restored: Enquiry = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, enquiry);
    }

    #[test]
    fn test_order_number_shape() {
        for _ in 0..20 {
            let number = order_number();
            let digits = number.strip_prefix("ORD-").unwrap();
            assert!(!digits.is_empty() && digits.len() <= 6);
            assert!(digits.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
