/// Shipping/ticket-type tables and order totals
///
/// Two independent pricing policies share the cart's exact subtotal:
/// - Merchandise: flat shipping from a fixed method table plus 8% tax
/// - Ticketing: 15% service fee
///
/// All arithmetic stays in exact decimals; rounding to whole KES happens
/// once, in `format_kes`, never inside a computation.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::cart::Order;
use super::OrderError;

/// A flat-rate shipping option
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShippingMethod {
    pub id: &'static str,
    pub name: &'static str,
    /// Flat price in KES
    pub price: Decimal,
    pub estimated_delivery: &'static str,
}

/// A ticket tier, priced as a multiple of the show's base price
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketType {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Applied to the show's base price
    pub multiplier: Decimal,
}

/// Merchandise tax rate (8%)
pub fn tax_rate() -> Decimal {
    Decimal::new(8, 2)
}

/// Ticketing service fee rate (15%)
pub fn service_fee_rate() -> Decimal {
    Decimal::new(15, 2)
}

/// The fixed shipping method table
pub fn shipping_methods() -> Vec<ShippingMethod> {
    vec![
        ShippingMethod {
            id: "standard",
            name: "Standard Shipping",
            price: Decimal::from(779),
            estimated_delivery: "5-7 business days",
        },
        ShippingMethod {
            id: "express",
            name: "Express Shipping",
            price: Decimal::from(1_689),
            estimated_delivery: "2-3 business days",
        },
        ShippingMethod {
            id: "overnight",
            name: "Overnight Shipping",
            price: Decimal::from(3_249),
            estimated_delivery: "Next business day",
        },
    ]
}

/// Look up a shipping method by id; unknown keys fail with `NotFound`
pub fn shipping_method(id: &str) -> Result<ShippingMethod, OrderError> {
    shipping_methods()
        .into_iter()
        .find(|method| method.id == id)
        .ok_or_else(|| OrderError::NotFound {
            kind: "shipping method",
            key: id.to_string(),
        })
}

/// The fixed ticket tier table
///
/// The multipliers are configuration, not derived values: standard x1.0,
/// VIP x2.5, early entry x1.5 of the show's base price.
pub fn ticket_types() -> Vec<TicketType> {
    vec![
        TicketType {
            id: "standard",
            name: "Standard Admission",
            description: "General admission with standard seating",
            multiplier: Decimal::ONE,
        },
        TicketType {
            id: "vip",
            name: "VIP Experience",
            description: "Premium seating with backstage access and exclusive merchandise",
            multiplier: Decimal::new(25, 1),
        },
        TicketType {
            id: "early",
            name: "Early Entry",
            description: "Enter 1 hour before general admission with preferred seating",
            multiplier: Decimal::new(15, 1),
        },
    ]
}

/// Look up a ticket type by id; unknown keys fail with `NotFound`
pub fn ticket_type(id: &str) -> Result<TicketType, OrderError> {
    ticket_types()
        .into_iter()
        .find(|ticket| ticket.id == id)
        .ok_or_else(|| OrderError::NotFound {
            kind: "ticket type",
            key: id.to_string(),
        })
}

/// Totals for a merchandise checkout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MerchandiseTotals {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Totals for a ticket checkout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketTotals {
    pub subtotal: Decimal,
    pub service_fee: Decimal,
    pub total: Decimal,
}

/// Compute merchandise totals for the selected shipping method
///
/// `tax = subtotal * 0.08`, `total = subtotal + shipping + tax`, all exact.
pub fn merchandise_totals(
    order: &Order,
    shipping_method_id: &str,
) -> Result<MerchandiseTotals, OrderError> {
    let subtotal = order.subtotal();
    let shipping = shipping_method(shipping_method_id)?.price;
    let tax = subtotal * tax_rate();

    Ok(MerchandiseTotals {
        subtotal,
        shipping,
        tax,
        total: subtotal + shipping + tax,
    })
}

/// Compute ticket totals: `service_fee = subtotal * 0.15`
pub fn ticket_totals(order: &Order) -> TicketTotals {
    let subtotal = order.subtotal();
    let service_fee = subtotal * service_fee_rate();

    TicketTotals {
        subtotal,
        service_fee,
        total: subtotal + service_fee,
    }
}

/// Format an amount for display: "KES 37,375"
///
/// The single rounding point of the pricing engine. Rounds to whole KES,
/// half away from zero, and groups thousands with commas.
pub fn format_kes(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let units = rounded.to_i64().unwrap_or(0);
    format!("KES {}", group_thousands(units))
}

fn group_thousands(units: i64) -> String {
    let digits = units.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if units < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
