/// Cart state and mutation operations
///
/// An `Order` is built up by add/remove/update operations and emptied on
/// checkout completion. It is never persisted; each mutation either succeeds
/// or reports an `OrderError` and leaves the order untouched.

use rust_decimal::Decimal;
use serde::Serialize;

use super::pricing;
use super::OrderError;
use crate::catalog::data::{Product, Show};

/// Upper bound on tickets per order, matching the checkout quantity input
pub const MAX_TICKETS_PER_ORDER: u32 = 10;

/// One cart line: a catalog item with an optional variant and a quantity
///
/// The unit price is resolved when the line is added (product price, or show
/// base price times the ticket-type multiplier), so totals never need to
/// look the item up again.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    /// Catalog id of the product or show this line references
    pub item_id: u32,
    pub name: String,
    /// Resolved price per unit in KES
    pub unit_price: Decimal,
    /// Size label for products, ticket-type id for tickets
    pub variant: Option<String>,
    /// Always at least 1
    pub quantity: u32,
}

impl OrderLine {
    /// Line total: unit price times quantity, exact
    pub fn total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// An in-memory order under construction
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Order {
    lines: Vec<OrderLine>,
}

impl Order {
    /// Create an empty order
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the order
    ///
    /// Lines with the same `(item id, variant)` pair merge by summing
    /// quantities; a new pair appends a line. Products with size variants
    /// require a selection, and the selection must be one of the declared
    /// labels. A variant passed for a variant-less product is ignored.
    pub fn add_product(
        &mut self,
        product: &Product,
        variant: Option<&str>,
        quantity: u32,
    ) -> Result<(), OrderError> {
        if quantity == 0 {
            return Err(OrderError::InvalidQuantity(quantity));
        }

        let variant = if product.variants.is_empty() {
            None
        } else {
            match variant {
                None => {
                    return Err(OrderError::VariantRequired {
                        item: product.name.to_string(),
                    });
                }
                Some(label) if !product.variants.contains(&label) => {
                    return Err(OrderError::NotFound {
                        kind: "variant",
                        key: label.to_string(),
                    });
                }
                Some(label) => Some(label.to_string()),
            }
        };

        self.push_merged(product.id, product.name, product.price, variant, quantity);
        Ok(())
    }

    /// Add tickets for a show to the order
    ///
    /// The ticket type resolves against the fixed type table (unknown ids
    /// fail with `NotFound`); the line price is the show's base price times
    /// the type multiplier. The merge rule is the same as for products, with
    /// the ticket-type id playing the variant role.
    pub fn add_tickets(
        &mut self,
        show: &Show,
        ticket_type_id: &str,
        quantity: u32,
    ) -> Result<(), OrderError> {
        if quantity == 0 || quantity > MAX_TICKETS_PER_ORDER {
            return Err(OrderError::InvalidQuantity(quantity));
        }

        let ticket = pricing::ticket_type(ticket_type_id)?;
        let unit_price = show.price * ticket.multiplier;
        let name = format!("{} ({})", show.title, ticket.name);

        self.push_merged(show.id, &name, unit_price, Some(ticket.id.to_string()), quantity);
        Ok(())
    }

    /// Remove the line at `index`
    ///
    /// An out-of-range index is a reported no-op: the error comes back and
    /// the order is unchanged.
    pub fn remove_line(&mut self, index: usize) -> Result<(), OrderError> {
        if index >= self.lines.len() {
            return Err(OrderError::InvalidIndex {
                index,
                len: self.lines.len(),
            });
        }
        self.lines.remove(index);
        Ok(())
    }

    /// Set the quantity of the line at `index`
    ///
    /// Quantities never fall below 1; a request for 0 is rejected and the
    /// order is unchanged (use `remove_line` to drop a line).
    pub fn update_quantity(&mut self, index: usize, quantity: u32) -> Result<(), OrderError> {
        if quantity == 0 {
            return Err(OrderError::InvalidQuantity(quantity));
        }
        let len = self.lines.len();
        match self.lines.get_mut(index) {
            Some(line) => {
                line.quantity = quantity;
                Ok(())
            }
            None => Err(OrderError::InvalidIndex { index, len }),
        }
    }

    /// Sum of line totals, exact (no rounding)
    pub fn subtotal(&self) -> Decimal {
        self.lines
            .iter()
            .fold(Decimal::ZERO, |acc, line| acc + line.total())
    }

    /// Total quantity across all lines (the cart badge count)
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Discard all lines (checkout completion)
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn push_merged(
        &mut self,
        item_id: u32,
        name: &str,
        unit_price: Decimal,
        variant: Option<String>,
        quantity: u32,
    ) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.item_id == item_id && line.variant == variant)
        {
            line.quantity += quantity;
        } else {
            self.lines.push(OrderLine {
                item_id,
                name: name.to_string(),
                unit_price,
                variant,
                quantity,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data::{default_products, upcoming_shows};

    fn product(id: u32) -> Product {
        default_products()
            .into_iter()
            .find(|p| p.id == id)
            .unwrap()
    }

    #[test]
    fn test_same_item_and_variant_merges() {
        let hoodie = product(4);
        let mut order = Order::new();
        order.add_product(&hoodie, Some("M"), 1).unwrap();
        order.add_product(&hoodie, Some("M"), 1).unwrap();

        assert_eq!(order.len(), 1);
        assert_eq!(order.lines()[0].quantity, 2);
    }

    #[test]
    fn test_different_variants_stay_separate() {
        let hoodie = product(4);
        let mut order = Order::new();
        order.add_product(&hoodie, Some("M"), 1).unwrap();
        order.add_product(&hoodie, Some("L"), 1).unwrap();

        assert_eq!(order.len(), 2);
        assert_eq!(order.item_count(), 2);
    }

    #[test]
    fn test_variant_required_when_declared() {
        let hoodie = product(4);
        let mut order = Order::new();
        let err = order.add_product(&hoodie, None, 1).unwrap_err();
        assert_eq!(
            err,
            OrderError::VariantRequired {
                item: "Hoodie".to_string()
            }
        );
        assert!(order.is_empty());
    }

    #[test]
    fn test_unknown_variant_is_not_found() {
        let hoodie = product(4);
        let mut order = Order::new();
        let err = order.add_product(&hoodie, Some("XXXL"), 1).unwrap_err();
        assert_eq!(
            err,
            OrderError::NotFound {
                kind: "variant",
                key: "XXXL".to_string()
            }
        );
    }

    #[test]
    fn test_variant_ignored_without_declared_variants() {
        let vinyl = product(2);
        let mut order = Order::new();
        order.add_product(&vinyl, Some("M"), 1).unwrap();
        order.add_product(&vinyl, None, 1).unwrap();

        // Both adds normalize to the same (item, None) key and merge.
        assert_eq!(order.len(), 1);
        assert_eq!(order.lines()[0].quantity, 2);
        assert_eq!(order.lines()[0].variant, None);
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let vinyl = product(2);
        let mut order = Order::new();
        assert_eq!(
            order.add_product(&vinyl, None, 0),
            Err(OrderError::InvalidQuantity(0))
        );
        assert!(order.is_empty());
    }

    #[test]
    fn test_update_quantity_floor() {
        let vinyl = product(2);
        let mut order = Order::new();
        order.add_product(&vinyl, None, 2).unwrap();

        let before = order.clone();
        assert_eq!(
            order.update_quantity(0, 0),
            Err(OrderError::InvalidQuantity(0))
        );
        assert_eq!(order, before);

        order.update_quantity(0, 5).unwrap();
        assert_eq!(order.lines()[0].quantity, 5);
    }

    #[test]
    fn test_remove_line_out_of_range_is_noop() {
        let vinyl = product(2);
        let mut order = Order::new();
        order.add_product(&vinyl, None, 1).unwrap();

        let before = order.clone();
        assert_eq!(
            order.remove_line(3),
            Err(OrderError::InvalidIndex { index: 3, len: 1 })
        );
        assert_eq!(order, before);

        order.remove_line(0).unwrap();
        assert!(order.is_empty());
    }

    #[test]
    fn test_update_out_of_range_reports_index() {
        let mut order = Order::new();
        assert_eq!(
            order.update_quantity(0, 2),
            Err(OrderError::InvalidIndex { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_ticket_lines_resolve_multiplied_price() {
        let shows = upcoming_shows();
        let moonlight = shows.iter().find(|s| s.id == 2).unwrap();

        let mut order = Order::new();
        order.add_tickets(moonlight, "vip", 2).unwrap();

        assert_eq!(order.len(), 1);
        let line = &order.lines()[0];
        assert_eq!(line.unit_price, Decimal::from(16_250));
        assert_eq!(line.variant.as_deref(), Some("vip"));
        assert_eq!(order.subtotal(), Decimal::from(32_500));
    }

    #[test]
    fn test_ticket_quantity_capped() {
        let shows = upcoming_shows();
        let mut order = Order::new();
        assert_eq!(
            order.add_tickets(&shows[0], "standard", 11),
            Err(OrderError::InvalidQuantity(11))
        );
        assert!(order.is_empty());
    }

    #[test]
    fn test_unknown_ticket_type_is_not_found() {
        let shows = upcoming_shows();
        let mut order = Order::new();
        let err = order.add_tickets(&shows[0], "backstage", 1).unwrap_err();
        assert_eq!(
            err,
            OrderError::NotFound {
                kind: "ticket type",
                key: "backstage".to_string()
            }
        );
    }

    #[test]
    fn test_clear_empties_order() {
        let vinyl = product(2);
        let mut order = Order::new();
        order.add_product(&vinyl, None, 3).unwrap();
        order.clear();
        assert!(order.is_empty());
        assert_eq!(order.subtotal(), Decimal::ZERO);
    }
}
