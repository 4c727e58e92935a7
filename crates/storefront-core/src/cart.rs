//! Shopping Cart
//!
//! In-memory cart holding at most one line per product id. Totals are
//! derived on read, never stored.

use crate::models::{CartCreate, CartProductRef, Product};

/// One product-quantity pairing within the cart
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Price × quantity for this line
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// Shopping cart; line order is insertion order and carries no meaning
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Quantity of the line for a product, if one exists
    pub fn quantity_of(&self, product_id: u64) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| line.product.id == product_id)
            .map(|line| line.quantity)
    }

    /// Add `quantity` of a product: an existing line grows by that amount,
    /// otherwise a new line is appended. Adding zero is a no-op.
    pub fn add(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.lines.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine { product, quantity }),
        }
    }

    /// Set a line's quantity directly. Zero removes the line; ids without a
    /// line are ignored.
    pub fn change_quantity(&mut self, product_id: u64, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|line| line.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Remove the line for a product; removing an absent id is a no-op
    pub fn remove(&mut self, product_id: u64) {
        self.lines.retain(|line| line.product.id != product_id);
    }

    /// Sum of price × quantity over all lines, recomputed on every call
    pub fn total_price(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Request body for the remote cart stub
    pub fn to_create_payload(&self, user_id: u64) -> CartCreate {
        CartCreate {
            user_id,
            products: self
                .lines
                .iter()
                .map(|line| CartProductRef {
                    id: line.product.id,
                    quantity: line.quantity,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, price: f64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            category: "beauty".to_string(),
            price,
            images: Vec::new(),
            description: String::new(),
        }
    }

    #[test]
    fn repeated_adds_merge_into_one_line() {
        let mut cart = Cart::new();
        cart.add(product(1, 9.5), 1);
        cart.add(product(1, 9.5), 2);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(1), Some(3));
        assert_eq!(cart.total_price(), 28.5);
    }

    #[test]
    fn lines_are_keyed_by_product_id() {
        let mut cart = Cart::new();
        cart.add(product(1, 2.0), 1);
        cart.add(product(2, 3.0), 1);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.quantity_of(2), Some(1));
    }

    #[test]
    fn adding_zero_is_a_noop() {
        let mut cart = Cart::new();
        cart.add(product(1, 2.0), 0);

        assert!(cart.is_empty());
    }

    #[test]
    fn change_quantity_sets_the_line() {
        let mut cart = Cart::new();
        cart.add(product(1, 2.0), 1);
        cart.change_quantity(1, 5);

        assert_eq!(cart.quantity_of(1), Some(5));
    }

    #[test]
    fn change_quantity_to_zero_removes_the_line() {
        let mut cart = Cart::new();
        cart.add(product(1, 2.0), 3);
        cart.change_quantity(1, 0);

        assert_eq!(cart.quantity_of(1), None);
        assert!(cart.is_empty());
    }

    #[test]
    fn change_quantity_for_unknown_id_is_ignored() {
        let mut cart = Cart::new();
        cart.add(product(1, 2.0), 1);
        cart.change_quantity(99, 5);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(1), Some(1));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut cart = Cart::new();
        cart.add(product(1, 2.0), 1);
        cart.remove(1);
        cart.remove(1);

        assert!(cart.is_empty());
    }

    #[test]
    fn total_price_matches_direct_recomputation() {
        let mut cart = Cart::new();
        cart.add(product(1, 2.5), 2);
        cart.add(product(2, 10.0), 1);
        cart.change_quantity(1, 4);

        let direct: f64 = cart
            .lines()
            .iter()
            .map(|line| line.product.price * f64::from(line.quantity))
            .sum();
        assert_eq!(cart.total_price(), direct);
        assert_eq!(cart.total_price(), 20.0);
    }

    #[test]
    fn empty_cart_total_is_zero() {
        assert_eq!(Cart::new().total_price(), 0.0);
    }

    #[test]
    fn create_payload_mirrors_the_lines() {
        let mut cart = Cart::new();
        cart.add(product(7, 1.0), 2);
        cart.add(product(8, 1.0), 1);

        let payload = cart.to_create_payload(1);
        assert_eq!(payload.user_id, 1);
        assert_eq!(payload.products.len(), 2);
        assert_eq!(payload.products[0].id, 7);
        assert_eq!(payload.products[0].quantity, 2);
    }
}
