//! The order payload sent to the order endpoint.

use crate::cart::{pricing, Cart};
use crate::catalog::Catalog;
use crate::checkout::DeliveryAddress;
use crate::error::CommerceError;
use crate::ids::UserId;
use serde::Serialize;

/// One line item of an order: a snapshot of name, quantity and unit price at
/// submission time.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    /// Unit price as a decimal amount, the backend's number format.
    pub price: f64,
}

/// The order payload, built fresh per submission attempt and discarded once
/// the exchange resolves.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub user_id: UserId,
    pub food_items: Vec<OrderItem>,
    /// Grand total (subtotal plus delivery fee) as a decimal amount.
    pub total_price: f64,
    pub delivery_address: DeliveryAddress,
}

impl OrderPayload {
    /// Assemble a payload from the current cart state.
    ///
    /// Entries are kept only when the quantity is positive and the product
    /// id resolves in the catalog; item order follows ledger order. Fails
    /// with [`CommerceError::EmptyOrder`] when nothing survives the filter.
    pub fn build(
        user_id: UserId,
        cart: &Cart,
        catalog: &Catalog,
        delivery_address: DeliveryAddress,
    ) -> Result<Self, CommerceError> {
        let food_items: Vec<OrderItem> = cart
            .entries()
            .filter(|&(_, quantity)| quantity > 0)
            .filter_map(|(id, quantity)| {
                catalog.get(id).map(|product| OrderItem {
                    name: product.name.clone(),
                    quantity,
                    price: product.price.to_decimal(),
                })
            })
            .collect();

        if food_items.is_empty() {
            return Err(CommerceError::EmptyOrder);
        }

        let totals = pricing::totals(cart, catalog)?;

        Ok(Self {
            user_id,
            food_items,
            total_price: totals.grand_total.to_decimal(),
            delivery_address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::ids::ProductId;
    use crate::money::{Currency, Money};

    fn catalog() -> Catalog {
        Catalog::from_products(vec![
            Product::new("greek-salad", "Greek Salad", Money::new(1200, Currency::USD)),
            Product::new("veg-roll", "Veg Roll", Money::new(1800, Currency::USD)),
        ])
    }

    fn address() -> DeliveryAddress {
        DeliveryAddress {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            street: "12 Analytical Way".into(),
            city: "London".into(),
            state: "LDN".into(),
            zip_code: "E1 6AN".into(),
            country: "UK".into(),
            phone: "02079460000".into(),
        }
    }

    #[test]
    fn test_build_filters_stale_entries() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("greek-salad"));
        cart.add(ProductId::new("discontinued"));

        let payload =
            OrderPayload::build(UserId::new("user-1"), &cart, &catalog(), address()).unwrap();

        assert_eq!(payload.food_items.len(), 1);
        assert_eq!(payload.food_items[0].name, "Greek Salad");
    }

    #[test]
    fn test_build_empty_cart_fails() {
        let cart = Cart::new();
        let err =
            OrderPayload::build(UserId::new("user-1"), &cart, &catalog(), address()).unwrap_err();
        assert_eq!(err, CommerceError::EmptyOrder);
    }

    #[test]
    fn test_build_only_stale_entries_fails() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("ghost"));
        let err =
            OrderPayload::build(UserId::new("user-1"), &cart, &catalog(), address()).unwrap_err();
        assert_eq!(err, CommerceError::EmptyOrder);
    }

    #[test]
    fn test_build_total_includes_delivery_fee() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("greek-salad"));
        cart.add(ProductId::new("greek-salad"));

        let payload =
            OrderPayload::build(UserId::new("user-1"), &cart, &catalog(), address()).unwrap();

        // 2 × $12.00 plus the $2.00 delivery fee.
        assert!((payload.total_price - 26.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_build_item_order_is_deterministic() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("veg-roll"));
        cart.add(ProductId::new("greek-salad"));

        let payload =
            OrderPayload::build(UserId::new("user-1"), &cart, &catalog(), address()).unwrap();

        let names: Vec<_> = payload.food_items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Greek Salad", "Veg Roll"]);
    }

    #[test]
    fn test_wire_format() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("veg-roll"));

        let payload =
            OrderPayload::build(UserId::new("user-7"), &cart, &catalog(), address()).unwrap();
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["userId"], "user-7");
        assert_eq!(json["foodItems"][0]["name"], "Veg Roll");
        assert_eq!(json["foodItems"][0]["quantity"], 1);
        assert_eq!(json["foodItems"][0]["price"], 18.0);
        assert_eq!(json["totalPrice"], 20.0);
        assert_eq!(json["deliveryAddress"]["zipCode"], "E1 6AN");
    }
}
