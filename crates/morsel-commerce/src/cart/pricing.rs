//! Cart pricing calculations.
//!
//! Pure functions of the cart and the catalog: no hidden state, safe to call
//! repeatedly. Cart entries whose product id does not resolve in the catalog
//! contribute zero rather than failing.

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Fixed delivery fee in minor currency units, charged once per order.
pub const DELIVERY_FEE_CENTS: i64 = 200;

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Sum of unit price times quantity over resolvable entries.
    pub subtotal: Money,
    /// Delivery fee actually charged: zero unless the subtotal is positive.
    pub delivery_fee: Money,
    /// Subtotal plus the charged delivery fee.
    pub grand_total: Money,
}

/// Sum of price × quantity over every cart entry that resolves in the
/// catalog. Stale entries contribute zero. Zero for an empty cart.
pub fn subtotal(cart: &Cart, catalog: &Catalog) -> Result<Money, CommerceError> {
    let currency = catalog.currency();
    cart.entries()
        .try_fold(Money::zero(currency), |acc, (id, quantity)| {
            let Some(product) = catalog.get(id) else {
                return Ok(acc);
            };
            let line = product
                .price
                .try_multiply(i64::from(quantity))
                .ok_or(CommerceError::Overflow)?;
            acc.try_add(&line).ok_or_else(|| mismatch_or_overflow(&acc, &line))
        })
}

/// Compute the full totals breakdown.
///
/// The delivery fee applies only when the subtotal is positive: an empty
/// cart, or one priced entirely at zero, incurs no fee.
pub fn totals(cart: &Cart, catalog: &Catalog) -> Result<CartTotals, CommerceError> {
    let subtotal = subtotal(cart, catalog)?;
    let delivery_fee = if subtotal.is_positive() {
        Money::new(DELIVERY_FEE_CENTS, subtotal.currency)
    } else {
        Money::zero(subtotal.currency)
    };
    let grand_total = subtotal
        .try_add(&delivery_fee)
        .ok_or(CommerceError::Overflow)?;
    Ok(CartTotals {
        subtotal,
        delivery_fee,
        grand_total,
    })
}

fn mismatch_or_overflow(acc: &Money, line: &Money) -> CommerceError {
    if acc.currency != line.currency {
        CommerceError::CurrencyMismatch {
            expected: acc.currency.code().to_string(),
            got: line.currency.code().to_string(),
        }
    } else {
        CommerceError::Overflow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::ids::ProductId;
    use crate::money::Currency;

    fn catalog() -> Catalog {
        Catalog::from_products(vec![
            Product::new("a", "Dish A", Money::new(1000, Currency::USD)),
            Product::new("b", "Dish B", Money::new(250, Currency::USD)),
        ])
    }

    #[test]
    fn test_subtotal_empty_cart_is_zero() {
        let cart = Cart::new();
        let subtotal = subtotal(&cart, &catalog()).unwrap();
        assert!(subtotal.is_zero());
    }

    #[test]
    fn test_subtotal_sums_price_times_quantity() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("a"));
        cart.add(ProductId::new("a"));
        cart.add(ProductId::new("b"));
        let subtotal = subtotal(&cart, &catalog()).unwrap();
        assert_eq!(subtotal.amount_cents, 2250);
    }

    #[test]
    fn test_subtotal_ignores_stale_entries() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("a"));
        cart.add(ProductId::new("discontinued"));
        let subtotal = subtotal(&cart, &catalog()).unwrap();
        assert_eq!(subtotal.amount_cents, 1000);
    }

    #[test]
    fn test_subtotal_invariant_under_catalog_reordering() {
        let reversed = Catalog::from_products(vec![
            Product::new("b", "Dish B", Money::new(250, Currency::USD)),
            Product::new("a", "Dish A", Money::new(1000, Currency::USD)),
        ]);
        let mut cart = Cart::new();
        cart.add(ProductId::new("a"));
        cart.add(ProductId::new("b"));
        assert_eq!(
            subtotal(&cart, &catalog()).unwrap(),
            subtotal(&cart, &reversed).unwrap()
        );
    }

    #[test]
    fn test_no_fee_on_empty_cart() {
        let totals = totals(&Cart::new(), &catalog()).unwrap();
        assert!(totals.subtotal.is_zero());
        assert!(totals.delivery_fee.is_zero());
        assert!(totals.grand_total.is_zero());
    }

    #[test]
    fn test_fee_applied_when_subtotal_positive() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("a"));
        cart.add(ProductId::new("a"));
        let totals = totals(&cart, &catalog()).unwrap();
        assert_eq!(totals.subtotal.amount_cents, 2000);
        assert_eq!(totals.delivery_fee.amount_cents, DELIVERY_FEE_CENTS);
        assert_eq!(totals.grand_total.amount_cents, 2000 + DELIVERY_FEE_CENTS);
    }

    #[test]
    fn test_no_fee_when_all_entries_stale() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("ghost"));
        let totals = totals(&cart, &catalog()).unwrap();
        assert!(totals.delivery_fee.is_zero());
        assert!(totals.grand_total.is_zero());
    }

    #[test]
    fn test_no_fee_when_items_price_at_zero() {
        let free = Catalog::from_products(vec![Product::new(
            "sample",
            "Free Sample",
            Money::zero(Currency::USD),
        )]);
        let mut cart = Cart::new();
        cart.add(ProductId::new("sample"));
        let totals = totals(&cart, &free).unwrap();
        assert!(totals.delivery_fee.is_zero());
    }

    #[test]
    fn test_overflow_is_reported() {
        let pricey = Catalog::from_products(vec![Product::new(
            "vault",
            "The Vault",
            Money::new(i64::MAX, Currency::USD),
        )]);
        let mut cart = Cart::new();
        cart.add(ProductId::new("vault"));
        cart.add(ProductId::new("vault"));
        assert_eq!(subtotal(&cart, &pricey), Err(CommerceError::Overflow));
    }

    #[test]
    fn test_currency_mismatch_is_reported() {
        let mixed = Catalog::from_products(vec![
            Product::new("a", "Dish A", Money::new(1000, Currency::USD)),
            Product::new("e", "Dish E", Money::new(1000, Currency::EUR)),
        ]);
        let mut cart = Cart::new();
        cart.add(ProductId::new("a"));
        cart.add(ProductId::new("e"));
        assert!(matches!(
            subtotal(&cart, &mixed),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }
}
