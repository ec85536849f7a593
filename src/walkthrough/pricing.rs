/// Sales tax rate applied to non-empty orders
pub const TAX_RATE: f64 = 0.08;

/// Flat shipping fee for small orders
const FLAT_SHIPPING_FEE: f64 = 9.99;

/// Carts with more than this many items ship free
const FREE_SHIPPING_THRESHOLD: u32 = 5;

/// Shipping and final price computed for one order.
#[derive(Clone, Copy, PartialEq)]
pub struct PricedOrder {
    pub shipping_cost: f64,
    pub final_price: f64,
}

/// Price an order
///
/// An empty cart leaves the order amount unchanged: no shipping, no tax.
/// Otherwise shipping is free above `FREE_SHIPPING_THRESHOLD` items and a
/// flat fee at or below it, and tax is charged on the order amount.
pub fn price_order(order_amount: f64, items_in_cart: u32) -> PricedOrder {
    let mut shipping_cost = 0.0;
    let mut final_price = order_amount;

    if items_in_cart > 0 {
        shipping_cost = if items_in_cart > FREE_SHIPPING_THRESHOLD {
            0.0
        } else {
            FLAT_SHIPPING_FEE
        };

        let tax_amount = order_amount * TAX_RATE;
        final_price = order_amount + tax_amount + shipping_cost;
    }

    PricedOrder {
        shipping_cost,
        final_price,
    }
}

#[test]
fn test_empty_cart_keeps_order_amount() {
    let priced = price_order(149.99, 0);

    assert_eq!(priced.shipping_cost, 0.0);
    assert_eq!(priced.final_price, 149.99);
    assert_eq!(format!("{:.2}", priced.final_price), "149.99");
}

#[test]
fn test_small_cart_pays_flat_shipping_and_tax() {
    let priced = price_order(100.0, 3);

    assert_eq!(priced.shipping_cost, 9.99);
    // 100.00 + 8.00 tax + 9.99 shipping
    assert!((priced.final_price - 117.99).abs() < 1e-9);
}

#[test]
fn test_large_cart_ships_free() {
    let priced = price_order(100.0, 6);

    assert_eq!(priced.shipping_cost, 0.0);
    assert!((priced.final_price - 108.0).abs() < 1e-9);
}

#[test]
fn test_free_shipping_threshold_is_exclusive() {
    // Exactly five items still pays the flat fee
    let priced = price_order(100.0, 5);

    assert_eq!(priced.shipping_cost, FLAT_SHIPPING_FEE);
}
