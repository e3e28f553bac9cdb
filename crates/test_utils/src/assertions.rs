//! Custom Test Assertions
//!
//! Provides assertion helpers for billing figures and report orderings that
//! give more meaningful failure messages than standard assertions.

use std::cmp::Ordering;

use core_kernel::Money;
use domain_billing::Chargeable;

/// Asserts that a Money value is expressed in whole cents
pub fn assert_whole_cents(money: &Money) {
    assert!(
        money.round_to_cent() == *money,
        "Expected a whole-cent amount, got {}",
        money.amount()
    );
}

/// Asserts that `total == subtotal + taxes` and that every figure is in whole cents
pub fn assert_charge_consistent<C: Chargeable + ?Sized>(charge: &C) {
    let (subtotal, taxes, total) = (charge.subtotal(), charge.taxes(), charge.total());
    assert_whole_cents(&subtotal);
    assert_whole_cents(&taxes);
    assert_eq!(
        total,
        subtotal + taxes,
        "Total {} is not subtotal {} plus taxes {}",
        total,
        subtotal,
        taxes
    );
}

/// Asserts that `items` are in non-decreasing order under `compare`
pub fn assert_sorted_by<T, F>(items: &[T], compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    for (position, pair) in items.windows(2).enumerate() {
        assert_ne!(
            compare(&pair[0], &pair[1]),
            Ordering::Greater,
            "Elements at {} and {} are out of order",
            position,
            position + 1
        );
    }
}
