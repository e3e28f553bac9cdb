//! The billing capability shared by every line item

use core_kernel::Money;

/// Something that can be billed on an invoice line
///
/// Implementations must be pure functions of the value's own fields: calling
/// any method twice yields the same figure. Every figure is reported in whole
/// cents, and `total` is always `subtotal + taxes`.
pub trait Chargeable {
    /// Pre-tax billable amount
    fn subtotal(&self) -> Money;

    /// Levy computed on the subtotal
    fn taxes(&self) -> Money;

    /// Subtotal plus taxes
    fn total(&self) -> Money {
        self.subtotal() + self.taxes()
    }
}
