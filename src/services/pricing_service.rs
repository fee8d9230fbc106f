use crate::models::promo::{AppliedPromo, DiscountType, PromoCode};
use crate::models::service::CartEntry;

/// Minimum charge. Substituted whenever the base-price lookup fails.
pub const MINIMUM_BASE_PRICE: f64 = 125.0;

/// Price breakdown for the current draft, as shown on the review step and
/// charged at payment time.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub base_price: f64,
    pub add_on_total: f64,
    pub subtotal: f64,
    pub discount: f64,
    pub total: f64,
}

pub struct PricingService;

impl PricingService {
    /// Sum of unit price x quantity over the à-la-carte cart.
    pub fn add_on_total(cart: &[CartEntry]) -> f64 {
        cart.iter().map(CartEntry::line_total).sum()
    }

    pub fn subtotal(base_price: f64, cart: &[CartEntry]) -> f64 {
        base_price + Self::add_on_total(cart)
    }

    /// Discount a promo yields against a subtotal: percentage or fixed,
    /// clamped by the promo's cap and by the subtotal itself.
    pub fn discount_amount(promo: &PromoCode, subtotal: f64) -> f64 {
        let raw = match promo.discount_type {
            DiscountType::Percentage => subtotal * promo.discount_value / 100.0,
            DiscountType::Fixed => promo.discount_value,
        };
        let capped = match promo.maximum_discount_amount {
            Some(cap) => raw.min(cap),
            None => raw,
        };
        capped.min(subtotal).max(0.0)
    }

    /// Build the full breakdown. The discount comes from the promo applied
    /// earlier and is not recomputed against the current cart; it is still
    /// clamped so the total never goes negative.
    pub fn quote(base_price: f64, cart: &[CartEntry], promo: Option<&AppliedPromo>) -> PriceQuote {
        let add_on_total = Self::add_on_total(cart);
        let subtotal = base_price + add_on_total;
        let discount = promo.map(|p| p.discount.min(subtotal)).unwrap_or(0.0);
        PriceQuote {
            base_price,
            add_on_total,
            subtotal,
            discount,
            total: (subtotal - discount).max(0.0),
        }
    }
}
