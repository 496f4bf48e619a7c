use serde::{Deserialize, Serialize};

/// Discounts a passenger can apply at checkout. UI-only stubs: no code is
/// redeemed against any backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Offer {
    /// Flat ₹100 off the first booking.
    FirstBooking,
    /// 5% off, rounded to the nearest rupee.
    Cashback,
}

impl Offer {
    pub fn code(&self) -> &'static str {
        match self {
            Offer::FirstBooking => "FIRST100",
            Offer::Cashback => "CASHBACK5",
        }
    }

    /// Discount in rupees against a base fare.
    pub fn discount(&self, price: u32) -> u32 {
        match self {
            Offer::FirstBooking => 100,
            Offer::Cashback => (price * 5 + 50) / 100,
        }
    }
}

/// Final fare: base price minus any offer discount, floored at zero.
pub fn total_fare(price: u32, offer: Option<Offer>) -> u32 {
    match offer {
        Some(offer) => price.saturating_sub(offer.discount(price)),
        None => price,
    }
}

/// A marketing promotion card. Presentational data only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promotion {
    pub code: String,
    pub title: String,
    pub description: String,
}

/// The static promotions shown on the landing page.
pub fn default_promotions() -> Vec<Promotion> {
    vec![
        Promotion {
            code: "FIRST100".to_string(),
            title: "First Booking Bonus".to_string(),
            description: "Get ₹100 cashback on your first bus booking".to_string(),
        },
        Promotion {
            code: "REFER50".to_string(),
            title: "Refer & Earn".to_string(),
            description: "Invite friends and earn ₹50 for each successful referral".to_string(),
        },
        Promotion {
            code: "LOYALTY".to_string(),
            title: "Loyalty Points".to_string(),
            description: "Earn 2 points per ₹100 spent. Redeem after 100 points".to_string(),
        },
    ]
}
