// crates/listing-api-client/src/payload.rs
// ============================================================================
// Module: Listing Payload Builder
// Description: Request body for listing creation with fixed defaults.
// Purpose: Shape create payloads from defaults plus per-test overrides.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! [`ListingPayload`] is the create-listing request body. The builder starts
//! from fixed defaults and applies overrides without validating them, so a
//! scenario can submit a negative price, an out-of-range seller id or a
//! blank name and assert on the server's answer.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

use crate::model::Statistics;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default seller id.
pub const DEFAULT_SELLER_ID: i64 = 111_121;
/// Default listing name.
pub const DEFAULT_NAME: &str = "Тестовое объявление";
/// Default price.
pub const DEFAULT_PRICE: i64 = 1_000;
/// Default like count.
pub const DEFAULT_LIKES: u64 = 5;
/// Default view count.
pub const DEFAULT_VIEW_COUNT: u64 = 50;
/// Default contact count.
pub const DEFAULT_CONTACTS: u64 = 2;

// ============================================================================
// SECTION: Payload
// ============================================================================

/// Create-listing request body.
///
/// # Invariants
/// - Serializes with the wire key `sellerID` (upper-case `ID`).
/// - Holds whatever the builder was given; nothing is range-checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingPayload {
    /// Seller id.
    #[serde(rename = "sellerID")]
    pub seller_id: i64,
    /// Listing name.
    pub name: String,
    /// Listing price.
    pub price: i64,
    /// Engagement counters.
    pub statistics: Statistics,
}

impl ListingPayload {
    /// Returns a builder seeded with the default payload values.
    #[must_use]
    pub fn builder() -> ListingPayloadBuilder {
        ListingPayloadBuilder::default()
    }
}

impl Default for ListingPayload {
    fn default() -> Self {
        Self::builder().build()
    }
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Builder for [`ListingPayload`].
#[derive(Debug, Clone)]
pub struct ListingPayloadBuilder {
    /// Seller id override.
    seller_id: i64,
    /// Name override.
    name: String,
    /// Price override.
    price: i64,
    /// Like count override.
    likes: u64,
    /// View count override.
    view_count: u64,
    /// Contact count override.
    contacts: u64,
}

impl Default for ListingPayloadBuilder {
    fn default() -> Self {
        Self {
            seller_id: DEFAULT_SELLER_ID,
            name: DEFAULT_NAME.to_string(),
            price: DEFAULT_PRICE,
            likes: DEFAULT_LIKES,
            view_count: DEFAULT_VIEW_COUNT,
            contacts: DEFAULT_CONTACTS,
        }
    }
}

impl ListingPayloadBuilder {
    /// Sets the seller id.
    #[must_use]
    pub const fn seller_id(mut self, seller_id: i64) -> Self {
        self.seller_id = seller_id;
        self
    }

    /// Sets the listing name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the price.
    #[must_use]
    pub const fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    /// Sets the like count.
    #[must_use]
    pub const fn likes(mut self, likes: u64) -> Self {
        self.likes = likes;
        self
    }

    /// Sets the view count.
    #[must_use]
    pub const fn view_count(mut self, view_count: u64) -> Self {
        self.view_count = view_count;
        self
    }

    /// Sets the contact count.
    #[must_use]
    pub const fn contacts(mut self, contacts: u64) -> Self {
        self.contacts = contacts;
        self
    }

    /// Sets all three counters from a [`Statistics`] value.
    #[must_use]
    pub const fn statistics(mut self, statistics: Statistics) -> Self {
        self.likes = statistics.likes;
        self.view_count = statistics.view_count;
        self.contacts = statistics.contacts;
        self
    }

    /// Builds the payload.
    #[must_use]
    pub fn build(self) -> ListingPayload {
        ListingPayload {
            seller_id: self.seller_id,
            name: self.name,
            price: self.price,
            statistics: Statistics {
                likes: self.likes,
                view_count: self.view_count,
                contacts: self.contacts,
            },
        }
    }
}
