// crates/listing-api-client/src/identifiers.rs
// ============================================================================
// Module: Listing Identifiers
// Description: UUID checks and create-confirmation parsing.
// Purpose: Extract server-assigned listing ids from confirmation messages.
// Dependencies: uuid
// ============================================================================

//! ## Overview
//! A successful create answers with `"Сохранили объявление - <uuid>"`.
//! [`CreatedListing::from_status`] splits that message and checks the id with
//! [`is_valid_uuid`], which only accepts the canonical hyphenated form.

use uuid::Uuid;
use uuid::fmt::Hyphenated;

use crate::error::ListingApiError;

/// Leading text of a create confirmation.
pub const CREATE_CONFIRMATION_PREFIX: &str = "Сохранили объявление";
/// Separator between the confirmation text and the listing id.
const CONFIRMATION_SEPARATOR: &str = " - ";

/// Returns true when `value` is a UUID in canonical hyphenated form.
///
/// Any version and variant is accepted, hex digits may be either case.
/// Simple, braced and URN forms are rejected.
#[must_use]
pub fn is_valid_uuid(value: &str) -> bool {
    value.len() == Hyphenated::LENGTH && Uuid::try_parse(value).is_ok()
}

/// Formats the confirmation the API returns for a created listing.
#[must_use]
pub fn confirmation_message(id: &str) -> String {
    format!("{CREATE_CONFIRMATION_PREFIX}{CONFIRMATION_SEPARATOR}{id}")
}

/// Listing id extracted from a create confirmation.
///
/// # Invariants
/// - `id` always satisfies [`is_valid_uuid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedListing {
    /// Server-assigned listing id.
    id: String,
}

impl CreatedListing {
    /// Parses a create confirmation such as `"Сохранили объявление - <uuid>"`.
    ///
    /// # Errors
    ///
    /// Returns [`ListingApiError::UnexpectedConfirmation`] when the prefix is
    /// missing or the trailing id is not a valid UUID.
    pub fn from_status(status: &str) -> Result<Self, ListingApiError> {
        let Some((prefix, id)) = status.split_once(CONFIRMATION_SEPARATOR) else {
            return Err(ListingApiError::UnexpectedConfirmation(format!(
                "missing separator in '{status}'"
            )));
        };
        if prefix.trim() != CREATE_CONFIRMATION_PREFIX {
            return Err(ListingApiError::UnexpectedConfirmation(format!(
                "unexpected prefix in '{status}'"
            )));
        }
        let id = id.trim();
        if !is_valid_uuid(id) {
            return Err(ListingApiError::UnexpectedConfirmation(format!("invalid uuid '{id}'")));
        }
        Ok(Self {
            id: id.to_string(),
        })
    }

    /// Returns the listing id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}
