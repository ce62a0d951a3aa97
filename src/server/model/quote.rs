//! Domain & parameter models for quote operations
//!
//! Defines the quote domain model, the creation parameters, and the conversions from
//! the entity model and into DTOs.

use chrono::{DateTime, Utc};

use crate::model::quote::{CreateQuoteDto, QuoteDto};

/// The quote domain model
///
/// A request-scoped copy of a stored quote. Only the repository reads or writes the
/// storage representation.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub id: i32,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Quote {
    /// Converts an entity model to the quote domain model
    pub fn from_entity(entity: entity::quote::Model) -> Self {
        Self {
            id: entity.id,
            author: entity.author,
            text: entity.text,
            created_at: entity.created_at,
        }
    }

    /// Converts the domain model into its API representation
    pub fn into_dto(self) -> QuoteDto {
        QuoteDto {
            id: self.id,
            author: self.author,
            text: self.text,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a new quote
///
/// Storage assigns the id and creation timestamp, so only author and text are carried.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateQuoteParams {
    pub author: String,
    pub text: String,
}

impl CreateQuoteParams {
    pub fn from_dto(dto: CreateQuoteDto) -> Self {
        Self {
            author: dto.author,
            text: dto.text,
        }
    }
}
