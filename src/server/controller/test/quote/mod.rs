use super::*;
use crate::model::quote::QuoteDto;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;
use test_utils::factory::{create_quote, create_quote_by};

mod get_random_quote;
