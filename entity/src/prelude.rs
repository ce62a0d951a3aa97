pub use super::quote::Entity as Quote;
