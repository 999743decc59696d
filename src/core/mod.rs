pub mod dispatch;
pub mod extract;
pub mod filter;
pub mod menu;
pub mod query;
pub mod validate;

pub use crate::domain::model::{ArgumentItem, Day, MealMatch, Menu, Query, Scope, Tag};
pub use crate::domain::ports::{LinkOpener, PageSource};
pub use crate::utils::error::Result;
