//! Types that represent the core data model, such as `Record` and `Category`.
mod amount;
mod category;
mod record;

pub use amount::{Amount, AmountError};
pub use category::Category;
pub use record::{Record, RecordId};
