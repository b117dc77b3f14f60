mod errors;
mod monetary;

pub use errors::NumericError;
pub use monetary::{parse_amount, parse_quantity, round_currency};

pub type Quantity = i64;
pub type ProductNumber = u64;
