mod encoding;
mod errors;
mod loader;
mod parser;

pub use encoding::TextEncoding;
pub use loader::read_sales_data;
pub use parser::parse_transactions;
