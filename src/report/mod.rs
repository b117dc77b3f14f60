mod errors;
mod renderer;

pub use errors::ReportError;
pub use renderer::generate_sales_report;
