pub mod exec;
pub mod output;
pub mod reshape;

pub use exec::exec;
pub use output::{output_json, output_ndjson, output_summary};
pub use reshape::reshape;
