mod dashboard;
pub use dashboard::{load_config, Dashboard};
