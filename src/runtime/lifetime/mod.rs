pub mod startup;

pub use startup::{ClientContext, prepare_client};
