pub mod domain;
pub mod utils;

pub use domain::model::{Bid, Extension};
pub use domain::multi_string::MultiString;
pub use utils::error::{Result, RtbError};
pub use utils::validation::Validate;
