pub mod error;

pub use error::{GraphError, GraphResult};
