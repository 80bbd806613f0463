pub mod error;
pub mod item;
pub mod node;
pub mod value;

pub use error::{Error, Result};
pub use item::Item;
pub use node::Node;
pub use value::*;
