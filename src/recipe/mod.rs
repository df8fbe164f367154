pub mod cache;
pub mod resolver;

pub use cache::*;
pub use resolver::*;
