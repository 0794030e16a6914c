//! Request handlers.

pub mod categories;
pub mod feeds;
pub mod health;
pub mod insights;
pub mod keywords;

pub use categories::*;
pub use feeds::*;
pub use health::*;
pub use insights::*;
pub use keywords::*;
