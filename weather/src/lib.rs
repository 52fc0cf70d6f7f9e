pub use endpoints::*;
pub use fetch::*;
pub use report::*;
pub use summary::*;
pub use types::*;

mod endpoints;
mod fetch;
mod report;
mod summary;
mod types;
