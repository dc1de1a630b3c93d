mod cache;
mod constants;
mod fake;
mod objs;

pub use cache::*;
pub use constants::*;
pub use fake::*;
pub use objs::*;
