pub mod pool;
pub mod phase;
pub mod buyer;

pub use pool::*;
pub use phase::*;
pub use buyer::*;
