pub mod stats;
pub mod system;
pub mod teams;
pub mod visuals;

pub use stats::*;
pub use system::*;
pub use teams::*;
pub use visuals::*;
