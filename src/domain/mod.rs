pub mod delivery;
pub mod match_info;
pub mod store;
pub mod team;

pub use delivery::*;
pub use match_info::*;
pub use store::*;
pub use team::*;
