pub mod create_pool;
pub mod stake;
pub mod execute;
pub mod withdraw;
pub mod views;

pub use create_pool::*;
pub use stake::*;
pub use execute::*;
pub use withdraw::*;
pub use views::*;
