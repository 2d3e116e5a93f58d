pub mod beneficiary;

pub use beneficiary::*;
