//! Contract dispatch and account query services.

pub mod account;
pub mod dispatch;

pub use account::{get_balance, get_network_info, BalanceSource};
pub use dispatch::{dispatch, read, write};
