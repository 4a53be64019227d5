pub mod payout_config;

pub use payout_config::*;
