pub mod initialize_payout_config;
pub use initialize_payout_config::*;

pub mod distribute;
pub use distribute::*;

pub mod distribute_token;
pub use distribute_token::*;

pub mod set_fee_rate;
pub use set_fee_rate::*;

pub mod quote_payout;
pub use quote_payout::*;
