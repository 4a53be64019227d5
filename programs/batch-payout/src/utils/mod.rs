pub mod fee_math;
pub mod transfer_batch;

pub use fee_math::*;
pub use transfer_batch::*;
