//! Command implementations for phishscan

pub mod batch;
pub mod check;

pub use batch::run_batch;
pub use check::run_check;
