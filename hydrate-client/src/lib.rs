mod batch;
mod client;

pub use batch::estimate_batch;
pub use client::*;
