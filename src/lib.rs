//! Fixed-capacity ring buffers for bounded frame backlogs.
//!
//! Containers here assume a single logical owner: all mutators take
//! `&mut self` and perform no internal locking. Callers sharing a buffer
//! across threads must synchronize externally.

pub mod config;
pub mod error;
pub mod ring;

pub use config::RingBankConfig;
pub use error::{RingBankError, RingBankResult};
pub use ring::{RingBuffer, RingBufferBank, RingIter};
