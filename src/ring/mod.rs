pub mod bank;
pub mod buffer;

pub use bank::RingBufferBank;
pub use buffer::{RingBuffer, RingIter};
