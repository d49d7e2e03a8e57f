use crate::config::RingBankConfig;
use crate::error::{RingBankError, RingBankResult};
use crate::ring::buffer::RingBuffer;

/// Fixed set of independently owned, same-capacity ring buffers.
///
/// Pure composition over [`RingBuffer`]: access routes by slot index and
/// nothing else is shared between slots.
#[derive(Debug)]
pub struct RingBufferBank<T> {
    buffers: Vec<RingBuffer<T>>,
}

impl<T> RingBufferBank<T> {
    pub fn new(slots: usize, capacity: usize) -> Self {
        Self::with_config(RingBankConfig { slots, capacity })
    }

    pub fn with_config(config: RingBankConfig) -> Self {
        let buffers = (0..config.slots)
            .map(|_| RingBuffer::new(config.capacity))
            .collect();
        log::debug!(
            "ring buffer bank created: {} slots, capacity {} each",
            config.slots,
            config.capacity
        );
        Self { buffers }
    }

    /// Number of buffers in the bank.
    pub fn slots(&self) -> usize {
        self.buffers.len()
    }

    pub fn get(&self, index: usize) -> RingBankResult<&RingBuffer<T>> {
        self.buffers.get(index).ok_or(RingBankError::OutOfRange {
            index,
            slots: self.buffers.len(),
        })
    }

    pub fn get_mut(&mut self, index: usize) -> RingBankResult<&mut RingBuffer<T>> {
        let slots = self.buffers.len();
        self.buffers
            .get_mut(index)
            .ok_or(RingBankError::OutOfRange { index, slots })
    }
}
