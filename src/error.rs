use thiserror::Error;

pub type RingBankResult<T, E = RingBankError> = Result<T, E>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RingBankError {
    #[error("ring buffer full: capacity {0} reached")]
    Full(usize),

    #[error("ring buffer empty")]
    Empty,

    #[error("buffer index {index} out of range: bank holds {slots} buffers")]
    OutOfRange { index: usize, slots: usize },
}
