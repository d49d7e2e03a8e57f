#[derive(Debug, Clone, Copy)]
pub struct RingBankConfig {
    /// Number of independent buffers in the bank.
    pub slots: usize,
    /// Usable capacity of each buffer, in elements.
    pub capacity: usize,
}

impl Default for RingBankConfig {
    fn default() -> Self {
        RingBankConfig {
            slots: 16,
            capacity: 256,
        }
    }
}
