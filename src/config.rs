//! Engine configuration.

/// Tuning knobs for the engine actor.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Capacity of the actor mailbox. A full mailbox applies backpressure to
    /// callers rather than dropping requests.
    pub mailbox_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 32,
        }
    }
}
