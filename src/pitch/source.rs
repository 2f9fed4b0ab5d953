//! PitchSource trait and PitchSample definition

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// One frame from a pitch detector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchSample {
    /// Estimated fundamental in Hz
    pub frequency: f64,

    /// Detector confidence, 0.0-1.0
    pub clarity: f64,
}

impl PitchSample {
    pub fn new(frequency: f64, clarity: f64) -> Self {
        Self { frequency, clarity }
    }
}

/// Trait for live pitch streams
///
/// Stopping a source must release whatever it captures from.
pub trait PitchSource: Send + Sync {
    /// Get the name of this source
    fn name(&self) -> &str;

    /// Start producing samples
    fn start(&mut self) -> anyhow::Result<()>;

    /// Stop producing samples and release the underlying input
    fn stop(&mut self);

    /// Check if the source is running
    fn is_running(&self) -> bool;

    /// Subscribe to samples from this source
    fn subscribe(&self) -> broadcast::Receiver<PitchSample>;
}
