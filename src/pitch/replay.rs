//! Replay source
//!
//! Plays back a recorded list of detector samples at a fixed tick, standing
//! in for live microphone capture.

use super::source::{PitchSample, PitchSource};
use anyhow::{bail, Context, Result};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Load recorded samples from a YAML or JSON file (by extension)
pub fn load_recording(path: &Path) -> Result<Vec<PitchSample>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read recording {:?}", path))?;

    let samples: Vec<PitchSample> = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&contents)?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&contents)?,
        _ => bail!("Recording {:?} must be a .json, .yaml or .yml file", path),
    };

    if samples.is_empty() {
        log::warn!("Recording {:?} contains no samples", path);
    }
    Ok(samples)
}

/// Source that replays recorded samples
pub struct ReplaySource {
    name: String,
    samples: Arc<Vec<PitchSample>>,
    tick: Duration,
    looping: bool,
    running: Arc<AtomicBool>,
    sender: broadcast::Sender<PitchSample>,
    task: Option<JoinHandle<()>>,
}

impl ReplaySource {
    /// Create a new replay source emitting one sample per `tick`
    pub fn new(name: impl Into<String>, samples: Vec<PitchSample>, tick: Duration) -> Self {
        let (sender, _) = broadcast::channel(64);
        Self {
            name: name.into(),
            samples: Arc::new(samples),
            tick,
            looping: false,
            running: Arc::new(AtomicBool::new(false)),
            sender,
            task: None,
        }
    }

    /// Start over from the first sample after the last one
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }
}

impl PitchSource for ReplaySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn start(&mut self) -> Result<()> {
        if self.is_running() {
            return Ok(());
        }

        self.running.store(true, Ordering::SeqCst);

        let name = self.name.clone();
        let samples = Arc::clone(&self.samples);
        let tick = self.tick;
        let looping = self.looping;
        let running = Arc::clone(&self.running);
        let sender = self.sender.clone();

        log::info!("Replaying {} samples from {}", samples.len(), name);

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick);

            'replay: while running.load(Ordering::SeqCst) {
                for sample in samples.iter() {
                    interval.tick().await;
                    if !running.load(Ordering::SeqCst) {
                        break 'replay;
                    }
                    // Send (ignore errors if no receivers)
                    let _ = sender.send(*sample);
                }
                if !looping || samples.is_empty() {
                    break;
                }
            }

            running.store(false, Ordering::SeqCst);
            log::info!("Replay {} finished", name);
        });

        self.task = Some(task);
        Ok(())
    }

    fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    fn subscribe(&self) -> broadcast::Receiver<PitchSample> {
        self.sender.subscribe()
    }
}

impl Drop for ReplaySource {
    fn drop(&mut self) {
        self.stop();
    }
}
