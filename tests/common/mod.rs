//! Shared test doubles for the playback core.
#![allow(dead_code)] // not every test binary exercises every helper

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Weak};

use serenity::async_trait;

use jukebox::player::{AudioOutput, MusicError, OutputStatus, StatusObserver};

/// Scripted stand-in for the songbird-backed output. Records calls and lets
/// tests drive status transitions by hand or automatically on open.
#[derive(Default)]
pub struct FakeOutput {
    observer: Mutex<Option<Weak<dyn StatusObserver>>>,
    failing: Mutex<HashSet<String>>,
    /// Every locator handed to `open_stream`, in call order.
    attempts: Mutex<Vec<String>>,
    /// Locators that opened successfully, in call order.
    opened: Mutex<Vec<String>>,
    pub stop_calls: AtomicUsize,
    pub destroy_calls: AtomicUsize,
    auto_playing: AtomicBool,
}

impl FakeOutput {
    /// An output that confirms Playing as soon as a stream opens.
    pub fn new() -> Arc<Self> {
        let output = Arc::new(Self::default());
        output.auto_playing.store(true, Ordering::SeqCst);
        output
    }

    /// An output that never confirms Playing on its own; the test emits every
    /// status transition itself.
    pub fn manual() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make `open_stream` fail for the given locator.
    pub fn fail_on(&self, locator: &str) {
        self.failing.lock().unwrap().insert(locator.to_string());
    }

    pub fn attempted_locators(&self) -> Vec<String> {
        self.attempts.lock().unwrap().clone()
    }

    pub fn opened_locators(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }

    /// Deliver a status transition to the attached observer, as the driver
    /// would.
    pub async fn emit(&self, status: OutputStatus) {
        let observer = self.observer.lock().unwrap().clone();
        if let Some(observer) = observer.and_then(|weak| weak.upgrade()) {
            observer.on_status(status).await;
        }
    }
}

#[async_trait]
impl AudioOutput for FakeOutput {
    fn attach_observer(&self, observer: Arc<dyn StatusObserver>) {
        *self.observer.lock().unwrap() = Some(Arc::downgrade(&observer));
    }

    async fn open_stream(&self, locator: &str) -> Result<(), MusicError> {
        self.attempts.lock().unwrap().push(locator.to_string());
        if self.failing.lock().unwrap().contains(locator) {
            return Err(MusicError::StreamOpenError(format!(
                "no stream for {locator}"
            )));
        }
        self.opened.lock().unwrap().push(locator.to_string());
        if self.auto_playing.load(Ordering::SeqCst) {
            self.emit(OutputStatus::Playing).await;
        }
        Ok(())
    }

    async fn stop(&self) {
        self.stop_calls.fetch_add(1, Ordering::SeqCst);
        self.emit(OutputStatus::Idle).await;
    }

    async fn destroy(&self) {
        self.destroy_calls.fetch_add(1, Ordering::SeqCst);
    }
}
