//! Scripted collaborators shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use rig_acp_capabilities::{
    DetectionResult, HostError, InstallProgress, Notifier, Probe, ProbeError, TerminalLauncher,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A probe returning a configurable result and counting calls.
pub struct ScriptedProbe {
    calls: AtomicUsize,
    next: Mutex<Result<DetectionResult, ProbeError>>,
    delay: Option<Duration>,
}

impl ScriptedProbe {
    pub fn new(next: Result<DetectionResult, ProbeError>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            next: Mutex::new(next),
            delay: None,
        })
    }

    /// A probe that sleeps before answering, to overlap concurrent callers.
    pub fn slow(next: Result<DetectionResult, ProbeError>, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            next: Mutex::new(next),
            delay: Some(delay),
        })
    }

    pub fn installed(version: &str) -> Arc<Self> {
        Self::new(installed(version))
    }

    pub fn set(&self, next: Result<DetectionResult, ProbeError>) {
        *self.next.lock().unwrap() = next;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Probe for ScriptedProbe {
    async fn probe(&self) -> Result<DetectionResult, ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.next.lock().unwrap().clone()
    }
}

pub fn installed(version: &str) -> Result<DetectionResult, ProbeError> {
    Ok(DetectionResult::installed(
        "/usr/local/bin/claude",
        Some(version.to_string()),
    ))
}

/// A notifier that answers prompts from a script and records everything.
#[derive(Default)]
pub struct RecordingNotifier {
    answer: Option<String>,
    fail_prompt: bool,
    fail_open: bool,
    pub prompts: Mutex<Vec<(String, Vec<String>)>>,
    pub opened: Mutex<Vec<String>>,
    pub progress: Mutex<Vec<InstallProgress>>,
}

impl RecordingNotifier {
    pub fn answering(label: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            answer: label.map(str::to_string),
            ..Default::default()
        })
    }

    /// Answers with `label` but cannot open links.
    pub fn answering_without_browser(label: &str) -> Arc<Self> {
        Arc::new(Self {
            answer: Some(label.to_string()),
            fail_open: true,
            ..Default::default()
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail_prompt: true,
            ..Default::default()
        })
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn show_choice(
        &self,
        message: &str,
        options: &[&str],
    ) -> Result<Option<String>, HostError> {
        self.prompts.lock().unwrap().push((
            message.to_string(),
            options.iter().map(|o| o.to_string()).collect(),
        ));
        if self.fail_prompt {
            return Err(HostError::new("notification surface unavailable"));
        }
        Ok(self.answer.clone())
    }

    async fn open_link(&self, url: &str) -> Result<(), HostError> {
        if self.fail_open {
            return Err(HostError::new("no browser available"));
        }
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }

    fn report_progress(&self, progress: &InstallProgress) {
        self.progress.lock().unwrap().push(progress.clone());
    }
}

/// A terminal that records the commands it was asked to run.
#[derive(Default)]
pub struct RecordingTerminal {
    refuse: bool,
    pub commands: Mutex<Vec<String>>,
}

impl RecordingTerminal {
    /// A terminal that records commands but refuses to launch them.
    pub fn refusing() -> Arc<Self> {
        Arc::new(Self {
            refuse: true,
            ..Default::default()
        })
    }
}

#[async_trait]
impl TerminalLauncher for RecordingTerminal {
    async fn run_install_command(&self, command_line: &str) -> Result<(), HostError> {
        self.commands.lock().unwrap().push(command_line.to_string());
        if self.refuse {
            return Err(HostError::new("terminal unavailable"));
        }
        Ok(())
    }
}
