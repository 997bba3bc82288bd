//! Integration tests for the installation check and prompt flow.

mod common;

use common::{installed, RecordingNotifier, RecordingTerminal, ScriptedProbe};
use rig_acp_capabilities::{
    AgentKind, CheckOutcome, DetectOptions, DetectionResult, Detector, InstallError,
    InstallFlowState, InstallProgress, InstallerOrchestrator, PanelMessage, ProbeError,
    PromptOutcome,
};
use std::sync::{Arc, Mutex};

struct Harness {
    probe: Arc<ScriptedProbe>,
    notifier: Arc<RecordingNotifier>,
    terminal: Arc<RecordingTerminal>,
    installer: InstallerOrchestrator,
}

fn harness(probe: Arc<ScriptedProbe>, notifier: Arc<RecordingNotifier>) -> Harness {
    harness_with_terminal(probe, notifier, Arc::new(RecordingTerminal::default()))
}

fn harness_with_terminal(
    probe: Arc<ScriptedProbe>,
    notifier: Arc<RecordingNotifier>,
    terminal: Arc<RecordingTerminal>,
) -> Harness {
    let detector = Arc::new(Detector::new(
        AgentKind::Gemini,
        probe.clone(),
        DetectOptions::default(),
    ));
    let installer = InstallerOrchestrator::new(detector, notifier.clone(), terminal.clone());
    Harness {
        probe,
        notifier,
        terminal,
        installer,
    }
}

async fn check(installer: &InstallerOrchestrator) -> (CheckOutcome, Vec<PanelMessage>) {
    let published = Arc::new(Mutex::new(Vec::new()));
    let sink = published.clone();
    let outcome = installer
        .check_installation(move |message| sink.lock().unwrap().push(message))
        .await;
    let messages = published.lock().unwrap().clone();
    (outcome, messages)
}

#[tokio::test]
async fn test_check_installed_publishes_once_without_instructions() {
    let h = harness(
        ScriptedProbe::installed("0.3.0"),
        RecordingNotifier::answering(None),
    );

    let (outcome, messages) = check(&h.installer).await;

    assert_eq!(outcome, CheckOutcome::Installed);
    assert_eq!(messages.len(), 1);
    let PanelMessage::CliDetectionResult(data) = &messages[0] else {
        panic!("unexpected message: {:?}", messages[0]);
    };
    assert!(data.is_installed);
    assert_eq!(data.version.as_deref(), Some("0.3.0"));
    assert!(data.install_instructions.is_none());

    let json = serde_json::to_value(&messages[0]).unwrap();
    assert_eq!(json["type"], "cliDetectionResult");
    assert!(json["data"].get("installInstructions").is_none());
}

#[tokio::test]
async fn test_check_not_installed_includes_instructions() {
    let h = harness(
        ScriptedProbe::new(Ok(DetectionResult::not_installed("gemini not found"))),
        RecordingNotifier::answering(None),
    );

    let (outcome, messages) = check(&h.installer).await;

    assert_eq!(outcome, CheckOutcome::NotInstalled);
    assert_eq!(h.installer.state(), InstallFlowState::NotInstalled);
    let json = serde_json::to_value(&messages[0]).unwrap();
    assert_eq!(json["data"]["isInstalled"], false);
    assert_eq!(json["data"]["error"], "gemini not found");
    assert_eq!(
        json["data"]["installInstructions"]["documentationUrl"],
        "https://github.com/google-gemini/gemini-cli"
    );
}

#[tokio::test]
async fn test_check_failure_publishes_nothing() {
    let h = harness(
        ScriptedProbe::new(Err(ProbeError::PermissionDenied {
            path: "/usr/bin/gemini".to_string(),
        })),
        RecordingNotifier::answering(None),
    );

    let (outcome, messages) = check(&h.installer).await;

    assert_eq!(outcome, CheckOutcome::Suppressed);
    assert!(messages.is_empty());
    assert_eq!(h.installer.state(), InstallFlowState::Idle);
}

#[tokio::test]
async fn test_prompt_offers_exactly_three_choices() {
    let h = harness(
        ScriptedProbe::installed("0.3.0"),
        RecordingNotifier::answering(None),
    );

    h.installer.prompt_installation().await.unwrap();

    let prompts = h.notifier.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].0.contains("Gemini CLI"));
    assert_eq!(
        prompts[0].1,
        ["Install Now", "View Documentation", "Remind Me Later"]
    );
}

#[tokio::test]
async fn test_install_now_dispatches_command_only() {
    let h = harness(
        ScriptedProbe::new(Ok(DetectionResult::not_installed("missing"))),
        RecordingNotifier::answering(Some("Install Now")),
    );

    let outcome = h.installer.prompt_installation().await.unwrap();

    assert_eq!(outcome, PromptOutcome::Installing);
    assert_eq!(h.installer.state(), InstallFlowState::Installing);
    assert_eq!(
        *h.terminal.commands.lock().unwrap(),
        ["npm install -g @google/gemini-cli"]
    );
    assert!(h.notifier.opened.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_view_documentation_opens_link_only() {
    let h = harness(
        ScriptedProbe::new(Ok(DetectionResult::not_installed("missing"))),
        RecordingNotifier::answering(Some("View Documentation")),
    );

    let outcome = h.installer.prompt_installation().await.unwrap();

    assert_eq!(outcome, PromptOutcome::OpenedDocumentation);
    assert_eq!(
        *h.notifier.opened.lock().unwrap(),
        ["https://github.com/google-gemini/gemini-cli"]
    );
    assert!(h.terminal.commands.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_remind_me_later_and_dismissal_do_nothing() {
    for answer in [Some("Remind Me Later"), None] {
        let h = harness(
            ScriptedProbe::new(Ok(DetectionResult::not_installed("missing"))),
            RecordingNotifier::answering(answer),
        );

        let outcome = h.installer.prompt_installation().await.unwrap();

        assert_eq!(outcome, PromptOutcome::Dismissed);
        assert_eq!(h.installer.state(), InstallFlowState::Dismissed);
        assert!(h.terminal.commands.lock().unwrap().is_empty());
        assert!(h.notifier.opened.lock().unwrap().is_empty());
        assert!(h.notifier.progress.lock().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_prompt_failure_is_an_error() {
    let h = harness(
        ScriptedProbe::new(Ok(DetectionResult::not_installed("missing"))),
        RecordingNotifier::failing(),
    );

    let error = h.installer.prompt_installation().await.unwrap_err();

    assert!(matches!(error, InstallError::Notification { .. }));
    assert!(h.terminal.commands.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_install_reports_progress_in_order() {
    let h = harness(
        ScriptedProbe::new(Ok(DetectionResult::not_installed("missing"))),
        RecordingNotifier::answering(None),
    );

    h.installer.install().await.unwrap();

    let progress = h.notifier.progress.lock().unwrap();
    assert_eq!(
        *progress,
        [
            InstallProgress::Started {
                agent: AgentKind::Gemini
            },
            InstallProgress::Dispatching {
                agent: AgentKind::Gemini,
                command: "npm install -g @google/gemini-cli".to_string(),
            },
            InstallProgress::Dispatched {
                agent: AgentKind::Gemini
            },
        ]
    );
}

#[tokio::test]
async fn test_check_after_install_reprobes() {
    let h = harness(
        ScriptedProbe::new(Ok(DetectionResult::not_installed("missing"))),
        RecordingNotifier::answering(None),
    );

    let (first, _) = check(&h.installer).await;
    assert_eq!(first, CheckOutcome::NotInstalled);

    h.installer.install().await.unwrap();
    h.probe.set(installed("0.2.4"));

    let (second, messages) = check(&h.installer).await;

    assert_eq!(second, CheckOutcome::Installed);
    assert_eq!(h.probe.calls(), 2);
    let PanelMessage::CliDetectionResult(data) = &messages[0] else {
        panic!("unexpected message: {:?}", messages[0]);
    };
    assert_eq!(data.version.as_deref(), Some("0.2.4"));
}

#[tokio::test]
async fn test_repeated_checks_use_detector_cache() {
    let h = harness(
        ScriptedProbe::installed("1.0.0"),
        RecordingNotifier::answering(None),
    );

    check(&h.installer).await;
    check(&h.installer).await;

    assert_eq!(h.probe.calls(), 1);
}

#[tokio::test]
async fn test_install_now_with_refusing_terminal_returns_to_idle() {
    let h = harness_with_terminal(
        ScriptedProbe::new(Ok(DetectionResult::not_installed("missing"))),
        RecordingNotifier::answering(Some("Install Now")),
        RecordingTerminal::refusing(),
    );

    let error = h.installer.prompt_installation().await.unwrap_err();

    assert!(matches!(error, InstallError::Launch { .. }));
    assert_eq!(h.installer.state(), InstallFlowState::Idle);

    let progress = h.notifier.progress.lock().unwrap();
    let last = progress.last().expect("progress should be reported");
    assert_eq!(
        *last,
        InstallProgress::Failed {
            agent: AgentKind::Gemini,
            message: "terminal unavailable".to_string(),
        }
    );
    assert!(last.is_complete());
    assert!(!progress
        .iter()
        .any(|p| matches!(p, InstallProgress::Dispatched { .. })));
}

#[tokio::test]
async fn test_refused_install_keeps_detector_cache() {
    let h = harness_with_terminal(
        ScriptedProbe::new(Ok(DetectionResult::not_installed("missing"))),
        RecordingNotifier::answering(None),
        RecordingTerminal::refusing(),
    );

    check(&h.installer).await;
    assert!(h.installer.install().await.is_err());
    check(&h.installer).await;

    assert_eq!(h.probe.calls(), 1);
    assert_eq!(h.terminal.commands.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_documentation_link_failure_returns_to_idle() {
    let h = harness(
        ScriptedProbe::new(Ok(DetectionResult::not_installed("missing"))),
        RecordingNotifier::answering_without_browser("View Documentation"),
    );

    let error = h.installer.prompt_installation().await.unwrap_err();

    match &error {
        InstallError::OpenLink { url, .. } => {
            assert_eq!(url, "https://github.com/google-gemini/gemini-cli");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(h.installer.state(), InstallFlowState::Idle);
    assert!(h.terminal.commands.lock().unwrap().is_empty());
}
