//! End-to-end orchestration scenarios.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use nexus_core::{
    FragmentGenerator, HandoffNotifier, HandoffSource, NexusError, Orchestrator,
    OrchestratorConfig, StageId, SwarmConfig, NO_CONSENSUS_FALLBACK,
};

struct ConstGenerator(&'static str);

#[async_trait]
impl FragmentGenerator for ConstGenerator {
    async fn generate(&self, _prompt: &str) -> nexus_gen::Result<String> {
        Ok(self.0.to_string())
    }
}

struct AlwaysFails;

#[async_trait]
impl FragmentGenerator for AlwaysFails {
    async fn generate(&self, _prompt: &str) -> nexus_gen::Result<String> {
        Err(nexus_gen::GenError::Request("model unavailable".to_string()))
    }
}

/// Records every handoff in arrival order.
struct RecordingNotifier {
    handoffs: Mutex<Vec<(HandoffSource, StageId)>>,
}

impl RecordingNotifier {
    fn new() -> Self {
        Self {
            handoffs: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl HandoffNotifier for RecordingNotifier {
    async fn notify(&self, from: HandoffSource, to: StageId) -> nexus_core::Result<()> {
        self.handoffs.lock().unwrap().push((from, to));
        Ok(())
    }
}

struct FailingNotifier;

#[async_trait]
impl HandoffNotifier for FailingNotifier {
    async fn notify(&self, _from: HandoffSource, _to: StageId) -> nexus_core::Result<()> {
        Err(NexusError::Notifier("animation surface gone".to_string()))
    }
}

fn quick_config() -> OrchestratorConfig {
    OrchestratorConfig::new()
        .with_stage_pause_ms(0)
        .with_genesis_entropy("fixed-genesis")
}

#[tokio::test]
async fn test_two_agents_one_round_reach_consensus() {
    let config = quick_config().with_swarm(
        SwarmConfig::new()
            .with_agent_count(2)
            .with_round_count(1),
    );
    let mut orchestrator = Orchestrator::new(config, Arc::new(ConstGenerator("X")));

    let state = orchestrator.run("produce X").await.unwrap();

    assert_eq!(state.candidates.len(), 1);
    let winner = &state.candidates[0];
    assert_eq!(winner.text, "X");
    assert_eq!(winner.vote_count, 2);
    assert_eq!(
        winner.contributing_agent_ids,
        vec!["cognito-0", "cognito-1"]
    );
    assert_eq!(state.final_code.as_deref(), Some("X"));
    assert!(state.consensus_score >= 2.0);
    assert!(!state.is_loading);
}

#[tokio::test]
async fn test_all_failures_yield_no_consensus_fallback() {
    let mut orchestrator = Orchestrator::new(quick_config(), Arc::new(AlwaysFails));

    let state = orchestrator.run("anything").await.unwrap();

    assert_eq!(state.final_code.as_deref(), Some(NO_CONSENSUS_FALLBACK));
    assert_eq!(state.consensus_score, 0.0);
    assert!(state.candidates.is_empty());
    assert!(!state.is_loading);
}

#[tokio::test]
async fn test_fenced_generator_output_is_stripped_end_to_end() {
    let config = quick_config().with_swarm(
        SwarmConfig::new()
            .with_agent_count(1)
            .with_round_count(1),
    );
    let mut orchestrator = Orchestrator::new(
        config,
        Arc::new(ConstGenerator("```js\nconsole.log(1)\n```")),
    );

    let state = orchestrator.run("log one").await.unwrap();
    assert_eq!(state.final_code.as_deref(), Some("console.log(1)"));
}

#[tokio::test]
async fn test_handoffs_follow_strict_forward_order() {
    let notifier = Arc::new(RecordingNotifier::new());
    let mut orchestrator = Orchestrator::new(quick_config(), Arc::new(ConstGenerator("X")))
        .with_notifier(Arc::clone(&notifier) as Arc<dyn HandoffNotifier>);

    let state = orchestrator.run("req").await.unwrap();

    let handoffs = notifier.handoffs.lock().unwrap();
    assert_eq!(
        *handoffs,
        vec![
            (HandoffSource::External, StageId::Nexus),
            (HandoffSource::Stage(StageId::Nexus), StageId::Cognito),
            (HandoffSource::Stage(StageId::Cognito), StageId::Relay),
            (HandoffSource::Stage(StageId::Relay), StageId::Sentinel),
            (HandoffSource::Stage(StageId::Sentinel), StageId::Echo),
        ]
    );

    // Every stage is settled once the run returns.
    for id in StageId::ALL {
        assert!(!state.stages.stage(id).is_loading, "{id} still loading");
    }
}

#[tokio::test]
async fn test_notifier_failure_does_not_change_outcome() {
    let mut plain = Orchestrator::new(quick_config(), Arc::new(ConstGenerator("X")));
    let baseline = plain.run("req").await.unwrap();

    let mut noisy = Orchestrator::new(quick_config(), Arc::new(ConstGenerator("X")))
        .with_notifier(Arc::new(FailingNotifier));
    let state = noisy.run("req").await.unwrap();

    assert_eq!(state.final_code, baseline.final_code);
    assert_eq!(state.consensus_score, baseline.consensus_score);
    assert_eq!(state.candidates.len(), baseline.candidates.len());
}

#[tokio::test]
async fn test_second_run_starts_from_clean_state() {
    let mut orchestrator = Orchestrator::new(quick_config(), Arc::new(ConstGenerator("X")));

    let first = orchestrator.run("req").await.unwrap();
    let expected_votes = first.candidates[0].vote_count;

    let second = orchestrator.run("req").await.unwrap();

    // No bleed-through: the second run counts only its own votes.
    assert_eq!(second.candidates.len(), 1);
    assert_eq!(second.candidates[0].vote_count, expected_votes);

    // Visibility persists across runs until dismissed explicitly.
    assert!(second.is_visible);
    orchestrator.dismiss();
    assert!(!orchestrator.state().is_visible);
}

#[tokio::test]
async fn test_observers_receive_terminal_snapshot() {
    let mut orchestrator = Orchestrator::new(quick_config(), Arc::new(ConstGenerator("X")));
    let receiver = orchestrator.subscribe();

    orchestrator.run("req").await.unwrap();

    let snapshot = receiver.borrow();
    assert_eq!(snapshot.final_code.as_deref(), Some("X"));
    assert_eq!(snapshot.stages.echo.status, "Report generated.");
    assert_eq!(snapshot.stages.nexus.status, "Orchestration complete.");
    assert!(snapshot.is_visible);
}

#[tokio::test]
async fn test_partial_failure_keeps_surviving_fragments() {
    /// Fails only for the prompt that names cognito-0.
    struct FailFirst;

    #[async_trait]
    impl FragmentGenerator for FailFirst {
        async fn generate(&self, prompt: &str) -> nexus_gen::Result<String> {
            if prompt.contains("(cognito-0)") {
                Err(nexus_gen::GenError::Request("boom".to_string()))
            } else {
                Ok("fn survivor() {}".to_string())
            }
        }
    }

    let config = quick_config().with_swarm(
        SwarmConfig::new()
            .with_agent_count(3)
            .with_round_count(1),
    );
    let mut orchestrator = Orchestrator::new(config, Arc::new(FailFirst));

    let state = orchestrator.run("req").await.unwrap();

    // The two healthy agents still reach consensus; the failed one is
    // excluded from scoring rather than polluting it.
    assert_eq!(state.final_code.as_deref(), Some("fn survivor() {}"));
    assert_eq!(state.candidates.len(), 1);
    assert_eq!(state.candidates[0].vote_count, 2);
}
