//! Stage handoff notification seam.
//!
//! A purely side-effecting hook for visualization or telemetry: the
//! controller awaits each notification before a stage proceeds, so a
//! notifier can pace the pipeline, but its failures are logged and
//! swallowed - a broken hook never breaks orchestration.

use async_trait::async_trait;

use crate::state::{HandoffSource, StageId};
use crate::Result;

/// Receives directional stage handoffs.
#[async_trait]
pub trait HandoffNotifier: Send + Sync {
    /// Called once per stage transition, before the stage's work.
    async fn notify(&self, from: HandoffSource, to: StageId) -> Result<()>;
}

/// Notifier that does nothing. The default when none is attached.
pub struct NoopNotifier;

#[async_trait]
impl HandoffNotifier for NoopNotifier {
    async fn notify(&self, _from: HandoffSource, _to: StageId) -> Result<()> {
        Ok(())
    }
}
