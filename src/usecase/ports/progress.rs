use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    Reading,
    IntraDedup,
    HistoricalLookup,
    GateDecision,
    HistoricalPersist,
    Reconstruct,
    Done,
    Failed,
}

impl PipelineStage {
    pub fn label(self) -> &'static str {
        match self {
            PipelineStage::Reading => "reading",
            PipelineStage::IntraDedup => "intra-dedup",
            PipelineStage::HistoricalLookup => "historical-lookup",
            PipelineStage::GateDecision => "gate-decision",
            PipelineStage::HistoricalPersist => "historical-persist",
            PipelineStage::Reconstruct => "reconstruct",
            PipelineStage::Done => "done",
            PipelineStage::Failed => "failed",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, PipelineStage::Done | PipelineStage::Failed)
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Advisory stage notifications. Implementations must not fail the run.
pub trait ProgressSink {
    fn notify(&self, stage: PipelineStage, message: &str);
}

impl<F> ProgressSink for F
where
    F: Fn(PipelineStage, &str),
{
    fn notify(&self, stage: PipelineStage, message: &str) {
        self(stage, message)
    }
}

/// Forwards notifications to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn notify(&self, stage: PipelineStage, message: &str) {
        if stage == PipelineStage::Failed {
            log::warn!("[{stage}] {message}");
        } else {
            log::info!("[{stage}] {message}");
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn notify(&self, _stage: PipelineStage, _message: &str) {}
}
