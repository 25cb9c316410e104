use super::{DecisionRecord, Historian, HistorianError};

/// A historian that throws everything away.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHistorian;

impl Historian for NullHistorian {
    fn record_decision(&mut self, _record: &DecisionRecord) -> Result<(), HistorianError> {
        Ok(())
    }
}
