use std::{cell::RefCell, rc::Rc};

use super::{DecisionRecord, Historian, HistorianError};

/// VecHistorian is a historian that will
/// append each decision to a vector.
pub struct VecHistorian {
    records: Rc<RefCell<Vec<DecisionRecord>>>,
}

impl VecHistorian {
    /// Create a new storage for the historian
    /// that can be introspected later.
    pub fn new_storage() -> Rc<RefCell<Vec<DecisionRecord>>> {
        Rc::new(RefCell::new(vec![]))
    }

    /// Create a new VecHistorian with the provided storage
    /// `Rc<RefCell<Vec<DecisionRecord>>>`
    pub fn new(records: Rc<RefCell<Vec<DecisionRecord>>>) -> Self {
        Self { records }
    }
}

impl Historian for VecHistorian {
    fn record_decision(&mut self, record: &DecisionRecord) -> Result<(), HistorianError> {
        let mut records = self.records.try_borrow_mut()?;
        records.push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::bot::Action;

    fn record(action: Action) -> DecisionRecord {
        DecisionRecord {
            game: 1,
            round_num: 2,
            pot: 100,
            to_call: 0,
            pot_odds: 0.0,
            equity: Some(0.7),
            action,
            fallback: false,
            player_bets: HashMap::new(),
        }
    }

    #[test]
    fn test_records_in_order() {
        let storage = VecHistorian::new_storage();
        let mut hist = VecHistorian::new(storage.clone());

        hist.record_decision(&record(Action::Check)).unwrap();
        hist.record_decision(&record(Action::Raise(60))).unwrap();

        let records = storage.borrow();
        assert_eq!(2, records.len());
        assert_eq!(Action::Check, records[0].action);
        assert_eq!(Action::Raise(60), records[1].action);
    }

    #[test]
    fn test_borrowed_storage_errors() {
        let storage = VecHistorian::new_storage();
        let mut hist = VecHistorian::new(storage.clone());

        let _held = storage.borrow();
        assert!(hist.record_decision(&record(Action::Fold)).is_err());
    }
}
