//! Cooldown-gated Qimen consultation.
//!
//! One reading per category per cooldown window. The check-then-set is not
//! atomic: two concurrent consults may both compute and both set the lock,
//! which only refreshes the timestamp.

use chrono::TimeDelta;
use serde::Serialize;
use tracing::debug;

use tianji_calendar::{CalendarConverter, CivilDateTime};

use crate::cooldown::{CooldownStore, DEFAULT_COOLDOWN_HOURS, lock_active};
use crate::error::ChartError;
use crate::qimen::derivation::{HourCycleStub, PalaceDerivation};
use crate::qimen::engine::compute_qimen;
use crate::qimen::types::{QimenResult, QuestionCategory};

/// Outcome of a gated consultation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum QimenOutcome {
    /// A fresh reading; the category is now locked.
    Computed(QimenResult),
    /// An unexpired lock exists. Business state, not a failure.
    Locked {
        since: CivilDateTime,
        until: CivilDateTime,
    },
}

/// Qimen engine guarded by a per-category cooldown lock.
pub struct QimenGate<S: CooldownStore> {
    store: S,
    converter: Box<dyn CalendarConverter>,
    derivation: Box<dyn PalaceDerivation>,
    cooldown: TimeDelta,
}

impl<S: CooldownStore> QimenGate<S> {
    /// Gate with the hour-cycle palace rule and the default cooldown.
    pub fn new(store: S, converter: Box<dyn CalendarConverter>) -> Self {
        Self {
            store,
            converter,
            derivation: Box::new(HourCycleStub),
            cooldown: TimeDelta::hours(DEFAULT_COOLDOWN_HOURS as i64),
        }
    }

    pub fn with_derivation(mut self, derivation: Box<dyn PalaceDerivation>) -> Self {
        self.derivation = derivation;
        self
    }

    pub fn with_cooldown_hours(mut self, hours: u32) -> Self {
        self.cooldown = TimeDelta::hours(hours as i64);
        self
    }

    pub fn cooldown(&self) -> TimeDelta {
        self.cooldown
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creation time of the active lock on `category`, if any.
    ///
    /// An expired lock is deleted and reported as absent.
    pub fn active_lock(
        &self,
        category: QuestionCategory,
        now: &CivilDateTime,
    ) -> Result<Option<CivilDateTime>, ChartError> {
        let key = category.lock_key();
        match self.store.get(&key)? {
            Some(created) if lock_active(created, *now, self.cooldown) => Ok(Some(created)),
            Some(created) => {
                debug!(key = %key, created = %created, "clearing expired qimen lock");
                self.store.delete(&key)?;
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Compute a reading unless `category` is locked, then lock it.
    pub fn consult(
        &self,
        category: QuestionCategory,
        now: &CivilDateTime,
    ) -> Result<QimenOutcome, ChartError> {
        if let Some(since) = self.active_lock(category, now)? {
            let until = CivilDateTime::from_naive(since.naive() + self.cooldown);
            debug!(category = category.name(), since = %since, until = %until, "qimen locked");
            return Ok(QimenOutcome::Locked { since, until });
        }
        let result = compute_qimen(
            self.converter.as_ref(),
            self.derivation.as_ref(),
            category,
            now,
        )?;
        self.store.set(&category.lock_key(), *now)?;
        debug!(category = category.name(), at = %now, "qimen lock set");
        Ok(QimenOutcome::Computed(result))
    }

    /// Clear the lock on `category`.
    pub fn release(&self, category: QuestionCategory) -> Result<(), ChartError> {
        self.store.delete(&category.lock_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cooldown::InMemoryCooldownStore;
    use tianji_calendar::MeanCycleConverter;

    fn at(time: &str) -> CivilDateTime {
        CivilDateTime::parse("2024-05-01", time).unwrap()
    }

    #[test]
    fn locks_then_expires() {
        let gate = QimenGate::new(
            InMemoryCooldownStore::new(),
            Box::new(MeanCycleConverter::default()),
        );
        let cat = QuestionCategory::Wealth;
        assert!(matches!(gate.consult(cat, &at("08:00")).unwrap(), QimenOutcome::Computed(_)));

        match gate.consult(cat, &at("13:59")).unwrap() {
            QimenOutcome::Locked { since, until } => {
                assert_eq!(since, at("08:00"));
                assert_eq!(until, at("14:00"));
            }
            other => panic!("expected lock, got {other:?}"),
        }

        // Other categories are independent.
        assert!(matches!(
            gate.consult(QuestionCategory::Travel, &at("09:00")).unwrap(),
            QimenOutcome::Computed(_)
        ));

        assert!(gate.active_lock(cat, &at("14:01")).unwrap().is_none());
        assert_eq!(gate.store().get(&cat.lock_key()).unwrap(), None);
    }

    #[test]
    fn release_unlocks() {
        let gate = QimenGate::new(
            InMemoryCooldownStore::new(),
            Box::new(MeanCycleConverter::default()),
        )
        .with_cooldown_hours(1);
        let cat = QuestionCategory::Study;
        gate.consult(cat, &at("08:00")).unwrap();
        assert!(gate.active_lock(cat, &at("08:30")).unwrap().is_some());
        gate.release(cat).unwrap();
        assert!(matches!(gate.consult(cat, &at("08:30")).unwrap(), QimenOutcome::Computed(_)));
    }
}
