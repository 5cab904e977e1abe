//! The chart query interface over an explicit configuration.

use tracing::info;

use tianji_advisory::{Advice, Advisor, AdvisoryError, AdvisoryReport, HttpTextGenerator};
use tianji_calendar::{CalendarConverter, CivilDateTime, MeanCycleConverter};
use tianji_charts::{
    BaziChart, BaziInput, CooldownStore, Gender, InMemoryCooldownStore, JsonFileCooldownStore,
    QimenGate, QimenOutcome, QuestionCategory, ZiweiChart,
};
use tianji_cycle::FiveElementHistogram;

use crate::config::TianjiConfig;
use crate::error::TianjiError;

/// Chart engine with its converter, cooldown store and optional advisor.
///
/// Holds no global state; build one per configuration.
pub struct Tianji {
    converter: MeanCycleConverter,
    gate: QimenGate<Box<dyn CooldownStore>>,
    advisor: Option<Advisor<HttpTextGenerator>>,
}

impl Tianji {
    /// Engine with the store chosen by `config.qimen.lock_file`.
    pub fn new(config: &TianjiConfig) -> Result<Self, TianjiError> {
        let store: Box<dyn CooldownStore> = match &config.qimen.lock_file {
            Some(path) => Box::new(JsonFileCooldownStore::new(path)),
            None => Box::new(InMemoryCooldownStore::new()),
        };
        Self::with_store(config, store)
    }

    /// Engine with an injected cooldown store.
    pub fn with_store(
        config: &TianjiConfig,
        store: Box<dyn CooldownStore>,
    ) -> Result<Self, TianjiError> {
        config.validate()?;
        let converter = MeanCycleConverter::new(config.calendar)?;
        let gate = QimenGate::new(store, Box::new(converter.clone()))
            .with_cooldown_hours(config.qimen.cooldown_hours);
        let advisor = match &config.advisory {
            Some(advisory) => Some(Advisor::new(HttpTextGenerator::new(advisory.clone())?)),
            None => None,
        };
        info!(
            advisory = advisor.is_some(),
            cooldown_hours = config.qimen.cooldown_hours,
            "tianji engine ready"
        );
        Ok(Self {
            converter,
            gate,
            advisor,
        })
    }

    pub fn converter(&self) -> &dyn CalendarConverter {
        &self.converter
    }

    /// BaZi chart from date (`YYYY-MM-DD`) and time (`HH:MM[:SS]`) strings.
    pub fn compute_bazi(
        &self,
        date: &str,
        time: &str,
        longitude_deg: Option<f64>,
        gender: Gender,
    ) -> Result<BaziChart, TianjiError> {
        let input = BaziInput::parse(date, time, longitude_deg, gender)?;
        Ok(tianji_charts::compute_bazi(&self.converter, &input)?)
    }

    /// Cooldown-gated Qimen reading at the caller's `now`.
    pub fn compute_qimen(
        &self,
        category: QuestionCategory,
        now: &CivilDateTime,
    ) -> Result<QimenOutcome, TianjiError> {
        Ok(self.gate.consult(category, now)?)
    }

    pub fn release_qimen(&self, category: QuestionCategory) -> Result<(), TianjiError> {
        Ok(self.gate.release(category)?)
    }

    /// Ziwei chart at `at` with the default (male) polarity and no solar-time
    /// correction.
    pub fn compute_ziwei(&self, at: &CivilDateTime) -> Result<ZiweiChart, TianjiError> {
        self.compute_ziwei_for(at, None, Gender::default())
    }

    pub fn compute_ziwei_for(
        &self,
        at: &CivilDateTime,
        longitude_deg: Option<f64>,
        gender: Gender,
    ) -> Result<ZiweiChart, TianjiError> {
        Ok(tianji_charts::compute_ziwei(
            &self.converter,
            at,
            longitude_deg,
            gender,
        )?)
    }

    /// Element histogram over stem/branch symbols; unknown symbols are
    /// skipped.
    pub fn element_histogram<S: AsRef<str>>(&self, symbols: &[S]) -> FiveElementHistogram {
        tianji_cycle::element_histogram(symbols)
    }

    pub fn advisory_enabled(&self) -> bool {
        self.advisor.is_some()
    }

    /// Advisory report for `chart`; placeholder text on any failure,
    /// including a missing `[advisory]` section.
    pub async fn advise(&self, chart: &BaziChart, target_year: i32) -> Advice {
        match &self.advisor {
            Some(advisor) => advisor.advise_or_placeholder(chart, target_year).await,
            None => Advice {
                report: AdvisoryReport::placeholder(),
                error: Some(AdvisoryError::InvalidConfig("advisory service not configured")),
            },
        }
    }
}
