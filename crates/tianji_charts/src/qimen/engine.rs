//! Qimen scoring.
//!
//! `score = 60 + door weight + relation adjustment`, where the relation is
//! taken from the day palace's element ("self") toward the hour palace's
//! element ("matter"). The engine has no side effects; locking lives in
//! [`crate::qimen::gate`].

use tracing::info;

use tianji_calendar::{CalendarConverter, CivilDateTime};
use tianji_cycle::ElementRelation;

use crate::error::ChartError;
use crate::qimen::derivation::PalaceDerivation;
use crate::qimen::types::{QimenResult, QuestionCategory, Signal};

/// Score before door and relation adjustments.
pub const BASE_SCORE: i32 = 60;

/// Lowest score classified green.
pub const GREEN_MIN: i32 = 80;

/// Highest score classified red.
pub const RED_MAX: i32 = 50;

/// Adjustment for the relation of self toward matter.
pub const fn relation_adjustment(self_to_matter: ElementRelation) -> i32 {
    match self_to_matter {
        ElementRelation::Same => 10,
        ElementRelation::GeneratedBy => 20,
        ElementRelation::Generates => -10,
        ElementRelation::Controls => 5,
        ElementRelation::ControlledBy => -30,
    }
}

pub const fn classify_signal(score: i32) -> Signal {
    if score >= GREEN_MIN {
        Signal::Green
    } else if score <= RED_MAX {
        Signal::Red
    } else {
        Signal::Yellow
    }
}

/// Next even hour boundary after `hour`, rendered `HH:00`.
///
/// The deadline is always strictly later than `now`: a reading at exactly
/// 14:00 holds until 16:00, and any time in the 23:00 hour until 00:00.
///
/// # Panics
/// When `hour` is not in `0..24`.
pub fn validity_deadline(hour: u32) -> String {
    assert!(hour < 24, "hour of day must be in 0..24, got {hour}");
    format!("{:02}:00", ((hour / 2 + 1) * 2) % 24)
}

fn relation_summary(rel: ElementRelation) -> &'static str {
    match rel {
        ElementRelation::Same => "Self and matter stand level; steady progress is possible.",
        ElementRelation::GeneratedBy => "The matter feeds you; conditions favour acting now.",
        ElementRelation::Generates => "You pour effort into the matter; expect a drain before returns.",
        ElementRelation::Controls => "You hold the upper hand; results follow if you press on.",
        ElementRelation::ControlledBy => "The matter presses on you; wait for a better hour.",
    }
}

/// Compute a Qimen reading for `category` at `now`.
pub fn compute_qimen(
    converter: &dyn CalendarConverter,
    derivation: &dyn PalaceDerivation,
    category: QuestionCategory,
    now: &CivilDateTime,
) -> Result<QimenResult, ChartError> {
    let coords = converter.convert(now, None)?;
    let hour = now.hour();
    let assignment = derivation.derive(hour);

    let self_element = assignment.day_palace.element();
    let matter_element = assignment.hour_palace.element();
    let rel = tianji_cycle::relation(self_element, matter_element);
    let door = assignment.door;
    let door_class = door.class();

    let score = BASE_SCORE + door.weight() + relation_adjustment(rel);
    let signal = classify_signal(score);

    let factors = vec![
        format!("door:{}:{}", door.name().to_ascii_lowercase(), door_class.name()),
        format!("relation:{}", rel.name()),
        format!(
            "self:{}:{}",
            assignment.day_palace.name().to_ascii_lowercase(),
            self_element.name()
        ),
        format!(
            "matter:{}:{}",
            assignment.hour_palace.name().to_ascii_lowercase(),
            matter_element.name()
        ),
    ];

    let result = QimenResult {
        category,
        signal,
        score,
        summary: relation_summary(rel).to_string(),
        factors,
        valid_until: validity_deadline(hour),
        day_stem: coords.day_pillar.stem,
        hour_stem: coords.hour_pillar.stem,
        day_palace: assignment.day_palace,
        hour_palace: assignment.hour_palace,
        door,
        door_class,
        relation: rel,
        computed_at: *now,
    };

    info!(
        category = category.name(),
        score,
        signal = signal.name(),
        door = door.glyph(),
        "computed qimen reading"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_boundaries() {
        assert_eq!(classify_signal(80), Signal::Green);
        assert_eq!(classify_signal(79), Signal::Yellow);
        assert_eq!(classify_signal(51), Signal::Yellow);
        assert_eq!(classify_signal(50), Signal::Red);
        assert_eq!(classify_signal(100), Signal::Green);
        assert_eq!(classify_signal(10), Signal::Red);
    }

    #[test]
    fn deadlines() {
        assert_eq!(validity_deadline(0), "02:00");
        assert_eq!(validity_deadline(13), "14:00");
        assert_eq!(validity_deadline(14), "16:00");
        assert_eq!(validity_deadline(22), "00:00");
        assert_eq!(validity_deadline(23), "00:00");
    }

    #[test]
    fn deadline_strictly_after_hour() {
        for hour in 0..24u32 {
            let deadline: u32 = validity_deadline(hour)[..2].parse().unwrap();
            let ahead = (deadline + 24 - hour) % 24;
            assert!((1..=2).contains(&ahead), "{hour} -> {deadline}");
            assert_eq!(deadline % 2, 0);
        }
        assert_eq!(validity_deadline(14), "16:00");
    }

    #[test]
    fn adjustments() {
        assert_eq!(relation_adjustment(ElementRelation::Same), 10);
        assert_eq!(relation_adjustment(ElementRelation::GeneratedBy), 20);
        assert_eq!(relation_adjustment(ElementRelation::Generates), -10);
        assert_eq!(relation_adjustment(ElementRelation::Controls), 5);
        assert_eq!(relation_adjustment(ElementRelation::ControlledBy), -30);
    }
}
