use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::error::{Result, ScoringError};
use crate::models::{Entry, Event, Finish, NormalizedSailNumber, Race, RaceId, SailNumber};

pub struct InputValidator;

impl InputValidator {
    /// Check one event's records before scoring.
    ///
    /// `finishes` is the event's own finish data (as the data-access
    /// collaborator hands it over, filtered by the event's races).
    /// Errors are conditions the scorer must not run on: a malformed
    /// discard schedule, or two entries that normalize to the same sail
    /// number. Conditions the scorer copes with on its own are warnings:
    /// duplicate finish records (the earliest wins), finishes for boats
    /// or races that are not known, races without finishes, an empty
    /// fleet.
    pub fn validate(
        event: &Event,
        entries: &[Entry],
        races: &[Race],
        finishes: &[Finish],
    ) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();

        for threshold in &event.discard_schedule {
            if *threshold < 0 {
                report.errors.push(format!(
                    "Discard threshold must be non-negative, got {threshold}"
                ));
            }
        }

        let event_entries: Vec<&Entry> = entries
            .iter()
            .filter(|e| e.event_id == event.event_id)
            .collect();
        if event_entries.is_empty() {
            report
                .warnings
                .push(format!("Event '{}' has no entries", event.event_id));
        }

        let mut seen_sails: HashMap<NormalizedSailNumber, &SailNumber> = HashMap::new();
        for entry in &event_entries {
            let normalized = entry.sail_number.normalized();
            if let Some(first) = seen_sails.get(&normalized) {
                if *first == &entry.sail_number {
                    report.errors.push(format!(
                        "Duplicate entry for sail number '{}'",
                        entry.sail_number
                    ));
                } else {
                    report.errors.push(format!(
                        "Entries '{}' and '{}' normalize to the same sail number",
                        first, entry.sail_number
                    ));
                }
            } else {
                seen_sails.insert(normalized, &entry.sail_number);
            }
        }

        let event_races: Vec<&Race> = races
            .iter()
            .filter(|r| r.event_id == event.event_id)
            .collect();
        if event_races.is_empty() {
            report
                .warnings
                .push(format!("Event '{}' has no races", event.event_id));
        }
        let race_ids: HashSet<&RaceId> = event_races.iter().map(|r| &r.race_id).collect();

        for race in &event_races {
            if !finishes.iter().any(|f| f.race_id == race.race_id) {
                report.warnings.push(format!(
                    "Race '{}' has no finish records; every entry scores DNC",
                    race.race_id
                ));
            }
        }

        let entered: HashSet<&SailNumber> =
            event_entries.iter().map(|e| &e.sail_number).collect();
        let mut seen_finishes: HashSet<(&SailNumber, &RaceId)> = HashSet::new();
        for finish in finishes {
            if !race_ids.contains(&finish.race_id) {
                report.warnings.push(format!(
                    "Finish for '{}' references unknown race '{}'",
                    finish.sail_number, finish.race_id
                ));
                continue;
            }
            if !entered.contains(&finish.sail_number) {
                report.warnings.push(format!(
                    "Finish in race '{}' for sail number '{}' with no entry",
                    finish.race_id, finish.sail_number
                ));
            }
            if !seen_finishes.insert((&finish.sail_number, &finish.race_id)) {
                report.warnings.push(format!(
                    "Duplicate finish records for '{}' in race '{}'; scoring keeps the earliest",
                    finish.sail_number, finish.race_id
                ));
            }
        }

        if !report.errors.is_empty() {
            Err(ScoringError::Validation(format!(
                "{} error(s): {}",
                report.errors.len(),
                report.errors.join("; ")
            )))
        } else {
            Ok(report)
        }
    }
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}
