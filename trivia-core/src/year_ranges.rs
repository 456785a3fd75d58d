use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeSet, HashMap, HashSet};
use trivia_types::Sport;

const SUMMARY_LABELS: [&str; 5] = ["season", "career", "yr", "avg", "average"];

/// Whether a raw label from a stats table names an actual year, as opposed to
/// a summary row such as "Career" or "162 Game Avg".
pub fn is_valid_year(label: &str) -> bool {
    let label = label.trim();
    if label.is_empty() {
        return false;
    }
    let lower = label.to_lowercase();
    !SUMMARY_LABELS.iter().any(|summary| lower.contains(summary))
}

/// Trim, drop summary rows, and drop repeated labels (players traded
/// mid-season show up once per team). First-seen order is kept.
pub fn collect_year_labels<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.iter()
        .map(|label| label.as_ref().trim())
        .filter(|label| is_valid_year(label))
        .filter(|label| seen.insert(label.to_string()))
        .map(str::to_string)
        .collect()
}

/// The year each sport's current season started in.
#[derive(Debug, Clone)]
pub struct SeasonCalendar {
    current: HashMap<Sport, i32>,
}

impl SeasonCalendar {
    pub fn new(current: HashMap<Sport, i32>) -> Self {
        Self { current }
    }

    /// Season years as of a calendar date. Football seasons start in
    /// September and basketball seasons in October.
    pub fn for_date(date: NaiveDate) -> Self {
        let year = date.year();
        let month = date.month();
        let current = Sport::ALL
            .iter()
            .map(|&sport| {
                let season = match sport {
                    Sport::Baseball => year,
                    Sport::Football if month >= 9 => year,
                    Sport::Football => year - 1,
                    Sport::Basketball if month >= 10 => year,
                    Sport::Basketball => year - 1,
                };
                (sport, season)
            })
            .collect();
        Self { current }
    }

    pub fn current_season(&self, sport: Sport) -> Option<i32> {
        self.current.get(&sport).copied()
    }
}

pub struct YearRangeFormatter {
    calendar: SeasonCalendar,
}

impl YearRangeFormatter {
    pub fn new(calendar: SeasonCalendar) -> Self {
        Self { calendar }
    }

    /// Collapse year labels into runs such as "2015-2017, 2019-Present".
    pub fn format<S: AsRef<str>>(&self, years: &[S], sport: Sport) -> String {
        let parsed: BTreeSet<i32> = years
            .iter()
            .filter_map(|label| {
                let label = label.as_ref();
                let parsed = parse_year(label);
                if parsed.is_none() {
                    tracing::warn!("Skipping unparseable year label '{}'", label);
                }
                parsed
            })
            .collect();

        let current_season = self.calendar.current_season(sport);
        consecutive_runs(&parsed)
            .into_iter()
            .map(|(start, end)| render_run(start, end, sport, current_season))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// "2019" -> 2019; season labels "2024-25" -> 2024.
fn parse_year(label: &str) -> Option<i32> {
    let label = label.trim();
    let first = label.split('-').next().unwrap_or(label);
    first.trim().parse().ok()
}

fn consecutive_runs(years: &BTreeSet<i32>) -> Vec<(i32, i32)> {
    let mut runs: Vec<(i32, i32)> = Vec::new();
    for &year in years {
        match runs.last_mut() {
            Some((_, end)) if *end + 1 == year => *end = year,
            _ => runs.push((year, year)),
        }
    }
    runs
}

fn render_run(start: i32, end: i32, sport: Sport, current_season: Option<i32>) -> String {
    // A basketball season that starts in one year finishes in the next
    let season_offset = sport == Sport::Basketball;
    let is_present = current_season == Some(end);

    if start == end {
        return match (season_offset, is_present) {
            (_, true) => format!("{}-Present", start),
            (true, false) => format!("{}-{}", start, start + 1),
            (false, false) => start.to_string(),
        };
    }

    let offset = if season_offset { 1 } else { 0 };
    if is_present {
        format!("{}-Present", start + offset)
    } else {
        format!("{}-{}", start + offset, end + offset)
    }
}
