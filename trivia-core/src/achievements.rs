use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use trivia_types::Sport;

/// Lowest priority tier always considered, even when no table uses it.
const MIN_TIER_SWEEP: u8 = 9;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementMapping {
    /// Text searched for anywhere in the raw achievement, ignoring ASCII case.
    pub pattern: String,
    /// Replacement for the matched text; `None` keeps the text as scraped.
    pub abbreviation: Option<String>,
    /// 1 is the highest priority and is never dropped.
    pub tier: u8,
}

impl AchievementMapping {
    pub fn new(pattern: &str, abbreviation: Option<&str>, tier: u8) -> Self {
        Self {
            pattern: pattern.to_ascii_lowercase(),
            abbreviation: abbreviation.map(str::to_string),
            tier,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedAchievement {
    pub text: String,
    pub tier: u8,
}

/// Per-sport mapping tables. Entries are matched in order, so a specific
/// pattern ("finals mvp") has to be listed before a general one ("mvp").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AchievementTables {
    tables: HashMap<Sport, Vec<AchievementMapping>>,
}

impl AchievementTables {
    pub fn new(tables: HashMap<Sport, Vec<AchievementMapping>>) -> Self {
        Self { tables }
    }

    pub fn mappings(&self, sport: Sport) -> &[AchievementMapping] {
        self.tables.get(&sport).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The built-in tables for every supported sport.
    pub fn standard() -> Self {
        let m = AchievementMapping::new;
        let baseball = vec![
            m("hall of fame", Some("HOF"), 1),
            m("triple crown", None, 1),
            m("mvp", None, 1),
            m("cy young", None, 1),
            m("world series champion", Some("WS Champ"), 2),
            m("world series", Some("WS"), 2),
            m("rookie of the year", Some("ROY"), 2),
            m("all-star", None, 3),
            m("gold glove", None, 4),
            m("silver slugger", None, 4),
            m("batting title", None, 5),
        ];
        let basketball = vec![
            m("hall of fame", Some("HOF"), 1),
            m("finals mvp", None, 1),
            m("as mvp", Some("All-Star MVP"), 4),
            m("nba champ", None, 1),
            m("mvp", None, 1),
            m("def. poy", Some("DPOY"), 2),
            m("rookie of the year", Some("ROY"), 2),
            m("roy", None, 2),
            m("all-nba", None, 3),
            m("all star", Some("All-Star"), 3),
            m("all-defensive", Some("All-Def"), 4),
            m("scoring champ", None, 4),
            m("sixth man", Some("6MOY"), 5),
            m("trb champ", Some("Reb Champ"), 5),
            m("ast champ", Some("Ast Champ"), 5),
            m("most improved", Some("MIP"), 6),
            m("stl champ", Some("Stl Champ"), 6),
            m("blk champ", Some("Blk Champ"), 6),
        ];
        let football = vec![
            m("hall of fame", Some("HOF"), 1),
            m("super bowl mvp", Some("SB MVP"), 1),
            m("super bowl champ", Some("SB Champ"), 1),
            m("mvp", None, 1),
            m("def. poy", Some("DPOY"), 2),
            m("off. poy", Some("OPOY"), 2),
            m("first-team all-pro", Some("1st Team All-Pro"), 3),
            m("off. roy", Some("OROY"), 3),
            m("def. roy", Some("DROY"), 3),
            m("all-pro", None, 4),
            m("pro bowl", None, 4),
            m("comeback player", Some("CPOY"), 5),
        ];

        Self::new(HashMap::from([
            (Sport::Baseball, baseball),
            (Sport::Basketball, basketball),
            (Sport::Football, football),
        ]))
    }
}

pub struct AchievementProcessor {
    tables: AchievementTables,
}

impl AchievementProcessor {
    pub fn new(tables: AchievementTables) -> Self {
        Self { tables }
    }

    /// Map a raw achievement to its display form. Returns `None` when no
    /// pattern matches; unmapped achievements are not shown.
    pub fn abbreviate(&self, sport: Sport, raw: &str) -> Option<ProcessedAchievement> {
        // ASCII lowercasing keeps byte offsets aligned with `raw`
        let lower = raw.to_ascii_lowercase();

        self.tables.mappings(sport).iter().find_map(|mapping| {
            // Tables loaded from a file keep whatever casing they were written in
            let pattern = mapping.pattern.to_ascii_lowercase();
            let start = lower.find(pattern.as_str())?;
            let text = match &mapping.abbreviation {
                None => raw.to_string(),
                Some(abbreviation) => {
                    let end = start + pattern.len();
                    format!("{}{}{}", &raw[..start], abbreviation, &raw[end..])
                }
            };
            Some(ProcessedAchievement {
                text,
                tier: mapping.tier,
            })
        })
    }

    /// Join as many achievements as fit in `max_length`, whole tiers at a
    /// time in priority order. Tier 1 is always kept, even over budget.
    pub fn select_within_budget<S: AsRef<str>>(
        &self,
        sport: Sport,
        raw_achievements: &[S],
        max_length: usize,
    ) -> String {
        let processed: Vec<ProcessedAchievement> = raw_achievements
            .iter()
            .filter_map(|raw| self.abbreviate(sport, raw.as_ref()))
            .collect();

        let last_tier = processed
            .iter()
            .map(|achievement| achievement.tier)
            .max()
            .unwrap_or(0)
            .max(MIN_TIER_SWEEP);

        let mut selected: Vec<&str> = Vec::new();
        let mut accepted = String::new();
        for tier in 1..=last_tier {
            selected.extend(
                processed
                    .iter()
                    .filter(|achievement| achievement.tier == tier)
                    .map(|achievement| achievement.text.as_str()),
            );

            let candidate = selected.join(", ");
            if candidate.len() > max_length {
                if tier == 1 {
                    return candidate;
                }
                tracing::debug!(
                    "Dropping achievements from tier {} onward to fit {} characters",
                    tier,
                    max_length
                );
                return accepted;
            }
            accepted = candidate;
        }

        accepted
    }
}
