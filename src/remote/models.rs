/// One row of the league table, in the order the source returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsRow {
    pub position: i64,
    pub team: String,
    pub points: i64,
    pub played: i64,
    pub won: i64,
    pub drawn: i64,
    pub lost: i64,
}

/// A top-scorer entry. `rank` is 1-based arrival order, not a source field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorerEntry {
    pub rank: usize,
    pub player: String,
    pub team: String,
    pub goals: i64,
}

/// A scheduled or played match.
///
/// `utc_date` is kept as the raw remote string: kickoff normalization (and
/// its skip-on-parse-error rule) belongs to the schedule layer, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub utc_date: String,
    pub home_team: String,
    pub away_team: String,
    /// None until the match has been played.
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
}
