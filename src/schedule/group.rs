use chrono::{DateTime, FixedOffset, NaiveDate};
use std::collections::BTreeMap;
use tracing::debug;

use super::time::{normalize, LocalZone};
use crate::remote::models::Fixture;

/// A fixture paired with its kickoff in the target zone.
#[derive(Debug, Clone)]
pub struct LocalFixture {
    pub kickoff: DateTime<FixedOffset>,
    pub fixture: Fixture,
}

/// The nearest upcoming matchday: a local calendar date and its fixtures in
/// ascending kickoff order.
#[derive(Debug, Clone)]
pub struct MatchDay {
    pub date: NaiveDate,
    pub fixtures: Vec<LocalFixture>,
}

/// Bucket fixtures by local calendar date and select the smallest date
/// >= `today`.
///
/// Fixtures whose kickoff cannot be normalized are dropped, not fatal.
/// `None` means no date >= today exists (season gap), a normal outcome the
/// caller renders as an informational reply.
pub fn group_and_select(
    fixtures: &[Fixture],
    today: NaiveDate,
    zone: &LocalZone,
) -> Option<MatchDay> {
    let mut by_date: BTreeMap<NaiveDate, Vec<LocalFixture>> = BTreeMap::new();

    for fixture in fixtures {
        let kickoff = match normalize(&fixture.utc_date, zone) {
            Ok(dt) => dt,
            Err(e) => {
                debug!(
                    "Dropping fixture {} x {}: {}",
                    fixture.home_team, fixture.away_team, e
                );
                continue;
            }
        };
        by_date.entry(kickoff.date_naive()).or_default().push(LocalFixture {
            kickoff,
            fixture: fixture.clone(),
        });
    }

    // BTreeMap iterates in ascending date order, so the first qualifying
    // bucket is the nearest upcoming matchday.
    let (date, mut fixtures) = by_date.into_iter().find(|(date, _)| *date >= today)?;

    // Stable: equal kickoff instants keep their input order.
    fixtures.sort_by_key(|f| f.kickoff);

    Some(MatchDay { date, fixtures })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(utc_date: &str, home: &str, away: &str) -> Fixture {
        Fixture {
            utc_date: utc_date.to_string(),
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_score: None,
            away_score: None,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn zone() -> LocalZone {
        LocalZone::resolve("America/Sao_Paulo")
    }

    #[test]
    fn selects_nearest_date_on_or_after_today() {
        let fixtures = vec![
            fixture("2025-05-03T19:00:00Z", "Grêmio", "Bahia"),
            fixture("2025-05-01T19:00:00Z", "Santos", "Ceará"),
            fixture("2025-05-03T22:00:00Z", "Flamengo", "Palmeiras"),
        ];
        let matchday = group_and_select(&fixtures, day(2025, 5, 2), &zone()).unwrap();
        assert_eq!(matchday.date, day(2025, 5, 3));
        assert_eq!(matchday.fixtures.len(), 2);
        // Ascending kickoff order within the day.
        assert_eq!(matchday.fixtures[0].fixture.home_team, "Grêmio");
        assert_eq!(matchday.fixtures[1].fixture.home_team, "Flamengo");
    }

    #[test]
    fn all_dates_in_the_past_is_not_found() {
        let fixtures = vec![
            fixture("2025-04-20T19:00:00Z", "Santos", "Ceará"),
            fixture("2025-04-27T19:00:00Z", "Grêmio", "Bahia"),
        ];
        assert!(group_and_select(&fixtures, day(2025, 5, 2), &zone()).is_none());
    }

    #[test]
    fn empty_input_is_not_found() {
        assert!(group_and_select(&[], day(2025, 5, 2), &zone()).is_none());
    }

    #[test]
    fn grouping_uses_the_local_date_not_the_utc_date() {
        // 01:00 UTC on May 3rd is still May 2nd in São Paulo (UTC-3).
        let fixtures = vec![fixture("2025-05-03T01:00:00Z", "Fortaleza", "Sport Recife")];
        let matchday = group_and_select(&fixtures, day(2025, 5, 2), &zone()).unwrap();
        assert_eq!(matchday.date, day(2025, 5, 2));
    }

    #[test]
    fn unparseable_kickoffs_are_dropped_not_fatal() {
        let fixtures = vec![
            fixture("garbage", "Vasco da Gama", "Botafogo"),
            fixture("2025-05-03T19:00:00Z", "Grêmio", "Bahia"),
        ];
        let matchday = group_and_select(&fixtures, day(2025, 5, 2), &zone()).unwrap();
        assert_eq!(matchday.fixtures.len(), 1);
        assert_eq!(matchday.fixtures[0].fixture.home_team, "Grêmio");
    }

    #[test]
    fn equal_kickoffs_preserve_input_order() {
        let fixtures = vec![
            fixture("2025-05-03T19:00:00Z", "Cruzeiro", "Vitória"),
            fixture("2025-05-03T19:00:00Z", "Juventude", "Mirassol"),
            fixture("2025-05-03T19:00:00Z", "Bragantino", "Corinthians"),
        ];
        let matchday = group_and_select(&fixtures, day(2025, 5, 3), &zone()).unwrap();
        let order: Vec<&str> = matchday
            .fixtures
            .iter()
            .map(|f| f.fixture.home_team.as_str())
            .collect();
        assert_eq!(order, vec!["Cruzeiro", "Juventude", "Bragantino"]);
    }

    #[test]
    fn group_and_select_is_idempotent() {
        let fixtures = vec![
            fixture("2025-05-03T22:00:00Z", "Flamengo", "Palmeiras"),
            fixture("2025-05-03T19:00:00Z", "Grêmio", "Bahia"),
        ];
        let first = group_and_select(&fixtures, day(2025, 5, 2), &zone()).unwrap();
        let second = group_and_select(&fixtures, day(2025, 5, 2), &zone()).unwrap();
        assert_eq!(first.date, second.date);
        let names = |md: &MatchDay| {
            md.fixtures
                .iter()
                .map(|f| f.fixture.home_team.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(names(&first), names(&second));
    }
}
