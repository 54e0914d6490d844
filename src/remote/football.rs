use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::models::{Fixture, ScorerEntry, StandingsRow};
use super::RemoteError;

/// Client for the football-data.org v4 competition endpoints.
/// Docs: <https://www.football-data.org/documentation/quickstart>
#[derive(Clone)]
pub struct FootballClient {
    http: Client,
    base_url: String,
    token: String,
    competition: String,
}

impl FootballClient {
    pub fn new(base_url: &str, token: &str, competition: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client for football-data")?;
        Ok(FootballClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            competition: competition.to_string(),
        })
    }

    /// Current league table, source order preserved (no re-sorting).
    pub async fn fetch_standings(&self) -> Result<Vec<StandingsRow>, RemoteError> {
        let raw = self.get("standings").await?;
        Ok(parse_standings(&raw))
    }

    /// Top scorers, ranked by arrival order.
    pub async fn fetch_scorers(&self) -> Result<Vec<ScorerEntry>, RemoteError> {
        let raw = self.get("scorers").await?;
        Ok(parse_scorers(&raw))
    }

    /// All season fixtures, kickoff timestamps left raw for the schedule
    /// layer to normalize.
    pub async fn fetch_fixtures(&self) -> Result<Vec<Fixture>, RemoteError> {
        let raw = self.get("matches").await?;
        Ok(parse_fixtures(&raw))
    }

    async fn get(&self, resource: &str) -> Result<serde_json::Value, RemoteError> {
        let url = format!(
            "{}/competitions/{}/{}",
            self.base_url, self.competition, resource
        );
        debug!("Fetching {}", url);

        let resp = self
            .http
            .get(&url)
            .header("X-Auth-Token", &self.token)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body,
            });
        }

        resp.json()
            .await
            .map_err(|e| RemoteError::Payload(e.to_string()))
    }
}

// ── Parsing helpers ────────────────────────────────────────────────────────

// A missing or empty `standings[0].table` / `scorers` / `matches` array
// yields an empty list, which callers render as an informational reply.
// Individual malformed records are dropped, never fatal to the batch.

fn parse_standings(raw: &serde_json::Value) -> Vec<StandingsRow> {
    let table = match raw["standings"][0]["table"].as_array() {
        Some(a) => a,
        None => return vec![],
    };

    table
        .iter()
        .filter_map(|row| {
            Some(StandingsRow {
                position: row["position"].as_i64()?,
                team: row["team"]["shortName"].as_str()?.to_string(),
                points: row["points"].as_i64()?,
                played: row["playedGames"].as_i64()?,
                won: row["won"].as_i64()?,
                drawn: row["draw"].as_i64()?,
                lost: row["lost"].as_i64()?,
            })
        })
        .collect()
}

fn parse_scorers(raw: &serde_json::Value) -> Vec<ScorerEntry> {
    let scorers = match raw["scorers"].as_array() {
        Some(a) => a,
        None => return vec![],
    };

    scorers
        .iter()
        .filter_map(|item| {
            Some(ScorerEntry {
                rank: 0, // assigned below, after malformed entries are dropped
                player: item["player"]["name"].as_str()?.to_string(),
                team: item["team"]["shortName"].as_str()?.to_string(),
                goals: item["goals"].as_i64()?,
            })
        })
        .enumerate()
        .map(|(i, mut entry)| {
            entry.rank = i + 1;
            entry
        })
        .collect()
}

fn parse_fixtures(raw: &serde_json::Value) -> Vec<Fixture> {
    let matches = match raw["matches"].as_array() {
        Some(a) => a,
        None => return vec![],
    };

    matches
        .iter()
        .filter_map(|m| {
            Some(Fixture {
                utc_date: m["utcDate"].as_str()?.to_string(),
                home_team: m["homeTeam"]["shortName"].as_str()?.to_string(),
                away_team: m["awayTeam"]["shortName"].as_str()?.to_string(),
                home_score: m["score"]["fullTime"]["home"].as_i64(),
                away_score: m["score"]["fullTime"]["away"].as_i64(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_standings_reads_nested_table() {
        let raw = serde_json::json!({
            "standings": [{
                "table": [
                    {
                        "position": 1,
                        "team": {"shortName": "Flamengo"},
                        "points": 70, "playedGames": 34,
                        "won": 21, "draw": 7, "lost": 6
                    },
                    {
                        "position": 2,
                        "team": {"shortName": "Palmeiras"},
                        "points": 68, "playedGames": 34,
                        "won": 20, "draw": 8, "lost": 6
                    }
                ]
            }]
        });
        let rows = parse_standings(&raw);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].team, "Flamengo");
        assert_eq!(rows[0].points, 70);
        assert_eq!(rows[1].position, 2);
    }

    #[test]
    fn parse_standings_missing_table_is_empty() {
        assert!(parse_standings(&serde_json::json!({})).is_empty());
        assert!(parse_standings(&serde_json::json!({"standings": []})).is_empty());
    }

    #[test]
    fn parse_standings_drops_malformed_rows() {
        let raw = serde_json::json!({
            "standings": [{
                "table": [
                    {"position": 1},
                    {
                        "position": 2,
                        "team": {"shortName": "Santos"},
                        "points": 50, "playedGames": 30,
                        "won": 14, "draw": 8, "lost": 8
                    }
                ]
            }]
        });
        let rows = parse_standings(&raw);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].team, "Santos");
    }

    #[test]
    fn parse_scorers_ranks_by_arrival_order_after_drops() {
        let raw = serde_json::json!({
            "scorers": [
                {"player": {"name": "Pedro"}, "team": {"shortName": "Flamengo"}, "goals": 20},
                {"player": {}, "team": {"shortName": "Santos"}, "goals": 15},
                {"player": {"name": "Hulk"}, "team": {"shortName": "Atlético Mineiro"}, "goals": 14}
            ]
        });
        let scorers = parse_scorers(&raw);
        assert_eq!(scorers.len(), 2);
        assert_eq!(scorers[0].rank, 1);
        assert_eq!(scorers[0].player, "Pedro");
        // The malformed middle entry must not consume a rank.
        assert_eq!(scorers[1].rank, 2);
        assert_eq!(scorers[1].player, "Hulk");
    }

    #[test]
    fn parse_fixtures_keeps_raw_timestamp_and_optional_scores() {
        let raw = serde_json::json!({
            "matches": [
                {
                    "utcDate": "2025-05-03T19:00:00Z",
                    "homeTeam": {"shortName": "Grêmio"},
                    "awayTeam": {"shortName": "Bahia"},
                    "score": {"fullTime": {"home": null, "away": null}}
                },
                {
                    "utcDate": "2025-04-26T21:30:00Z",
                    "homeTeam": {"shortName": "Cruzeiro"},
                    "awayTeam": {"shortName": "Vitória"},
                    "score": {"fullTime": {"home": 3, "away": 1}}
                }
            ]
        });
        let fixtures = parse_fixtures(&raw);
        assert_eq!(fixtures.len(), 2);
        assert_eq!(fixtures[0].utc_date, "2025-05-03T19:00:00Z");
        assert_eq!(fixtures[0].home_score, None);
        assert_eq!(fixtures[1].home_score, Some(3));
        assert_eq!(fixtures[1].away_score, Some(1));
    }

    #[tokio::test]
    async fn fetch_sends_auth_token_header() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/competitions/BSA/standings")
            .match_header("X-Auth-Token", "secret")
            .with_body(r#"{"standings": []}"#)
            .create_async()
            .await;

        let client = FootballClient::new(&server.url(), "secret", "BSA").unwrap();
        let rows = client.fetch_standings().await.unwrap();
        assert!(rows.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn fetch_surfaces_non_2xx_as_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/competitions/BSA/scorers")
            .with_status(403)
            .with_body("forbidden")
            .create_async()
            .await;

        let client = FootballClient::new(&server.url(), "secret", "BSA").unwrap();
        let err = client.fetch_scorers().await.unwrap_err();
        assert!(matches!(err, RemoteError::Status { status: 403, .. }));
    }
}
