//! User-facing reply text. Tables are rendered as HTML `<pre>` blocks so the
//! messaging platform displays them monospaced; everything the user sees is
//! Portuguese, matching the bot's audience.

use crate::remote::models::{ScorerEntry, StandingsRow};
use crate::schedule::MatchDay;

use super::teams::abbreviate;

pub const HELP: &str = "<b>Comandos disponíveis:</b>\n\
    /tabela – Classificação do Brasileirão\n\
    /artilheiro – Artilheiros da competição\n\
    /jogos – Veja os próximos jogos";

pub const FETCHING_STANDINGS: &str = "Buscando classificação do Brasileirão...";
pub const FETCHING_SCORERS: &str = "Buscando artilheiros do Brasileirão...";
pub const FETCHING_FIXTURES: &str = "Buscando próximos jogos do Brasileirão...";

pub const STANDINGS_UNAVAILABLE: &str = "Erro ao acessar a API da tabela.";
pub const SCORERS_UNAVAILABLE: &str = "Erro ao acessar a API de artilheiros.";
pub const FIXTURES_UNAVAILABLE: &str = "Erro ao acessar a API de jogos.";

pub const NO_STANDINGS: &str = "Não foi possível obter a tabela.";
pub const NO_SCORERS: &str = "Não foi possível obter a lista de artilheiros.";
pub const NO_FIXTURES: &str = "Não foi possível obter a lista de jogos.";
pub const NO_UPCOMING_FIXTURES: &str = "Não há jogos agendados no momento.";

pub fn format_standings(rows: &[StandingsRow]) -> String {
    let mut out = String::from("<b>BRASILEIRÃO SÉRIE A</b>\n\n<pre>");
    out.push_str(&format!(
        "{:<4}{:<8}{:>5}{:>5}{:>5}{:>5}{:>5}\n",
        "POS", "TIME", "PTS", "PJ", "VIT", "E", "DER"
    ));
    out.push_str(&"-".repeat(38));
    out.push('\n');

    for row in rows {
        out.push_str(&format!(
            "{:<4}{:<8}{:>5}{:>5}{:>5}{:>5}{:>5}\n",
            row.position,
            abbreviate(&row.team),
            row.points,
            row.played,
            row.won,
            row.drawn,
            row.lost
        ));
    }

    out.push_str("</pre>");
    out
}

pub fn format_scorers(scorers: &[ScorerEntry]) -> String {
    let mut out = String::from("<b>ARTILHARIA - BRASILEIRÃO</b>\n\n<pre>");
    out.push_str(&format!(
        "{:<4}{:<20}{:<8}{:>5}\n",
        "POS", "JOGADOR", "TIME", "GOLS"
    ));
    out.push_str(&"-".repeat(40));
    out.push('\n');

    for entry in scorers {
        out.push_str(&format!(
            "{:<4}{:<20}{:<8}{:>5}\n",
            entry.rank,
            truncate_chars(&entry.player, 18),
            abbreviate(&entry.team),
            entry.goals
        ));
    }

    out.push_str("</pre>");
    out
}

pub fn format_matchday(day: &MatchDay) -> String {
    let mut out = format!("<b>JOGOS - {}</b>\n\n<pre>", day.date.format("%d/%m/%Y"));
    out.push_str(&format!(
        "{:<7}{:>8}{:>2} x {:<2} {:<14}\n",
        "HORA", "MANDANTE", "G", "G", "VISITANTE"
    ));
    out.push_str(&"-".repeat(35));
    out.push('\n');

    for local in &day.fixtures {
        out.push_str(&format!(
            "{:<7}{:>8}{:>2} x {:<2} {:<14}\n",
            local.kickoff.format("%H:%M"),
            truncate_chars(&local.fixture.home_team, 12),
            local.fixture.home_score.unwrap_or(0),
            local.fixture.away_score.unwrap_or(0),
            truncate_chars(&local.fixture.away_team, 12)
        ));
    }

    out.push_str("</pre>");
    out
}

/// Char-boundary-safe truncation; team and player names carry accents.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
