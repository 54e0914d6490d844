/// Full name → 3-letter code for the Série A clubs, matching the short names
/// the sports API returns. Read-only, process-wide.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("Vasco da Gama", "VAS"),
    ("Internacional", "INT"),
    ("Corinthians", "COR"),
    ("Fluminense", "FLU"),
    ("Flamengo", "FLA"),
    ("São Paulo", "SAO"),
    ("Botafogo", "BOT"),
    ("Palmeiras", "PAL"),
    ("Cruzeiro", "CRU"),
    ("Grêmio", "GRE"),
    ("Santos", "SAN"),
    ("Bahia", "BAH"),
    ("Fortaleza", "FOR"),
    ("Bragantino", "BRA"),
    ("Vitória", "VIT"),
    ("Ceará", "CEA"),
    ("Juventude", "JUV"),
    ("Mirassol", "MIR"),
    ("Sport Recife", "SPO"),
];

/// Abbreviate a team name to its 3-letter code; unknown names fall back to
/// the uppercased first three characters.
pub fn abbreviate(name: &str) -> String {
    ABBREVIATIONS
        .iter()
        .find(|(full, _)| *full == name)
        .map(|(_, code)| (*code).to_string())
        .unwrap_or_else(|| name.chars().take(3).collect::<String>().to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_teams_use_the_table() {
        assert_eq!(abbreviate("Corinthians"), "COR");
        assert_eq!(abbreviate("São Paulo"), "SAO");
        assert_eq!(abbreviate("Sport Recife"), "SPO");
    }

    #[test]
    fn unknown_teams_fall_back_to_first_three_chars_uppercased() {
        assert_eq!(abbreviate("Coritiba"), "COR");
        assert_eq!(abbreviate("Athletico Paranaense"), "ATH");
    }

    #[test]
    fn fallback_is_char_safe_for_accented_names() {
        // Must not slice mid-codepoint.
        assert_eq!(abbreviate("Águia Negra"), "ÁGU");
    }
}
