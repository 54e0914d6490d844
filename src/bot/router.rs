use rand::seq::SliceRandom;

/// A substring-triggered canned reply. When several chants are listed, one is
/// drawn at random per reply.
#[derive(Debug, PartialEq, Eq)]
pub struct ChantRule {
    pub triggers: &'static [&'static str],
    pub chants: &'static [&'static str],
}

impl ChantRule {
    fn matches(&self, text: &str) -> bool {
        self.triggers.iter().any(|t| text.contains(t))
    }

    pub fn pick(&self) -> &'static str {
        self.chants
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or_default()
    }
}

/// Keyword rules in priority order: when more than one could match, the
/// first declared here wins.
pub const CHANT_RULES: &[ChantRule] = &[
    ChantRule {
        triggers: &["corinthians", "timão"],
        chants: &[
            "Salve o Corinthians\n\
             O campeão dos campeões\n\
             Eternamente dentro dos nossos corações\n\n\
             Salve o Corinthians\n\
             De tradições e glórias mil\n\
             Tu és orgulho dos desportistas do Brasil",
            "Aqui tem um bando de loucos\n\
             Loucos por ti, Corinthians!\n\
             Aqueles que acham que é pouco\n\
             Eu vivo por ti, Corinthians!",
        ],
    },
    ChantRule {
        triggers: &["flamengo", "mengo"],
        chants: &["Em dezembro de 81'\n\
             Botou os ingleses na roda\n\n\
             3 à 0 no Liverpool\n\
             Ficou marcado na história\n\n\
             E no Rio não tem outro igual\n\
             Só Flamengo é campeão mundial\n\
             E agora o seu povo\n\
             Pede o mundo de novo\n\n\
             Dá—lhe, dá—lhe, dá—lhe, Mengo\n\
             Pra cima deles, Flamengo"],
    },
    ChantRule {
        triggers: &["botafogo", "fogo"],
        chants: &["E ninguém cala'\n\
             Esse nosso amor\n\
             E é por isso que eu canto assim\n\
             É por ti, Fogo\n\n\
             Fogo-ô-ô-ô\n\
             Fogo-ô-ô-ô"],
    },
];

/// Everything an inbound message can ask for. Closed set: adding a command
/// means adding a variant, and every match over it is total.
#[derive(Debug, PartialEq)]
pub enum Action {
    Standings,
    Scorers,
    Fixtures,
    Chant(&'static ChantRule),
    Help,
}

/// Classify message text. Pure: trims and lower-cases, matches the exact
/// commands first, then the keyword rules, else Help.
pub fn route(text: &str) -> Action {
    let normalized = text.trim().to_lowercase();
    match normalized.as_str() {
        "/tabela" => Action::Standings,
        "/artilheiro" => Action::Scorers,
        "/jogos" => Action::Fixtures,
        _ => CHANT_RULES
            .iter()
            .find(|rule| rule.matches(&normalized))
            .map(Action::Chant)
            .unwrap_or(Action::Help),
    }
}
