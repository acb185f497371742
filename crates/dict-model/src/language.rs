use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A language dict.cc can translate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    De,
    En,
    Es,
    Fr,
    It,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::De,
        Language::En,
        Language::Es,
        Language::Fr,
        Language::It,
    ];

    /// ISO 639-1 code, as used in the dict.cc subdomain.
    pub fn code(self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::It => "it",
        }
    }

    /// Exact lowercase code only; unlike `FromStr`, "DE" or " de" are no match.
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim().to_ascii_lowercase().as_str() {
            "de" => Ok(Language::De),
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            "fr" => Ok(Language::Fr),
            "it" => Ok(Language::It),
            _ => Err(ConfigError::UnsupportedLanguage(code.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Source and destination language of a lookup. Defaults to German → English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    pub source: Language,
    pub destination: Language,
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self {
            source: Language::De,
            destination: Language::En,
        }
    }
}

impl LanguagePair {
    pub fn new(source: Language, destination: Language) -> Self {
        Self { source, destination }
    }

    /// Subdomain label for dict.cc, e.g. "deen".
    pub fn subdomain(&self) -> String {
        format!("{}{}", self.source.code(), self.destination.code())
    }

    /// Split a leading language pair off the query terms.
    ///
    /// `["en", "fr", "good", "morning"]` yields `(en→fr, ["good", "morning"])`.
    /// The pair is only taken when more than two terms are present and the
    /// first two are both supported codes, written exactly in lowercase
    /// (so "DE Haus" stays a phrase); otherwise the default pair is returned
    /// with all terms untouched.
    pub fn split_leading(terms: &[String]) -> (LanguagePair, &[String]) {
        if terms.len() > 2 {
            if let (Some(source), Some(destination)) =
                (Language::from_code(&terms[0]), Language::from_code(&terms[1]))
            {
                return (LanguagePair::new(source, destination), &terms[2..]);
            }
        }
        (LanguagePair::default(), terms)
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_codes() {
        assert_eq!("de".parse::<Language>().unwrap(), Language::De);
        assert_eq!("IT".parse::<Language>().unwrap(), Language::It);
        assert_eq!(
            "ru".parse::<Language>(),
            Err(ConfigError::UnsupportedLanguage("ru".into()))
        );
    }

    #[test]
    fn test_default_pair() {
        let pair = LanguagePair::default();
        assert_eq!(pair.subdomain(), "deen");
    }

    #[test]
    fn test_subdomain_for_all_pairs() {
        for source in Language::ALL {
            for destination in Language::ALL {
                let pair = LanguagePair::new(source, destination);
                assert_eq!(
                    pair.subdomain(),
                    format!("{}{}", source.code(), destination.code())
                );
            }
        }
    }

    #[test]
    fn test_split_leading_pair() {
        let input = terms(&["en", "fr", "good", "morning"]);
        let (pair, rest) = LanguagePair::split_leading(&input);
        assert_eq!(pair, LanguagePair::new(Language::En, Language::Fr));
        assert_eq!(rest, ["good", "morning"]);
    }

    #[test]
    fn test_split_leading_needs_more_than_two_terms() {
        // "es it" alone is a phrase, not a language pair
        let input = terms(&["es", "it"]);
        let (pair, rest) = LanguagePair::split_leading(&input);
        assert_eq!(pair, LanguagePair::default());
        assert_eq!(rest.len(), 2);
    }

    #[test]
    fn test_split_leading_ignores_unsupported_codes() {
        let input = terms(&["en", "ru", "hello"]);
        let (pair, rest) = LanguagePair::split_leading(&input);
        assert_eq!(pair, LanguagePair::default());
        assert_eq!(rest.len(), 3);
    }

    #[test]
    fn test_split_leading_is_case_sensitive() {
        let input = terms(&["DE", "En", "Haus"]);
        let (pair, rest) = LanguagePair::split_leading(&input);
        assert_eq!(pair, LanguagePair::default());
        assert_eq!(rest, ["DE", "En", "Haus"]);

        assert_eq!(Language::from_code("de"), Some(Language::De));
        assert_eq!(Language::from_code("DE"), None);
    }
}
