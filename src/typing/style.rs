use crate::typing::error::TypingError;
use std::fmt;
use std::str::FromStr;

/// Atom-typing styles antechamber accepts through its `-at` flag.
pub const SUPPORTED_STYLES: &[&str] = &["gaff", "gaff2", "amber", "bcc", "sybyl"];

/// The fixed set of atom-typing styles this bridge will pass to antechamber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtomTypeStyle {
    Gaff,
    Gaff2,
    Amber,
    Bcc,
    Sybyl,
}

impl AtomTypeStyle {
    /// The exact token handed to antechamber's `-at` flag.
    pub fn as_str(&self) -> &'static str {
        match self {
            AtomTypeStyle::Gaff => "gaff",
            AtomTypeStyle::Gaff2 => "gaff2",
            AtomTypeStyle::Amber => "amber",
            AtomTypeStyle::Bcc => "bcc",
            AtomTypeStyle::Sybyl => "sybyl",
        }
    }
}

impl fmt::Display for AtomTypeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AtomTypeStyle {
    type Err = TypingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gaff" => Ok(AtomTypeStyle::Gaff),
            "gaff2" => Ok(AtomTypeStyle::Gaff2),
            "amber" => Ok(AtomTypeStyle::Amber),
            "bcc" => Ok(AtomTypeStyle::Bcc),
            "sybyl" => Ok(AtomTypeStyle::Sybyl),
            other => Err(TypingError::UnsupportedStyle {
                requested: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_supported_token_parses() {
        for token in SUPPORTED_STYLES {
            let style: AtomTypeStyle = token.parse().expect("supported style must parse");
            assert_eq!(style.as_str(), *token);
        }
    }

    #[test]
    fn unknown_style_is_rejected_with_the_allowed_set() {
        let err = "gaffff".parse::<AtomTypeStyle>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("gaffff"));
        for token in SUPPORTED_STYLES {
            assert!(message.contains(token), "message should list '{}'", token);
        }
    }

    #[test]
    fn styles_are_case_sensitive() {
        assert!("GAFF".parse::<AtomTypeStyle>().is_err());
    }
}
