use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Answer-format constraint attached to a question.
///
/// The nine wire names are fixed by the backend schema and must be preserved
/// exactly; serialization uses them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Principle {
    OneWord,
    OneWordOrNumber,
    NmtOne,
    NmtTwo,
    NmtThree,
    NmtTwoNum,
    NmtThreeNum,
    NumberOnly,
    FromBox,
}

impl Principle {
    pub const ALL: [Principle; 9] = [
        Principle::OneWord,
        Principle::OneWordOrNumber,
        Principle::NmtOne,
        Principle::NmtTwo,
        Principle::NmtThree,
        Principle::NmtTwoNum,
        Principle::NmtThreeNum,
        Principle::NumberOnly,
        Principle::FromBox,
    ];

    /// The wire name used by the backend schema.
    pub fn as_str(&self) -> &'static str {
        match self {
            Principle::OneWord => "ONE_WORD",
            Principle::OneWordOrNumber => "ONE_WORD_OR_NUMBER",
            Principle::NmtOne => "NMT_ONE",
            Principle::NmtTwo => "NMT_TWO",
            Principle::NmtThree => "NMT_THREE",
            Principle::NmtTwoNum => "NMT_TWO_NUM",
            Principle::NmtThreeNum => "NMT_THREE_NUM",
            Principle::NumberOnly => "NUMBER_ONLY",
            Principle::FromBox => "FROM_BOX",
        }
    }

    /// Human-readable description shown next to the wire name.
    pub fn label(&self) -> &'static str {
        match self {
            Principle::OneWord => "One word only",
            Principle::OneWordOrNumber => "One word and/or a number",
            Principle::NmtOne => "No more than one word",
            Principle::NmtTwo => "No more than two words",
            Principle::NmtThree => "No more than three words",
            Principle::NmtTwoNum => "No more than two words and/or a number",
            Principle::NmtThreeNum => "No more than three words and/or a number",
            Principle::NumberOnly => "A number",
            Principle::FromBox => "Choose from the box",
        }
    }
}

impl Default for Principle {
    fn default() -> Self {
        Principle::OneWord
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown answer principle: {0}")]
pub struct ParsePrincipleError(String);

impl FromStr for Principle {
    type Err = ParsePrincipleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Principle::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParsePrincipleError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip_through_from_str() {
        for principle in Principle::ALL {
            assert_eq!(principle.as_str().parse::<Principle>(), Ok(principle));
        }
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&Principle::NmtTwoNum).unwrap();
        assert_eq!(json, "\"NMT_TWO_NUM\"");

        let parsed: Principle = serde_json::from_str("\"FROM_BOX\"").unwrap();
        assert_eq!(parsed, Principle::FromBox);
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!("ONE_NUMBER".parse::<Principle>().is_err());
        assert!("one_word".parse::<Principle>().is_err());
    }
}
