use serde::{de, Deserialize, Deserializer, Serialize};

/// The weights the standard Helvetica family offers.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[derive(Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    /// PostScript name of the standard Type1 face for this weight.
    pub fn postscript_name(&self) -> &'static str {
        match self {
            FontWeight::Regular => "Helvetica",
            FontWeight::Bold => "Helvetica-Bold",
        }
    }

    /// Parse a font weight from a string (e.g., "bold", "400").
    /// Numeric weights of 600 and above select the bold face.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "regular" | "normal" => Ok(FontWeight::Regular),
            "bold" => Ok(FontWeight::Bold),
            other => other
                .parse::<u16>()
                .map(Self::from_numeric)
                .map_err(|_| format!("Invalid font weight: '{}'", s)),
        }
    }

    pub fn from_numeric(weight: u16) -> Self {
        if weight >= 600 {
            FontWeight::Bold
        } else {
            FontWeight::Regular
        }
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum FontWeightDef {
            Str(String),
            Num(u16),
        }

        match FontWeightDef::deserialize(deserializer)? {
            FontWeightDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            FontWeightDef::Num(n) => Ok(FontWeight::from_numeric(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_numbers() {
        assert_eq!(FontWeight::parse("Bold"), Ok(FontWeight::Bold));
        assert_eq!(FontWeight::parse("normal"), Ok(FontWeight::Regular));
        assert_eq!(FontWeight::parse("700"), Ok(FontWeight::Bold));
        assert_eq!(FontWeight::parse("300"), Ok(FontWeight::Regular));
        assert!(FontWeight::parse("heavy-ish").is_err());
    }

    #[test]
    fn maps_to_standard_faces() {
        assert_eq!(FontWeight::Regular.postscript_name(), "Helvetica");
        assert_eq!(FontWeight::Bold.postscript_name(), "Helvetica-Bold");
    }
}
