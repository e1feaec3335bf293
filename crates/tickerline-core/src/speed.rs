use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Marquee speed selector.
///
/// Maps to the number of cells the track advances per animation tick.
/// Selector strings are permissive: anything other than `"slow"` or `"fast"`
/// behaves as `Medium`, so parsing never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Speed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl Speed {
    /// Cells advanced per animation tick.
    #[inline]
    pub fn cells_per_tick(&self) -> f64 {
        match self {
            Speed::Slow => 0.5,
            Speed::Medium => 1.0,
            Speed::Fast => 2.0,
        }
    }

    /// Parse a speed selector string.
    pub fn parse(s: &str) -> Self {
        match s {
            "slow" => Speed::Slow,
            "fast" => Speed::Fast,
            _ => Speed::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Speed::Slow => "slow",
            Speed::Medium => "medium",
            Speed::Fast => "fast",
        }
    }
}

impl std::str::FromStr for Speed {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Speed::parse(s))
    }
}

impl std::fmt::Display for Speed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Config files carry speeds as bare strings ("slow", "fast"), with the same
// permissive fallback as the selector strings.
impl Serialize for Speed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Speed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Speed::parse(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_mapping() {
        assert_eq!(Speed::Slow.cells_per_tick(), 0.5);
        assert_eq!(Speed::Medium.cells_per_tick(), 1.0);
        assert_eq!(Speed::Fast.cells_per_tick(), 2.0);
    }

    #[test]
    fn test_parse_known_selectors() {
        assert_eq!(Speed::parse("slow"), Speed::Slow);
        assert_eq!(Speed::parse("medium"), Speed::Medium);
        assert_eq!(Speed::parse("fast"), Speed::Fast);
    }

    #[test]
    fn test_unknown_selector_behaves_as_medium() {
        for s in ["", "turbo", "FAST", "Slow", "1"] {
            assert_eq!(Speed::parse(s), Speed::Medium, "selector {:?}", s);
        }
    }

    #[test]
    fn test_deserialize_from_string() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            speed: Speed,
        }

        let w: Wrapper = toml::from_str(r#"speed = "fast""#).unwrap();
        assert_eq!(w.speed, Speed::Fast);

        let w: Wrapper = toml::from_str(r#"speed = "whatever""#).unwrap();
        assert_eq!(w.speed, Speed::Medium);
    }
}
