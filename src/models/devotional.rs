use serde::{Deserialize, Serialize};
use std::fmt;

use super::topic::Topic;

/// Which library a devotional was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Path {
    Faith,
    Wisdom,
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Path::Faith => write!(f, "faith"),
            Path::Wisdom => write!(f, "wisdom"),
        }
    }
}

/// The quoted source material a devotional is anchored to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub source: String,
    pub text: String,
}

/// The resolved daily content unit. Computed on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Devotional {
    pub id: String,
    pub day: u32,
    pub skill: String,
    pub role: String,
    pub title: String,
    pub truth: String,
    pub anchor: Anchor,
    pub insight: String,
    pub action: String,
    pub exact_words: Option<String>,
    pub path: Path,
    pub topic: Option<Topic>,
}

impl fmt::Display for Devotional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Day {} • {}  [{} path]", self.day, self.skill, self.path)?;
        writeln!(f, "Role: {}", self.role)?;
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.len()))?;
        writeln!(f)?;
        writeln!(f, "Truth: \"{}\"", self.truth)?;
        writeln!(f)?;
        writeln!(f, "  \"{}\"", self.anchor.text)?;
        writeln!(f, "  — {}", self.anchor.source)?;
        writeln!(f)?;
        writeln!(f, "{}", self.insight)?;
        writeln!(f)?;
        writeln!(f, "Today's action: {}", self.action)?;

        if let Some(words) = &self.exact_words {
            writeln!(f)?;
            writeln!(f, "Say exactly: \"{}\"", words)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Devotional {
        Devotional {
            id: "generated-9".to_string(),
            day: 9,
            skill: "Leadership".to_string(),
            role: "Peacemaker".to_string(),
            title: "Anger & Leadership".to_string(),
            truth: "A leader who masters anger builds a legacy of safety.".to_string(),
            anchor: Anchor {
                source: "Prov 15:1".to_string(),
                text: "A soft answer turns away wrath.".to_string(),
            },
            insight: "Insight text.".to_string(),
            action: "Pause for 5 seconds.".to_string(),
            exact_words: None,
            path: Path::Faith,
            topic: Some(Topic::Anger),
        }
    }

    #[test]
    fn test_devotional_display() {
        let output = format!("{}", sample());
        assert!(output.contains("Day 9"));
        assert!(output.contains("Role: Peacemaker"));
        assert!(output.contains("Anger & Leadership"));
        assert!(output.contains("faith path"));
        assert!(!output.contains("Say exactly"));
    }

    #[test]
    fn test_devotional_display_with_exact_words() {
        let mut devo = sample();
        devo.exact_words = Some("I appreciate you.".to_string());
        let output = format!("{}", devo);
        assert!(output.contains("Say exactly: \"I appreciate you.\""));
    }

    #[test]
    fn test_devotional_json_roundtrip() {
        let devo = sample();
        let json = serde_json::to_string(&devo).unwrap();
        let parsed: Devotional = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, devo);
    }
}
