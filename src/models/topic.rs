use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A briefing topic. The known set is closed; anything imported by the
/// user that doesn't match lands in `Custom` and takes the default
/// role and action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Topic {
    Anger,
    Speech,
    Integrity,
    Wisdom,
    Marriage,
    Friendship,
    Money,
    Heart,
    Work,
    Family,
    Pride,
    LoveBusters,
    Needs,
    Listening,
    Affection,
    Leadership,
    Romance,
    Custom(String),
}

impl Topic {
    /// The role label a husband takes on for this topic.
    pub fn role(&self) -> &'static str {
        match self {
            Topic::Anger => "Peacemaker",
            Topic::Speech => "Listener",
            Topic::Integrity => "Protector",
            Topic::Wisdom => "Learner",
            Topic::Marriage => "Husband",
            Topic::Friendship => "Friend",
            Topic::Money => "Provider",
            Topic::Heart => "Spiritual Leader",
            Topic::Work => "Provider",
            Topic::Family => "Father/Leader",
            Topic::Pride => "Humble Servant",
            Topic::LoveBusters => "Repairer",
            Topic::Needs => "Lover",
            Topic::Listening => "Listener",
            Topic::Affection => "Lover",
            Topic::Leadership => "Leader",
            Topic::Romance => "Pursuer",
            Topic::Custom(_) => "Leader",
        }
    }

    /// The concrete action instruction for this topic.
    pub fn action(&self) -> &'static str {
        match self {
            Topic::Anger => "Pause for 5 seconds before responding to any frustration today.",
            Topic::Speech => "Speak one word of specific affirmation to her before noon.",
            Topic::Integrity => {
                "Do one small thing you promised her you'd do, without being asked."
            }
            Topic::Wisdom => "Ask her for her advice on a decision you are making.",
            Topic::Marriage => "Text her 'I'm thinking about you' right now.",
            Topic::Friendship => {
                "Spend 10 minutes doing something she enjoys, just to be with her."
            }
            Topic::Money => "Review a financial goal together with optimism, not stress.",
            Topic::Heart => "Pray for her happiness secretly three times today.",
            Topic::Work => "Leave work stress at the door. Greet her with your full attention.",
            Topic::Family => "Lead the family in a moment of gratitude at dinner.",
            Topic::Pride => "Admit a small mistake to her today without making an excuse.",
            Topic::LoveBusters => {
                "Identify one 'Love Buster' you did recently and apologize for it."
            }
            Topic::Needs => "Ask her: 'What can I do today to make you feel loved?'",
            Topic::Listening => "Listen to her for 5 minutes without offering a single solution.",
            Topic::Affection => "Give her a non-sexual hug that lasts at least 20 seconds.",
            Topic::Leadership => "Make a decision today that relieves a burden from her shoulders.",
            Topic::Romance => "Plan a surprise date for this weekend, even if it's just at home.",
            Topic::Custom(_) => "Show her she is your priority today.",
        }
    }

    /// Total parse: unrecognized names become `Custom`.
    pub fn parse_name(s: &str) -> Topic {
        match s.trim() {
            "Anger" => Topic::Anger,
            "Speech" => Topic::Speech,
            "Integrity" => Topic::Integrity,
            "Wisdom" => Topic::Wisdom,
            "Marriage" => Topic::Marriage,
            "Friendship" => Topic::Friendship,
            "Money" => Topic::Money,
            "Heart" => Topic::Heart,
            "Work" => Topic::Work,
            "Family" => Topic::Family,
            "Pride" => Topic::Pride,
            "Love Busters" => Topic::LoveBusters,
            "Needs" => Topic::Needs,
            "Listening" => Topic::Listening,
            "Affection" => Topic::Affection,
            "Leadership" => Topic::Leadership,
            "Romance" => Topic::Romance,
            other => Topic::Custom(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Topic::Anger => "Anger",
            Topic::Speech => "Speech",
            Topic::Integrity => "Integrity",
            Topic::Wisdom => "Wisdom",
            Topic::Marriage => "Marriage",
            Topic::Friendship => "Friendship",
            Topic::Money => "Money",
            Topic::Heart => "Heart",
            Topic::Work => "Work",
            Topic::Family => "Family",
            Topic::Pride => "Pride",
            Topic::LoveBusters => "Love Busters",
            Topic::Needs => "Needs",
            Topic::Listening => "Listening",
            Topic::Affection => "Affection",
            Topic::Leadership => "Leadership",
            Topic::Romance => "Romance",
            Topic::Custom(name) => name,
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Topic {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Topic::parse_name(s))
    }
}

impl Serialize for Topic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Topic {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Topic::parse_name(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_roles() {
        assert_eq!(Topic::Anger.role(), "Peacemaker");
        assert_eq!(Topic::Heart.role(), "Spiritual Leader");
        assert_eq!(Topic::LoveBusters.role(), "Repairer");
        assert_eq!(Topic::Romance.role(), "Pursuer");
    }

    #[test]
    fn test_custom_topic_defaults() {
        let topic = Topic::Custom("Patience".to_string());
        assert_eq!(topic.role(), "Leader");
        assert_eq!(topic.action(), "Show her she is your priority today.");
    }

    #[test]
    fn test_topic_from_str_known() {
        assert_eq!(Topic::from_str("Wisdom").unwrap(), Topic::Wisdom);
        assert_eq!(Topic::from_str("Love Busters").unwrap(), Topic::LoveBusters);
        assert_eq!(Topic::from_str(" Marriage ").unwrap(), Topic::Marriage);
    }

    #[test]
    fn test_topic_from_str_unknown_is_custom() {
        assert_eq!(
            Topic::from_str("Patience").unwrap(),
            Topic::Custom("Patience".to_string())
        );
    }

    #[test]
    fn test_topic_json_roundtrip() {
        let json = serde_json::to_string(&Topic::LoveBusters).unwrap();
        assert_eq!(json, "\"Love Busters\"");

        let parsed: Topic = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Topic::LoveBusters);
    }
}
