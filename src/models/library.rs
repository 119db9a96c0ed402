use serde::{Deserialize, Serialize};

use super::topic::Topic;

/// One entry in a content library. Verses cite a scripture reference,
/// quotes name an author or book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LibraryItem {
    Verse {
        reference: String,
        text: String,
        topic: Topic,
    },
    Quote {
        source: String,
        text: String,
        topic: Topic,
    },
}

impl LibraryItem {
    pub fn verse(reference: impl Into<String>, text: impl Into<String>, topic: Topic) -> Self {
        LibraryItem::Verse {
            reference: reference.into(),
            text: text.into(),
            topic,
        }
    }

    pub fn quote(source: impl Into<String>, text: impl Into<String>, topic: Topic) -> Self {
        LibraryItem::Quote {
            source: source.into(),
            text: text.into(),
            topic,
        }
    }

    /// The citation string, whichever shape this item is.
    pub fn attribution(&self) -> &str {
        match self {
            LibraryItem::Verse { reference, .. } => reference,
            LibraryItem::Quote { source, .. } => source,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            LibraryItem::Verse { text, .. } => text,
            LibraryItem::Quote { text, .. } => text,
        }
    }

    pub fn topic(&self) -> &Topic {
        match self {
            LibraryItem::Verse { topic, .. } => topic,
            LibraryItem::Quote { topic, .. } => topic,
        }
    }
}
