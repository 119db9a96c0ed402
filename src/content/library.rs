//! Static content libraries: the hand-authored onboarding week and the
//! two rotating libraries the resolver draws from.

use crate::models::{Anchor, Devotional, LibraryItem, Path, Topic};

/// Hand-written devotionals for the onboarding week. These take absolute
/// precedence over the rotation for their day numbers.
pub fn override_days() -> Vec<Devotional> {
    vec![
        Devotional {
            id: "1".to_string(),
            day: 1,
            skill: "Awareness".to_string(),
            role: "Husband".to_string(),
            title: "The Mission Begins".to_string(),
            truth: "Your marriage rises or falls on your daily leadership, not your intentions."
                .to_string(),
            anchor: Anchor {
                source: "Ephesians 5:25".to_string(),
                text: "Husbands, love your wives, as Christ loved the church and gave himself up for her.".to_string(),
            },
            insight: "Love here is a verb with a cost attached. Nobody drifts into a great marriage; you build one with deliberate daily moves. This week is about noticing what she actually experiences from you.".to_string(),
            action: "Tell her one specific thing you admire about how she carries your family."
                .to_string(),
            exact_words: Some("I don't say it enough, but I see everything you do for us.".to_string()),
            path: Path::Faith,
            topic: Some(Topic::Marriage),
        },
        Devotional {
            id: "2".to_string(),
            day: 2,
            skill: "Awareness".to_string(),
            role: "Listener".to_string(),
            title: "Turn Toward Her".to_string(),
            truth: "Every small bid for your attention is a deposit opportunity.".to_string(),
            anchor: Anchor {
                source: "John Gottman".to_string(),
                text: "Couples who stay together turn toward each other's bids for connection 86% of the time.".to_string(),
            },
            insight: "When she mentions something small, it is rarely about the small thing. She is checking whether you are still reachable. Put the phone face down and turn your shoulders toward her.".to_string(),
            action: "The next time she starts talking today, stop what you're doing and face her fully.".to_string(),
            exact_words: None,
            path: Path::Wisdom,
            topic: Some(Topic::Listening),
        },
        Devotional {
            id: "3".to_string(),
            day: 3,
            skill: "Awareness".to_string(),
            role: "Listener".to_string(),
            title: "Words That Build".to_string(),
            truth: "Your words set the temperature of your home before anything else does.".to_string(),
            anchor: Anchor {
                source: "Proverbs 18:21".to_string(),
                text: "Death and life are in the power of the tongue.".to_string(),
            },
            insight: "She replays your words long after you've forgotten them. One careless sentence can undo a week of effort; one specific affirmation can carry her through a hard day.".to_string(),
            action: "Give her one affirmation today that names something she did, not just how she looks.".to_string(),
            exact_words: None,
            path: Path::Faith,
            topic: Some(Topic::Speech),
        },
        Devotional {
            id: "4".to_string(),
            day: 4,
            skill: "Awareness".to_string(),
            role: "Peacemaker".to_string(),
            title: "The Five-Second Gap".to_string(),
            truth: "The man who controls his first response controls the conflict.".to_string(),
            anchor: Anchor {
                source: "John Gottman".to_string(),
                text: "A harsh startup predicts how a conversation ends 96% of the time.".to_string(),
            },
            insight: "Escalation is a choice made in the first five seconds. When you absorb the first hit without returning it, you change the entire trajectory of the evening.".to_string(),
            action: "Today, when irritation spikes, breathe once before you answer. Every time.".to_string(),
            exact_words: None,
            path: Path::Wisdom,
            topic: Some(Topic::Anger),
        },
        Devotional {
            id: "5".to_string(),
            day: 5,
            skill: "Awareness".to_string(),
            role: "Lover".to_string(),
            title: "Ask, Don't Assume".to_string(),
            truth: "You cannot meet a need you have never asked about.".to_string(),
            anchor: Anchor {
                source: "Willard Harley".to_string(),
                text: "Each of you has a Love Bank, and every interaction makes a deposit or a withdrawal.".to_string(),
            },
            insight: "Most husbands guess at their wife's top needs and guess wrong for years. Asking directly is not weakness; it is intelligence gathering.".to_string(),
            action: "Ask her: 'What's one thing I could do this week that would actually help?'".to_string(),
            exact_words: Some("What's one thing I could do this week that would actually help you?".to_string()),
            path: Path::Faith,
            topic: Some(Topic::Needs),
        },
        Devotional {
            id: "6".to_string(),
            day: 6,
            skill: "Awareness".to_string(),
            role: "Lover".to_string(),
            title: "Affection Without an Agenda".to_string(),
            truth: "Affection with no strings attached tells her she is safe with you.".to_string(),
            anchor: Anchor {
                source: "Shaunti Feldhahn".to_string(),
                text: "Inside, she is asking one question on repeat: does he really love me?".to_string(),
            },
            insight: "A twenty-second hug with no agenda answers a question she may never ask out loud. Physical warmth that wants nothing back is one of the loudest signals you can send.".to_string(),
            action: "Hug her today for twenty full seconds. Expect nothing.".to_string(),
            exact_words: None,
            path: Path::Wisdom,
            topic: Some(Topic::Affection),
        },
        Devotional {
            id: "7".to_string(),
            day: 7,
            skill: "Awareness".to_string(),
            role: "Spiritual Leader".to_string(),
            title: "Cover Her Quietly".to_string(),
            truth: "The strongest leadership in your home happens where no one sees it.".to_string(),
            anchor: Anchor {
                source: "1 Peter 3:7".to_string(),
                text: "Live with your wives in an understanding way... so that your prayers may not be hindered.".to_string(),
            },
            insight: "Praying for her in secret changes you before it changes anything else. A week of awareness ends here: leadership starts as an inside job.".to_string(),
            action: "Pray for her three times today without telling her.".to_string(),
            exact_words: None,
            path: Path::Faith,
            topic: Some(Topic::Heart),
        },
    ]
}

/// The fixed faith library. Custom imported verses are appended after
/// these, in import order.
pub fn faith_library() -> Vec<LibraryItem> {
    vec![
        LibraryItem::verse("Proverbs 15:1", "A soft answer turns away wrath, but a harsh word stirs up anger.", Topic::Anger),
        LibraryItem::verse("James 1:19", "Let every person be quick to hear, slow to speak, slow to anger.", Topic::Listening),
        LibraryItem::verse("Proverbs 12:18", "There is one whose rash words are like sword thrusts, but the tongue of the wise brings healing.", Topic::Speech),
        LibraryItem::verse("Proverbs 10:9", "Whoever walks in integrity walks securely, but he who makes his ways crooked will be found out.", Topic::Integrity),
        LibraryItem::verse("Proverbs 4:7", "The beginning of wisdom is this: Get wisdom, and whatever you get, get insight.", Topic::Wisdom),
        LibraryItem::verse("Ecclesiastes 4:9", "Two are better than one, because they have a good reward for their toil.", Topic::Marriage),
        LibraryItem::verse("Proverbs 17:17", "A friend loves at all times, and a brother is born for adversity.", Topic::Friendship),
        LibraryItem::verse("Proverbs 21:5", "The plans of the diligent lead surely to abundance, but everyone who is hasty comes only to poverty.", Topic::Money),
        LibraryItem::verse("Proverbs 4:23", "Keep your heart with all vigilance, for from it flow the springs of life.", Topic::Heart),
        LibraryItem::verse("Colossians 3:23", "Whatever you do, work heartily, as for the Lord and not for men.", Topic::Work),
        LibraryItem::verse("Joshua 24:15", "As for me and my house, we will serve the Lord.", Topic::Family),
        LibraryItem::verse("Proverbs 16:18", "Pride goes before destruction, and a haughty spirit before a fall.", Topic::Pride),
        LibraryItem::verse("Proverbs 19:11", "Good sense makes one slow to anger, and it is his glory to overlook an offense.", Topic::Anger),
        LibraryItem::verse("1 Corinthians 13:4", "Love is patient and kind; love does not envy or boast; it is not arrogant.", Topic::Needs),
        LibraryItem::verse("Proverbs 18:13", "If one gives an answer before he hears, it is his folly and shame.", Topic::Listening),
        LibraryItem::verse("Song of Solomon 4:9", "You have captivated my heart, my sister, my bride.", Topic::Romance),
        LibraryItem::verse("Proverbs 27:17", "Iron sharpens iron, and one man sharpens another.", Topic::Friendship),
        LibraryItem::verse("Philippians 2:3", "Do nothing from selfish ambition or conceit, but in humility count others more significant than yourselves.", Topic::Pride),
        LibraryItem::verse("Proverbs 3:5", "Trust in the Lord with all your heart, and do not lean on your own understanding.", Topic::Wisdom),
        LibraryItem::verse("Ephesians 4:29", "Let no corrupting talk come out of your mouths, but only such as is good for building up.", Topic::Speech),
        LibraryItem::verse("Mark 10:45", "For even the Son of Man came not to be served but to serve.", Topic::Leadership),
    ]
}

/// The fixed wisdom library. Never extended by custom items.
pub fn wisdom_library() -> Vec<LibraryItem> {
    vec![
        LibraryItem::quote("John Gottman", "Successful couples make repair attempts, and the masters of marriage accept them.", Topic::LoveBusters),
        LibraryItem::quote("Willard Harley", "Meeting her most important emotional needs is the surest way to sustain romantic love.", Topic::Needs),
        LibraryItem::quote("Shaunti Feldhahn", "Small gestures of pursuit matter more to her than grand annual ones.", Topic::Romance),
        LibraryItem::quote("John Gottman", "In the strongest marriages, partners turn toward each other's bids for connection.", Topic::Listening),
        LibraryItem::quote("Willard Harley", "Angry outbursts are Love Busters: each one withdraws what affection deposited.", Topic::Anger),
        LibraryItem::quote("Shaunti Feldhahn", "Your wife hears your tone long before she hears your words.", Topic::Speech),
        LibraryItem::quote("John Gottman", "Contempt is the single greatest predictor of divorce; respect is its antidote.", Topic::Marriage),
        LibraryItem::quote("Willard Harley", "Financial security is an emotional need, not a spreadsheet exercise.", Topic::Money),
        LibraryItem::quote("Shaunti Feldhahn", "When a man leads with humility, his wife reads it as strength, not weakness.", Topic::Pride),
        LibraryItem::quote("John Gottman", "Friendship is the foundation: couples who know each other's inner worlds weather conflict.", Topic::Friendship),
        LibraryItem::quote("Willard Harley", "Affection is the environment of a marriage; romance grows only inside it.", Topic::Affection),
        LibraryItem::quote("Shaunti Feldhahn", "Men default to providing; wives are asking for presence.", Topic::Work),
        LibraryItem::quote("John Gottman", "Sharing the load at home is one of the most reliable predictors of marital satisfaction.", Topic::Family),
        LibraryItem::quote("Willard Harley", "Leadership in marriage is joint decision-making with enthusiastic agreement.", Topic::Leadership),
    ]
}
