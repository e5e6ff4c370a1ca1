//! Built-in emotion taxonomy data.
//!
//! All labels are stored normalized (lowercase, single spaces). Each core
//! emotion's own id is prepended to its variant list by the index builder, so
//! it is not repeated here.

use crate::taxonomy::emotion::CoreEmotion;

/// One core emotion with its synonym variants and subtree.
#[derive(Debug)]
pub(crate) struct CoreEntry {
    pub core: CoreEmotion,
    pub variants: &'static [&'static str],
    pub secondaries: &'static [SecondaryEntry],
}

/// One secondary emotion with its tertiary labels.
#[derive(Debug)]
pub(crate) struct SecondaryEntry {
    pub name: &'static str,
    pub tertiaries: &'static [&'static str],
}

const fn secondary(
    name: &'static str,
    tertiaries: &'static [&'static str],
) -> SecondaryEntry {
    SecondaryEntry { name, tertiaries }
}

pub(crate) static EMOTION_TABLE: &[CoreEntry] = &[
    CoreEntry {
        core: CoreEmotion::Joy,
        variants: &[
            "happy", "happiness", "glad", "cheerful", "delighted", "content", "pleased",
            "elated", "excited", "proud", "playful", "hopeful", "amused", "ecstatic",
            "blissful", "upbeat",
        ],
        secondaries: &[
            secondary(
                "cheerfulness",
                &[
                    "amusement", "bliss", "gaiety", "glee", "jolliness", "joviality",
                    "delight", "enjoyment", "gladness", "jubilation", "elation",
                    "satisfaction", "ecstasy", "euphoria",
                ],
            ),
            secondary("zest", &["enthusiasm", "zeal", "exhilaration", "thrill", "excitement"]),
            secondary("contentment", &["pleasure", "serenity"]),
            secondary("pride", &["triumph", "accomplishment"]),
            secondary("optimism", &["eagerness", "hope"]),
            secondary("enthrallment", &["rapture"]),
        ],
    },
    CoreEntry {
        core: CoreEmotion::Sadness,
        variants: &[
            "sad", "unhappy", "depressed", "gloomy", "miserable", "heartbroken",
            "sorrowful", "melancholy", "hopeless", "grieving", "hurt", "disappointed",
            "lonely", "unhappiness",
        ],
        secondaries: &[
            secondary("suffering", &["agony", "anguish", "torment"]),
            secondary(
                "sorrow",
                &["depression", "despair", "gloom", "grief", "woe", "heartache", "misery"],
            ),
            secondary("disappointment", &["dismay", "displeasure"]),
            secondary("shame", &["guilt", "regret", "remorse"]),
            secondary(
                "neglect",
                &["alienation", "isolation", "loneliness", "rejection", "homesickness", "defeat"],
            ),
            secondary("sympathy", &["pity"]),
        ],
    },
    CoreEntry {
        core: CoreEmotion::Fear,
        variants: &[
            "scared", "afraid", "anxious", "anxiety", "worried", "nervous", "terrified",
            "panicked", "frightened", "insecure", "uneasy", "tense", "dread", "unsafe",
        ],
        secondaries: &[
            secondary(
                "horror",
                &["alarm", "fright", "terror", "panic", "hysteria", "mortification"],
            ),
            secondary(
                "nervousness",
                &["apprehension", "distress", "worry", "uneasiness", "edginess"],
            ),
            secondary("vulnerability", &["helplessness", "powerlessness"]),
        ],
    },
    CoreEntry {
        core: CoreEmotion::Anger,
        variants: &[
            "angry", "mad", "furious", "irritated", "annoyed", "enraged", "hostile",
            "bitter", "resentful", "outraged", "irate",
        ],
        secondaries: &[
            secondary(
                "irritation",
                &["aggravation", "agitation", "annoyance", "grouchiness", "grumpiness"],
            ),
            secondary("exasperation", &["frustration"]),
            secondary(
                "rage",
                &[
                    "fury", "hatred", "hostility", "outrage", "wrath", "scorn", "spite",
                    "vengefulness", "dislike", "resentment",
                ],
            ),
            secondary("envy", &["jealousy"]),
        ],
    },
    CoreEntry {
        core: CoreEmotion::Disgust,
        variants: &[
            "disgusted", "revolted", "repulsed", "sickened", "nauseated", "contempt",
            "loathing", "appalled", "averse",
        ],
        secondaries: &[
            secondary("revulsion", &["repugnance", "abhorrence", "nausea"]),
            secondary("disdain", &["condescension", "derision"]),
            secondary("aversion", &["distaste", "reluctance"]),
        ],
    },
    CoreEntry {
        core: CoreEmotion::Love,
        variants: &[
            "loving", "affectionate", "caring", "tender", "fond", "adoring", "romantic",
            "passionate", "attached", "compassionate", "longing",
        ],
        secondaries: &[
            secondary(
                "affection",
                &[
                    "adoration", "fondness", "liking", "attraction", "tenderness",
                    "compassion", "sentimentality",
                ],
            ),
            secondary("lust", &["desire", "passion", "infatuation"]),
            secondary("yearning", &["nostalgia", "pining"]),
            secondary("warmth", &["kindness", "closeness", "belonging"]),
        ],
    },
    CoreEntry {
        core: CoreEmotion::Surprise,
        variants: &[
            "surprised", "amazed", "astonished", "shocked", "startled", "stunned",
            "astounded", "awestruck",
        ],
        secondaries: &[
            secondary("amazement", &["astonishment", "wonder", "awe"]),
            secondary("confusion", &["bewilderment", "disorientation", "perplexity"]),
            secondary("realization", &["epiphany", "revelation"]),
        ],
    },
    CoreEntry {
        core: CoreEmotion::Trust,
        variants: &[
            "trusting", "secure", "safe", "accepted", "supported", "reliant", "faithful",
            "assured", "respected", "confident",
        ],
        secondaries: &[
            secondary("acceptance", &["approval", "tolerance", "openness"]),
            secondary("admiration", &["respect", "reverence", "esteem"]),
            secondary("security", &["safety", "stability", "reassurance"]),
            secondary("faith", &["belief", "conviction"]),
            secondary("confidence", &["certainty", "courage"]),
        ],
    },
];

/// Common emotion words kept outside the structured tree, mapped straight to
/// a core emotion. Checked in table order.
pub(crate) static DIRECT_MAPPINGS: &[(&str, CoreEmotion)] = &[
    ("relieved", CoreEmotion::Joy),
    ("grateful", CoreEmotion::Joy),
    ("thankful", CoreEmotion::Joy),
    ("motivated", CoreEmotion::Joy),
    ("inspired", CoreEmotion::Joy),
    ("peaceful", CoreEmotion::Joy),
    ("calm", CoreEmotion::Joy),
    ("relaxed", CoreEmotion::Joy),
    ("overwhelmed", CoreEmotion::Fear),
    ("stressed", CoreEmotion::Fear),
    ("restless", CoreEmotion::Fear),
    ("tired", CoreEmotion::Sadness),
    ("exhausted", CoreEmotion::Sadness),
    ("bored", CoreEmotion::Sadness),
    ("numb", CoreEmotion::Sadness),
    ("empty", CoreEmotion::Sadness),
    ("guilty", CoreEmotion::Sadness),
    ("ashamed", CoreEmotion::Sadness),
    ("embarrassed", CoreEmotion::Sadness),
    ("frustrated", CoreEmotion::Anger),
    ("jealous", CoreEmotion::Anger),
    ("confused", CoreEmotion::Surprise),
    ("nostalgic", CoreEmotion::Love),
    ("connected", CoreEmotion::Love),
];

/// Generic positive words; a label containing one defaults to Joy.
pub(crate) static POSITIVE_SENTIMENT_WORDS: &[&str] = &[
    "good", "great", "nice", "fine", "ok", "okay", "awesome", "amazing", "wonderful",
    "fantastic", "positive", "better", "best",
];

/// Generic negative words; a label containing one defaults to Sadness.
pub(crate) static NEGATIVE_SENTIMENT_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "worse", "worst", "negative", "rough", "low",
    "down",
];
