//! Offline keyword classifier
//!
//! Counts cue words per emotion and normalizes the counts against a fixed
//! neutral prior, so text with no cues comes out `neutral` with full
//! confidence and every additional cue pushes its emotion further ahead.

use async_trait::async_trait;
use prosody::Emotion;

use crate::types::EmotionScore;

use super::ClassifierProvider;

/// Weight given to `neutral` before any cue is counted
const NEUTRAL_PRIOR: f64 = 0.5;

/// Cue words; an entry ending in `*` matches any word starting with it
const CUES: &[(Emotion, &[&str])] = &[
    (
        Emotion::Joy,
        &[
            "happy", "happi*", "joy*", "glad", "delight*", "wonderful", "love*", "lovely", "great", "excit*",
            "awesome", "fantastic", "yay",
        ],
    ),
    (
        Emotion::Sadness,
        &[
            "sad", "sadly", "sadness", "unhappy", "depress*", "cry*", "cried", "lonely", "grief", "griev*",
            "sorrow*", "heartbroken", "miserable", "miss",
        ],
    ),
    (
        Emotion::Anger,
        &[
            "angry", "anger", "mad", "furious", "hate*", "annoy*", "rage", "irritat*", "outrag*", "livid",
        ],
    ),
    (
        Emotion::Fear,
        &[
            "scared", "afraid", "fear*", "terrif*", "frighten*", "anxious", "nervous", "panic*", "worri*", "worry",
        ],
    ),
    (
        Emotion::Disgust,
        &["disgust*", "gross", "nasty", "revolting", "yuck", "vile", "repuls*"],
    ),
    (
        Emotion::Surprise,
        &[
            "surpris*", "amaz*", "wow", "unexpected*", "shock*", "astonish*", "unbelievabl*",
        ],
    ),
];

/// Keyword lexicon provider
pub struct LexiconProvider {
    name: String,
}

impl LexiconProvider {
    pub const fn new(name: String) -> Self {
        Self { name }
    }

    /// Score `text` synchronously
    pub fn score(text: &str) -> Vec<EmotionScore> {
        let mut hits = [0u32; CUES.len()];

        for word in text
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|w| !w.is_empty())
        {
            let word = word.to_lowercase();

            for (slot, (_, cues)) in hits.iter_mut().zip(CUES) {
                if cues.iter().any(|cue| matches_cue(&word, cue)) {
                    *slot += 1;
                }
            }
        }

        let total = NEUTRAL_PRIOR + hits.iter().map(|&h| f64::from(h)).sum::<f64>();

        let mut ranking = Vec::with_capacity(CUES.len() + 1);
        ranking.push(EmotionScore {
            label: Emotion::Neutral.as_str().to_string(),
            score: NEUTRAL_PRIOR / total,
        });
        ranking.extend(hits.iter().zip(CUES).map(|(&h, (emotion, _))| EmotionScore {
            label: emotion.as_str().to_string(),
            score: f64::from(h) / total,
        }));

        ranking
    }
}

fn matches_cue(word: &str, cue: &str) -> bool {
    match cue.strip_suffix('*') {
        Some(stem) => word.starts_with(stem),
        None => word == cue,
    }
}

#[async_trait]
impl ClassifierProvider for LexiconProvider {
    async fn classify(&self, text: &str) -> crate::error::Result<Vec<EmotionScore>> {
        Ok(Self::score(text))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
