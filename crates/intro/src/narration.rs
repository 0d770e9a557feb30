//! Narration text for a track intro
//!
//! One factual sentence (year, artist, album, title) followed by up to three
//! mood phrases picked from the audio features.

use catalog::TrackMetadata;

/// Scores at or above this select the "high" phrase of a dimension
const HIGH: f64 = 0.65;
/// Scores at or below this select the "low" phrase of a dimension
const LOW: f64 = 0.35;

const FALLBACK_MOOD: &str = "perfect balance";

/// Mood phrases in fixed order: energy, valence, danceability
pub fn mood_phrases(meta: &TrackMetadata) -> Vec<&'static str> {
    let mut phrases = Vec::with_capacity(3);

    if meta.energy >= HIGH {
        phrases.push("high energy");
    } else if meta.energy <= LOW {
        phrases.push("subdued atmosphere");
    }

    if meta.valence >= HIGH {
        phrases.push("bright vibe");
    } else if meta.valence <= LOW {
        phrases.push("darker tones");
    }

    // Low danceability has no phrase of its own
    if meta.danceability >= HIGH {
        phrases.push("movement-inducing groove");
    }

    phrases
}

/// Compose the intro sentence for `meta`
///
/// Metadata strings are inserted verbatim.
pub fn compose_narration(meta: &TrackMetadata) -> String {
    let phrases = mood_phrases(meta);
    let mood = if phrases.is_empty() {
        FALLBACK_MOOD.to_string()
    } else {
        phrases.join(", ")
    };

    format!(
        "{}, {} from the album {}: {}. {mood}. Enjoy the listen.",
        meta.year, meta.artist, meta.album, meta.title
    )
}
