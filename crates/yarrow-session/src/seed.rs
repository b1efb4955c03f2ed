//! Fresh seeds for sessions created without one.

use chrono::Utc;
use rand::Rng;

const QUESTION_PREFIX_CHARS: usize = 20;

/// Build a seed from the question, the current time and 8 random bytes.
///
/// This is the only place OS randomness enters a session; everything after
/// is derived from the returned string.
pub fn generate_seed(question: &str) -> String {
    let prefix: String = question.trim().chars().take(QUESTION_PREFIX_CHARS).collect();
    let millis = Utc::now().timestamp_millis();
    let random: [u8; 8] = rand::rng().random();
    format!("q_{prefix}_t_{millis}_r_{}", hex::encode(random))
}
