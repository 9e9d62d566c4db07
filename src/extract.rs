//! Best-effort business-name extraction from free-form user input.
//!
//! Looks for a cue word ("called", "named", "it's", "building") followed by a
//! run of capitalized tokens. Lossy and approximate on purpose; the first
//! match wins and is never overwritten for the life of the session.

use crate::session::Session;

const CUE_WORDS: [&str; 4] = ["called", "named", "it's", "building"];

/// Characters stripped from candidate tokens before inspection.
const TRIM: [char; 8] = ['"', '\'', ',', '.', '?', '!', ':', ';'];

/// Scan `user_input` for a business name and set it on the session when one
/// is found and none is set yet.
pub fn extract_business_info(user_input: &str, session: &mut Session) {
    if session.business_name.is_some() {
        return;
    }
    if let Some(name) = find_candidate(user_input) {
        session.business_name = Some(name);
    }
}

/// Return the first capitalized token run following a cue word, if any.
fn find_candidate(input: &str) -> Option<String> {
    let tokens: Vec<&str> = input.split_whitespace().collect();

    for (i, token) in tokens.iter().enumerate() {
        let word = token.trim_matches(TRIM).to_lowercase();
        if !CUE_WORDS.contains(&word.as_str()) {
            continue;
        }

        let mut name_tokens: Vec<&str> = Vec::new();
        for raw in &tokens[i + 1..] {
            let cleaned = raw.trim_matches(TRIM);
            if !cleaned.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
                break;
            }
            name_tokens.push(cleaned);
            // Sentence punctuation on the raw token ends the run.
            if raw.ends_with(['.', ',', '?', '!']) {
                break;
            }
        }

        if !name_tokens.is_empty() {
            return Some(name_tokens.join(" "));
        }
    }

    None
}
