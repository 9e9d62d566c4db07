use crate::api::ChatMessage;
use crate::persona::MENTOR_SYSTEM_PROMPT;
use crate::session::{Session, format_recent};

/// Build the two-message payload for one chat turn: a system message carrying
/// persona plus session context, and the user's input verbatim.
pub fn build_messages(user_input: &str, session: &Session) -> Vec<ChatMessage> {
    let mut system = String::from(MENTOR_SYSTEM_PROMPT);

    // Business context block, once the extractor has found a name.
    if let Some(name) = &session.business_name {
        system.push_str(&format!(
            "\n\n## Current Business Context\nBusiness: {name}\nStage: {}",
            session.stage
        ));
        if let Some(challenge) = &session.challenge {
            system.push_str(&format!("\nCurrent Challenge: {challenge}"));
        }
    }

    // Recent history summary.
    if !session.history.is_empty() {
        system.push_str(&format!(
            "\n\n## Recent Conversation\n{}",
            format_recent(&session.history)
        ));
    }

    vec![ChatMessage::system(system), ChatMessage::user(user_input)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;

    #[test]
    fn produces_exactly_two_messages() {
        let session = Session::default();
        let messages = build_messages("hello", &session);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[1].content, "hello");
    }

    #[test]
    fn fresh_session_omits_context_and_history_blocks() {
        let messages = build_messages("hi", &Session::default());
        assert!(!messages[0].content.contains("## Current Business Context"));
        assert!(!messages[0].content.contains("## Recent Conversation"));
    }

    #[test]
    fn business_context_block_includes_challenge_when_set() {
        let mut session = Session::default();
        session.business_name = Some("Acme".into());
        session.challenge = Some("churn".into());
        let messages = build_messages("hi", &session);
        let system = &messages[0].content;
        assert!(system.contains("Business: Acme"));
        assert!(system.contains("Stage: ideation"));
        assert!(system.contains("Current Challenge: churn"));
    }

    #[test]
    fn history_block_renders_recent_turns() {
        let mut session = Session::default();
        session.append_turn(Role::User, "what next?");
        session.append_turn(Role::Assistant, "ship it");
        let messages = build_messages("ok", &session);
        let system = &messages[0].content;
        assert!(system.contains("## Recent Conversation"));
        assert!(system.contains("User: what next?"));
        assert!(system.contains("Mentor: ship it"));
    }

    #[test]
    fn user_input_passes_through_verbatim_with_markup() {
        let input = "  spaced & \"quoted\" {json} ";
        let messages = build_messages(input, &Session::default());
        assert_eq!(messages[1].content, input);
    }
}
