use super::*;

#[test]
fn empty_transcript_is_rejected() {
    assert_eq!(validate_transcript(&[]), Err("No messages provided"));
}

#[test]
fn transcript_must_end_with_user_turn() {
    let messages = vec![ChatMessage::user("Hello"), ChatMessage::assistant("How can I help?")];
    assert_eq!(validate_transcript(&messages), Err("Last message must be from user"));
}

#[test]
fn blank_user_turn_is_rejected() {
    assert_eq!(validate_transcript(&[ChatMessage::user("   ")]), Err("Type a message first."));
}

#[test]
fn valid_transcript_passes() {
    let messages = vec![
        ChatMessage::user("Hello"),
        ChatMessage::assistant("How can I help?"),
        ChatMessage::user("I have a rash"),
    ];
    assert_eq!(validate_transcript(&messages), Ok(()));
}
