use ferrous_wire_domain::{Header, Message};

mod helpers;
use helpers::{query, ResourceRecordBuilder};

#[test]
fn test_sync_counts_overrides_stale_counters() {
    let mut message = query(7, "example.com")
        .with_answer(ResourceRecordBuilder::new().build())
        .with_answer(ResourceRecordBuilder::new().name("other.example").build());
    message.header.qdcount = 9;
    message.header.arcount = 3;

    message.sync_counts();

    assert_eq!(message.header.qdcount, 1);
    assert_eq!(message.header.ancount, 2);
    assert_eq!(message.header.nscount, 0);
    assert_eq!(message.header.arcount, 0);
}

#[test]
fn test_new_message_is_empty() {
    let message = Message::new(Header::new(1));
    assert!(message.questions.is_empty());
    assert!(message.answers.is_empty());
    assert!(message.authorities.is_empty());
    assert!(message.additionals.is_empty());
}
