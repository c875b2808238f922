use ferrous_wire_domain::{
    Header, Message, Opcode, Question, RecordClass, RecordType, ResourceRecord, WireError,
};
use ferrous_wire_infrastructure::dns::codec::{decode, decode_record, encode};
use std::net::Ipv4Addr;

mod helpers;
use helpers::{build_query, header_bytes, name, push_name, push_question};

#[test]
fn test_decode_standard_query() {
    let buf = build_query(0x04D2, &["codecrafters.io"]);
    let message = decode(&buf).unwrap();

    assert_eq!(message.header.id, 0x04D2);
    assert!(!message.header.qr);
    assert!(message.header.rd);
    assert_eq!(message.header.opcode, Opcode::Query);
    assert_eq!(message.questions.len(), 1);
    assert_eq!(message.questions[0].name, name("codecrafters.io"));
    assert_eq!(message.questions[0].record_type, RecordType::A);
    assert_eq!(message.questions[0].class, RecordClass::IN);
    assert!(message.answers.is_empty());
}

#[test]
fn test_question_count_drives_parsing() {
    let buf = build_query(1, &["abc.longassdomainname.com", "def.longassdomainname.com"]);
    let message = decode(&buf).unwrap();

    assert_eq!(message.questions.len(), 2);
    assert_eq!(message.questions[0].name, name("abc.longassdomainname.com"));
    assert_eq!(message.questions[1].name, name("def.longassdomainname.com"));
}

#[test]
fn test_compressed_second_question() {
    let mut buf = header_bytes(9, [0x01, 0x00], [2, 0, 0, 0]);
    push_question(&mut buf, "abc.longassdomainname.com", 1, 1);
    // "def" followed by a pointer to "longassdomainname.com" at offset 16
    buf.extend_from_slice(b"\x03def\xC0\x10");
    buf.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);

    let message = decode(&buf).unwrap();
    assert_eq!(message.questions[1].name, name("def.longassdomainname.com"));
    assert_eq!(message.questions[1].record_type, RecordType::A);
}

#[test]
fn test_unknown_type_and_class_survive() {
    let mut buf = header_bytes(3, [0x00, 0x00], [1, 0, 0, 0]);
    push_question(&mut buf, "example.com", 0xFF00, 0x0042);

    let message = decode(&buf).unwrap();
    assert_eq!(message.questions[0].record_type, RecordType::Unknown(0xFF00));
    assert_eq!(message.questions[0].class, RecordClass::Unknown(0x0042));

    let wire = encode(&message).unwrap();
    assert_eq!(wire, buf);
}

#[test]
fn test_missing_question_is_too_short() {
    let buf = header_bytes(1, [0x01, 0x00], [2, 0, 0, 0]);
    assert_eq!(
        decode(&buf),
        Err(WireError::BufferTooShort {
            offset: 12,
            needed: 1
        })
    );
}

#[test]
fn test_truncated_question_tail() {
    let mut buf = header_bytes(1, [0x01, 0x00], [1, 0, 0, 0]);
    push_name(&mut buf, "example.com");
    buf.extend_from_slice(&[0x00, 0x01, 0x00]);

    assert!(matches!(
        decode(&buf),
        Err(WireError::BufferTooShort { needed: 2, .. })
    ));
}

#[test]
fn test_trailing_bytes_ignored() {
    let mut buf = build_query(5, &["example.com"]);
    buf.extend_from_slice(&[0xDE, 0xAD]);

    let message = decode(&buf).unwrap();
    assert_eq!(message.questions.len(), 1);
}

#[test]
fn test_additional_section_is_decoded() {
    let mut buf = build_query(5, &["example.com"]);
    buf[11] = 0x01; // ARCOUNT = 1
    buf.push(0x00); // NAME = root
    buf.extend_from_slice(&[0x00, 41]); // TYPE = OPT
    buf.extend_from_slice(&[0x10, 0x00]); // CLASS = 4096
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]); // TTL
    buf.extend_from_slice(&[0x00, 0x00]); // RDLEN = 0

    let message = decode(&buf).unwrap();
    assert_eq!(message.additionals.len(), 1);
    assert_eq!(message.additionals[0].record_type, RecordType::OPT);
    assert!(message.additionals[0].name.is_root());
    assert!(message.additionals[0].rdata.is_empty());
}

#[test]
fn test_record_rdlength_matches_rdata() {
    let record = ResourceRecord::a(name("codecrafters.io"), 60, Ipv4Addr::new(8, 8, 8, 8));
    let message = Message::new(Header::new(1)).with_answer(record.clone());

    let wire = encode(&message).unwrap();
    let (decoded, consumed) = decode_record(&wire, 12).unwrap();

    assert_eq!(decoded, record);
    assert_eq!(consumed, wire.len() - 12);

    let tail = &wire[wire.len() - 10..];
    assert_eq!(&tail[..4], &60u32.to_be_bytes()); // TTL
    assert_eq!(&tail[4..6], &[0x00, 0x04]); // RDLENGTH
    assert_eq!(&tail[6..], &[8, 8, 8, 8]);
}

#[test]
fn test_truncated_rdata() {
    let mut buf = header_bytes(1, [0x80, 0x00], [0, 1, 0, 0]);
    push_name(&mut buf, "a.io");
    buf.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]); // A IN
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x3C]); // TTL
    buf.extend_from_slice(&[0x00, 0x04, 0x0A, 0x00]); // RDLEN = 4, two bytes present

    let rdata_at = buf.len() - 2;
    assert_eq!(
        decode(&buf),
        Err(WireError::BufferTooShort {
            offset: rdata_at,
            needed: 4
        })
    );
}

#[test]
fn test_counts_are_recomputed_on_encode() {
    let mut message = Message::new(Header {
        qdcount: 9,
        ancount: 9,
        nscount: 9,
        arcount: 9,
        ..Header::new(2)
    });
    message.questions.push(Question::new(
        name("example.com"),
        RecordType::AAAA,
        RecordClass::IN,
    ));

    let wire = encode(&message).unwrap();
    assert_eq!(&wire[4..12], &[0, 1, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn test_full_message_round_trip() {
    let mut message = Message::new(Header {
        qr: true,
        aa: true,
        rd: true,
        ..Header::new(0xCAFE)
    })
    .with_question(Question::new(name("example.com"), RecordType::MX, RecordClass::IN))
    .with_answer(ResourceRecord::new(
        name("example.com"),
        RecordType::MX,
        RecordClass::IN,
        3600,
        b"\x00\x0a\x04mail\x07example\x03com\x00".to_vec(),
    ));
    message.authorities.push(ResourceRecord::new(
        name("example.com"),
        RecordType::NS,
        RecordClass::IN,
        86400,
        b"\x02ns\x07example\x03com\x00".to_vec(),
    ));
    message
        .additionals
        .push(ResourceRecord::a(name("ns.example.com"), 300, Ipv4Addr::new(192, 0, 2, 53)));
    message.sync_counts();

    let decoded = decode(&encode(&message).unwrap()).unwrap();
    assert_eq!(decoded, message);
}

#[test]
fn test_oversized_rdata_rejected() {
    let record = ResourceRecord::new(
        name("big.example"),
        RecordType::TXT,
        RecordClass::IN,
        0,
        vec![0u8; 65_536],
    );
    let message = Message::new(Header::new(1)).with_answer(record);

    assert_eq!(encode(&message), Err(WireError::RdataTooLong(65_536)));
}

#[test]
fn test_largest_rdata_accepted() {
    let record = ResourceRecord::new(
        name("big.example"),
        RecordType::TXT,
        RecordClass::IN,
        0,
        vec![0u8; 65_535],
    );
    let message = Message::new(Header::new(1)).with_answer(record);

    let wire = encode(&message).unwrap();
    assert_eq!(decode(&wire).unwrap().answers[0].rdata.len(), 65_535);
}

#[test]
fn test_too_many_questions_rejected() {
    let mut message = Message::new(Header::new(1));
    message.questions = vec![Question::new(name("a"), RecordType::A, RecordClass::IN); 65_536];

    assert_eq!(
        encode(&message),
        Err(WireError::CountMismatch {
            section: "question",
            len: 65_536
        })
    );
}

#[test]
fn test_unknown_variants_with_named_codes_round_trip() {
    let message = Message::new(Header::new(4))
        .with_question(Question::new(
            name("example.com"),
            RecordType::Unknown(1),
            RecordClass::Unknown(1),
        ))
        .with_answer(ResourceRecord::new(
            name("example.com"),
            RecordType::Unknown(28),
            RecordClass::Unknown(3),
            10,
            vec![0u8; 16],
        ));

    let decoded = decode(&encode(&message).unwrap()).unwrap();
    assert_eq!(decoded.questions, message.questions);
    assert_eq!(decoded.answers, message.answers);
    assert_eq!(decoded.questions[0].record_type, RecordType::A);
    assert_eq!(decoded.answers[0].class, RecordClass::CH);
}

#[test]
fn test_every_type_and_class_code_round_trips() {
    for code in 0..=u16::MAX {
        let question = Question::new(
            name("a.io"),
            RecordType::Unknown(code),
            RecordClass::Unknown(code),
        );
        let message = Message::new(Header::new(code)).with_question(question.clone());

        let decoded = decode(&encode(&message).unwrap()).unwrap();
        assert_eq!(decoded.questions[0], question, "code {}", code);
        assert_eq!(decoded.questions[0].record_type.to_u16(), code);
        assert_eq!(decoded.questions[0].class.to_u16(), code);
    }
}
