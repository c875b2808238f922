use super::{Header, Question, ResourceRecord};

/// A whole DNS message: header plus its four sections.
///
/// The header's counters are only trusted while decoding. Encoding derives
/// them from the section lengths, so they may be stale on a value built by
/// hand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl Message {
    pub fn new(header: Header) -> Self {
        Self {
            header,
            ..Self::default()
        }
    }

    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    pub fn with_answer(mut self, answer: ResourceRecord) -> Self {
        self.answers.push(answer);
        self
    }

    /// Rewrites the header counters to match the section lengths, saturating
    /// at `u16::MAX`.
    pub fn sync_counts(&mut self) {
        self.header.qdcount = saturating_count(self.questions.len());
        self.header.ancount = saturating_count(self.answers.len());
        self.header.nscount = saturating_count(self.authorities.len());
        self.header.arcount = saturating_count(self.additionals.len());
    }
}

fn saturating_count(len: usize) -> u16 {
    u16::try_from(len).unwrap_or(u16::MAX)
}
