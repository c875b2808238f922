use ferrous_wire_domain::{Question, ResourceRecord};

/// Decides what a reply says for one question.
///
/// Implementations must not perform I/O: the reply builder runs inline on
/// the receive path.
pub trait AnswerGenerator: Send + Sync {
    fn answer(&self, question: &Question) -> ResourceRecord;
}
