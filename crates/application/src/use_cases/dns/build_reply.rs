use crate::ports::AnswerGenerator;
use ferrous_wire_domain::{Header, Message, Opcode, ResponseCode};
use std::sync::Arc;
use tracing::debug;

/// Turns a decoded request into the response the server sends back.
pub struct BuildReplyUseCase {
    answers: Arc<dyn AnswerGenerator>,
}

impl BuildReplyUseCase {
    pub fn new(answers: Arc<dyn AnswerGenerator>) -> Self {
        Self { answers }
    }

    pub fn execute(&self, request: &Message) -> Message {
        let rcode = if request.header.opcode == Opcode::Query {
            ResponseCode::NoError
        } else {
            ResponseCode::NotImp
        };

        let mut reply = Message::new(Self::reply_header(&request.header, rcode));
        reply.questions = request.questions.clone();
        reply.answers = request
            .questions
            .iter()
            .map(|question| self.answers.answer(question))
            .collect();
        reply.sync_counts();

        debug!(
            id = reply.header.id,
            opcode = %request.header.opcode,
            rcode = %rcode,
            answers = reply.answers.len(),
            "Built reply"
        );

        reply
    }

    /// Header-only reply carrying `rcode`, for requests whose body could not
    /// be read.
    pub fn error_reply(request: &Header, rcode: ResponseCode) -> Message {
        Message::new(Self::reply_header(request, rcode))
    }

    fn reply_header(request: &Header, rcode: ResponseCode) -> Header {
        Header {
            id: request.id,
            qr: true,
            opcode: request.opcode,
            aa: false,
            tc: false,
            rd: request.rd,
            ra: false,
            rcode,
            qdcount: 0,
            ancount: 0,
            nscount: 0,
            arcount: 0,
        }
    }
}
