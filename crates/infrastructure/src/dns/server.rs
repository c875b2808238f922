use super::codec::{self, decode_header};
use ferrous_wire_application::use_cases::BuildReplyUseCase;
use ferrous_wire_domain::config::MAX_UDP_PAYLOAD;
use ferrous_wire_domain::{Message, ResponseCode, WireError};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Turns one received datagram into the datagram to send back, if any.
pub struct DnsServerHandler {
    use_case: Arc<BuildReplyUseCase>,
    max_payload: usize,
}

impl DnsServerHandler {
    /// `max_payload` is capped at the largest UDP payload.
    pub fn new(use_case: Arc<BuildReplyUseCase>, max_payload: usize) -> Self {
        Self {
            use_case,
            max_payload: max_payload.min(MAX_UDP_PAYLOAD),
        }
    }

    pub fn max_payload(&self) -> usize {
        self.max_payload
    }

    /// Returns `None` when nothing should be sent: the datagram was a
    /// response, too short to carry a header, or the reply could not be
    /// encoded.
    pub fn handle_datagram(&self, datagram: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let request = match codec::decode(datagram) {
            Ok(request) => request,
            Err(e) => return self.reject_malformed(datagram, client, e),
        };

        if request.header.qr {
            debug!(client = %client, id = request.header.id, "Ignoring DNS response datagram");
            return None;
        }

        match request.questions.first() {
            Some(question) => info!(
                domain = %question.name,
                record_type = %question.record_type,
                questions = request.questions.len(),
                client = %client,
                "DNS query received"
            ),
            None => info!(client = %client, id = request.header.id, "DNS query without questions"),
        }

        let reply = self.use_case.execute(&request);
        self.encode_reply(reply)
    }

    fn reject_malformed(
        &self,
        datagram: &[u8],
        client: SocketAddr,
        cause: WireError,
    ) -> Option<Vec<u8>> {
        let header = match decode_header(datagram) {
            Ok(header) if !header.qr => header,
            _ => {
                debug!(client = %client, len = datagram.len(), error = %cause, "Dropping unreadable datagram");
                return None;
            }
        };

        warn!(client = %client, id = header.id, error = %cause, "Malformed DNS query, replying FORMERR");
        self.encode_reply(BuildReplyUseCase::error_reply(
            &header,
            ResponseCode::FormErr,
        ))
    }

    /// Drops answers from the end until the reply fits `max_payload`, setting
    /// TC once anything was dropped.
    fn encode_reply(&self, mut reply: Message) -> Option<Vec<u8>> {
        loop {
            let wire = match codec::encode(&reply) {
                Ok(wire) => wire,
                Err(e) => {
                    error!(id = reply.header.id, error = %e, "Failed to encode reply");
                    return None;
                }
            };

            if wire.len() <= self.max_payload {
                return Some(wire);
            }

            if reply.answers.pop().is_none() {
                warn!(
                    id = reply.header.id,
                    len = wire.len(),
                    max = self.max_payload,
                    "Reply exceeds payload limit even without answers"
                );
                return None;
            }
            reply.header.tc = true;
            reply.sync_counts();
        }
    }
}
