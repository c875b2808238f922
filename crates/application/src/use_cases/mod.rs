pub mod dns;

pub use dns::BuildReplyUseCase;
