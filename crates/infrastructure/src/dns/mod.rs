pub mod answer;
pub mod codec;
pub mod server;

pub use answer::FixedAddressAnswer;
pub use server::DnsServerHandler;
