use serde::{Deserialize, Serialize};

/// Smallest payload every DNS-over-UDP peer must accept.
pub const STANDARD_UDP_PAYLOAD: usize = 512;

/// Largest payload a single UDP datagram can carry.
pub const MAX_UDP_PAYLOAD: usize = u16::MAX as usize;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    #[serde(default = "default_max_udp_payload")]
    pub max_udp_payload: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            dns_port: default_dns_port(),
            max_udp_payload: default_max_udp_payload(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_dns_port() -> u16 {
    2053
}

fn default_max_udp_payload() -> usize {
    STANDARD_UDP_PAYLOAD
}
