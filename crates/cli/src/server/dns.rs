use ferrous_wire_infrastructure::dns::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tracing::{debug, error, info};

const SOCKET_BUFFER_SIZE: usize = 512 * 1024;

/// Serves DNS over UDP on `socket_addr` until `shutdown` resolves.
pub async fn start_dns_server(
    socket_addr: SocketAddr,
    handler: DnsServerHandler,
    shutdown: impl Future<Output = ()>,
) -> anyhow::Result<()> {
    let socket = create_udp_socket(socket_addr)?;
    info!(bind_address = %socket.local_addr()?, "DNS server ready");

    serve(socket, handler, shutdown).await;
    Ok(())
}

/// Datagrams are handled one at a time, in arrival order.
async fn serve(socket: UdpSocket, handler: DnsServerHandler, shutdown: impl Future<Output = ()>) {
    // One byte of headroom tells an oversized datagram apart from one that
    // exactly fills the buffer.
    let mut recv_buf = vec![0u8; handler.max_payload() + 1];
    tokio::pin!(shutdown);

    loop {
        let (len, from) = tokio::select! {
            _ = &mut shutdown => break,
            received = socket.recv_from(&mut recv_buf) => match received {
                Ok(received) => received,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    // ICMP port-unreachable from an earlier reply surfaces
                    // here on some platforms.
                    error!(error = %e, "UDP recv error");
                    continue;
                }
            },
        };

        if len > handler.max_payload() {
            debug!(client = %from, "Dropping datagram larger than payload limit");
            continue;
        }

        let Some(reply) = handler.handle_datagram(&recv_buf[..len], from) else {
            continue;
        };

        if let Err(e) = socket.send_to(&reply, from).await {
            error!(client = %from, error = %e, "Failed to send DNS reply");
        }
    }
}

fn create_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(SOCKET_BUFFER_SIZE)?;
    socket.set_send_buffer_size(SOCKET_BUFFER_SIZE)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}
