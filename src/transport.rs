use std::net::SocketAddr;
use std::time::Duration;
use anyhow::{bail, Result};
use tokio::net::UdpSocket;
use tokio::time::timeout;
use tracing::{debug, warn};
use mydig::writer::MAX_UDP_MESSAGE;

pub(crate) trait Transport {
    /// Sends one query and returns the datagram that answers it.
    async fn exchange(&self, query: &[u8]) -> Result<Vec<u8>>;
}

pub(crate) struct UdpTransport {
    server: SocketAddr,
    timeout: Duration,
    retries: u32,
}

impl UdpTransport {
    pub fn new(server: SocketAddr, timeout: Duration, retries: u32) -> Self {
        Self {
            server,
            timeout,
            retries,
        }
    }
}

impl Transport for UdpTransport {
    async fn exchange(&self, query: &[u8]) -> Result<Vec<u8>> {
        let local: SocketAddr = if self.server.is_ipv6() {
            ([0u16; 8], 0).into()
        } else {
            ([0u8; 4], 0).into()
        };

        let socket = UdpSocket::bind(local).await?;
        // a connected socket drops datagrams from anyone but the server
        socket.connect(self.server).await?;

        let mut buf = [0u8; MAX_UDP_MESSAGE];

        for attempt in 0..=self.retries {
            socket.send(query).await?;
            debug!(attempt, bytes = query.len(), "sent query to {}", self.server);

            match timeout(self.timeout, socket.recv(&mut buf)).await {
                Ok(Ok(n)) => {
                    debug!(bytes = n, "received response from {}", self.server);

                    return Ok(buf[..n].to_vec());
                },
                Ok(Err(e)) => bail!(e),
                Err(_elapsed) => {
                    warn!("{} did not answer within {:?}", self.server, self.timeout);
                }
            }
        }

        bail!("{} did not answer after {} attempts", self.server, self.retries + 1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    async fn server() -> (UdpSocket, SocketAddr) {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();

        (socket, addr)
    }

    #[tokio::test]
    async fn returns_exact_datagram() {
        let (socket, addr) = server().await;
        tokio::spawn(async move {
            let mut buf = [0u8; 512];
            let (n, peer) = socket.recv_from(&mut buf).await.unwrap();
            assert_eq!(&buf[..n], b"query");
            socket.send_to(b"answer", peer).await.unwrap();
        });

        let transport = UdpTransport::new(addr, Duration::from_secs(2), 0);
        assert_eq!(transport.exchange(b"query").await.unwrap(), b"answer".to_vec());
    }

    #[tokio::test]
    async fn retries_once_after_timeout() {
        let (socket, addr) = server().await;
        tokio::spawn(async move {
            let mut buf = [0u8; 512];
            // drop the first attempt
            socket.recv_from(&mut buf).await.unwrap();
            let (_, peer) = socket.recv_from(&mut buf).await.unwrap();
            socket.send_to(b"late", peer).await.unwrap();
        });

        let transport = UdpTransport::new(addr, Duration::from_millis(200), 1);
        assert_eq!(transport.exchange(b"query").await.unwrap(), b"late".to_vec());
    }

    #[tokio::test]
    async fn gives_up() {
        let (_socket, addr) = server().await;

        let transport = UdpTransport::new(addr, Duration::from_millis(50), 1);
        let err = transport.exchange(b"query").await.unwrap_err();

        assert!(err.to_string().contains("after 2 attempts"));
    }
}
