use crate::error::Error;
use crate::filter::TrapPredicate;
use crate::message::{decode_message, TrapVarBinds};
use crate::timestr::parse_timestr;
use std::io::ErrorKind;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use tokio::io;
use tokio::net::UdpSocket;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, error, instrument, trace, warn};

const MAX_UDP_PACKET_SIZE: usize = 65507;

/// Where to listen for traps and for how long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiverOptions {
    pub host: IpAddr,
    pub port: u16,
    pub timeout: Duration,
}

impl Default for ReceiverOptions {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 1620,
            timeout: Duration::from_secs(5),
        }
    }
}

impl ReceiverOptions {
    /// Builds options from the strings a test script passes, e.g.
    /// `ReceiverOptions::parse("10 s", "0.0.0.0", 1620)`.
    pub fn parse(timeout: &str, host: &str, port: u16) -> Result<Self, Error> {
        Ok(Self {
            host: host.trim().parse()?,
            port,
            timeout: parse_timestr(timeout)?,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// A UDP socket in server mode that hands out the first trap matching a
/// predicate. The socket is closed when the receiver is dropped.
pub struct TrapReceiver {
    socket: UdpSocket,
    local_addr: SocketAddr,
}

impl TrapReceiver {
    pub async fn bind(addr: SocketAddr) -> io::Result<TrapReceiver> {
        let socket = UdpSocket::bind(addr).await?;
        let local_addr = socket.local_addr()?;
        debug!("Listening for SNMP traps on {}", local_addr);
        Ok(Self { socket, local_addr })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Receives datagrams until one decodes to a PDU accepted by `predicate`
    /// and returns that PDU's variable bindings. The timeout covers the whole
    /// wait, not a single datagram.
    ///
    /// A datagram that is not a decodable SNMP v1/v2c message ends the wait
    /// with an error.
    #[instrument(skip(self, predicate), err, fields(local_addr = %self.local_addr))]
    pub async fn wait_for<P>(&self, predicate: &P, timeout: Duration) -> Result<TrapVarBinds, Error>
    where
        P: TrapPredicate + ?Sized,
    {
        // A timeout beyond what an Instant can represent waits without a deadline.
        let deadline = Instant::now().checked_add(timeout);
        let mut buf = vec![0u8; MAX_UDP_PACKET_SIZE];

        loop {
            let received = match deadline {
                Some(deadline) => timeout_at(deadline, self.socket.recv_from(&mut buf))
                    .await
                    .map_err(|_| Error::Timeout(timeout))?,
                None => self.socket.recv_from(&mut buf).await,
            };
            let (size, source) = match received {
                Ok(received) => received,
                Err(err) if is_fatal(&err) => {
                    error!("Failed to receive SNMP trap, giving up: {}", err);
                    return Err(Error::Io(err));
                }
                Err(err) => {
                    warn!("Failed to receive SNMP trap: {}", err);
                    continue;
                }
            };

            if size == MAX_UDP_PACKET_SIZE {
                warn!("Received a message from {} that exceeds the buffer size limit", source);
                continue;
            }

            let pdu = decode_message(&buf[..size])?;
            if predicate.matches(&source, &pdu) {
                debug!("Received matching {} trap from {}", pdu.version(), source);
                return Ok(pdu.to_map());
            }
            trace!("Ignoring non-matching {} message from {}", pdu.version(), source);
        }
    }
}

/// Errors after which the socket is not expected to deliver anything else.
fn is_fatal(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        ErrorKind::PermissionDenied
            | ErrorKind::ConnectionRefused
            | ErrorKind::ConnectionReset
            | ErrorKind::ConnectionAborted
            | ErrorKind::NotConnected
            | ErrorKind::BrokenPipe
            | ErrorKind::Unsupported
            | ErrorKind::OutOfMemory
    )
}

/// Binds to `options.bind_addr()`, waits for the first trap accepted by
/// `predicate` and closes the socket again.
pub async fn receive_trap<P>(predicate: &P, options: &ReceiverOptions) -> Result<TrapVarBinds, Error>
where
    P: TrapPredicate + ?Sized,
{
    let receiver = TrapReceiver::bind(options.bind_addr()).await?;
    receiver.wait_for(predicate, options.timeout).await
}
