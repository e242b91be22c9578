use crate::message::TrapPdu;
use rasn::prelude::ObjectIdentifier;
use std::net::{IpAddr, SocketAddr};
use tracing::warn;

/// Decides whether a received PDU is the trap a test is waiting for.
///
/// Implemented for closures, so callers can pass their own predicate:
///
/// ```
/// use snmp_traps::{TrapPdu, TrapPredicate};
/// use std::net::SocketAddr;
///
/// let any_trap = |_: &SocketAddr, pdu: &TrapPdu| pdu.is_trap();
/// # fn check(_: impl TrapPredicate) {}
/// # check(any_trap);
/// ```
pub trait TrapPredicate {
    fn matches(&self, source: &SocketAddr, pdu: &TrapPdu) -> bool;
}

impl<F> TrapPredicate for F
where
    F: Fn(&SocketAddr, &TrapPdu) -> bool,
{
    fn matches(&self, source: &SocketAddr, pdu: &TrapPdu) -> bool {
        self(source, pdu)
    }
}

/// Matches traps by the sending host and the trap OID.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrapFilter {
    /// Only accept datagrams from this source address.
    pub host: Option<IpAddr>,

    /// Only accept SNMPv2c traps whose `snmpTrapOID.0` is this OID. SNMPv1
    /// traps carry no `snmpTrapOID.0` and are not filtered by OID.
    pub oid: Option<ObjectIdentifier>,
}

impl TrapFilter {
    pub fn new(host: Option<IpAddr>, oid: Option<ObjectIdentifier>) -> Self {
        Self { host, oid }
    }
}

impl TrapPredicate for TrapFilter {
    fn matches(&self, source: &SocketAddr, pdu: &TrapPdu) -> bool {
        if let Some(host) = self.host {
            if source.ip() != host {
                return false;
            }
        }

        match pdu {
            TrapPdu::V2c(_) if pdu.is_trap() => match &self.oid {
                // A trap without any snmpTrapOID.0 binding passes.
                Some(expected) => pdu
                    .snmp_trap_oid_values()
                    .into_iter()
                    .all(|value| value == Some(expected)),
                None => true,
            },
            TrapPdu::V1(_) if pdu.is_trap() => {
                if self.oid.is_some() {
                    warn!("No OID filtering for v1 traps, skipping OID check");
                }
                true
            }
            _ => false,
        }
    }
}
