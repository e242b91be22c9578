use crate::error::Error;
use crate::oid::ObjectIdentifierExt;
use crate::trap_v1::V1;
use crate::trap_v2c::V2c;
use rasn::prelude::ObjectIdentifier;
use rasn::types::{Any, Integer};
use rasn::{ber, Decode};
use rasn_snmp::{v1, v2, v3};
use std::collections::HashMap;
use std::fmt;

/// Variable bindings of a received trap, keyed by dotted OID.
pub type TrapVarBinds = HashMap<String, String>;

/// The SNMP versions a trap can be decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    V1,
    V2c,
}

impl Version {
    /// The version number carried on the wire.
    pub fn number(self) -> u8 {
        match self {
            Version::V1 => 0,
            Version::V2c => 1,
        }
    }

    /// Reads the version field of a message without decoding its PDU.
    pub fn detect(bytes: &[u8]) -> Result<Version, Error> {
        // v1 and v2c share the same envelope, only the PDU alternatives differ.
        let envelope: v1::Message<Any> = match ber::decode(bytes) {
            Ok(envelope) => envelope,
            Err(err) => {
                // SNMPv3 carries header data where the community would be.
                if let Ok(message) = ber::decode::<v3::Message>(bytes) {
                    return Err(Error::UnsupportedVersion(message.version.to_string()));
                }
                return Err(err.into());
            }
        };
        [Version::V1, Version::V2c]
            .into_iter()
            .find(|version| envelope.version == Integer::from(i32::from(version.number())))
            .ok_or_else(|| Error::UnsupportedVersion(envelope.version.to_string()))
    }

    /// Decodes a complete message of this version into its typed PDU.
    pub fn decode_pdu(self, bytes: &[u8]) -> Result<TrapPdu, Error> {
        match self {
            Version::V1 => decode_versioned::<V1>(bytes),
            Version::V2c => decode_versioned::<V2c>(bytes),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::V1 => f.write_str("v1"),
            Version::V2c => f.write_str("v2c"),
        }
    }
}

/// Restricts decoding to a specific version of SNMP and provides the message
/// and PDU types used by that version.
pub(crate) trait VersionedMessage {
    /// The complete message type, e.g. [`v1::Message`] over [`v1::Pdus`].
    type Message: Decode;

    /// The PDU alternatives of this version.
    type Pdus;

    const VERSION: Version;

    fn into_pdu(message: Self::Message) -> TrapPdu;

    fn is_trap(pdus: &Self::Pdus) -> bool;

    /// Extracts the variable bindings with their values rendered as text.
    fn var_binds(pdus: &Self::Pdus) -> Vec<(ObjectIdentifier, String)>;
}

fn decode_versioned<V: VersionedMessage>(bytes: &[u8]) -> Result<TrapPdu, Error> {
    let message: V::Message = ber::decode(bytes)?;
    Ok(V::into_pdu(message))
}

/// Decodes an SNMP v1 or v2c message into its PDU.
pub fn decode_message(bytes: &[u8]) -> Result<TrapPdu, Error> {
    Version::detect(bytes)?.decode_pdu(bytes)
}

/// A decoded PDU together with the SNMP version it arrived in. Any PDU type
/// is represented, not only traps.
#[derive(Debug, Clone)]
pub enum TrapPdu {
    V1(v1::Pdus),
    V2c(v2::Pdus),
}

impl TrapPdu {
    pub fn version(&self) -> Version {
        match self {
            TrapPdu::V1(_) => V1::VERSION,
            TrapPdu::V2c(_) => V2c::VERSION,
        }
    }

    /// Returns true for v1 Trap-PDUs and SNMPv2-Trap-PDUs.
    pub fn is_trap(&self) -> bool {
        match self {
            TrapPdu::V1(pdus) => V1::is_trap(pdus),
            TrapPdu::V2c(pdus) => V2c::is_trap(pdus),
        }
    }

    pub fn var_binds(&self) -> Vec<(ObjectIdentifier, String)> {
        match self {
            TrapPdu::V1(pdus) => V1::var_binds(pdus),
            TrapPdu::V2c(pdus) => V2c::var_binds(pdus),
        }
    }

    /// The value of the first `snmpTrapOID.0` binding. Always `None` for v1,
    /// which identifies traps through enterprise and trap numbers instead.
    pub fn trap_oid(&self) -> Option<&ObjectIdentifier> {
        self.snmp_trap_oid_values().into_iter().flatten().next()
    }

    /// One entry per `snmpTrapOID.0` binding, `None` where the bound value is
    /// not an object identifier.
    pub(crate) fn snmp_trap_oid_values(&self) -> Vec<Option<&ObjectIdentifier>> {
        match self {
            TrapPdu::V1(_) => Vec::new(),
            TrapPdu::V2c(pdus) => crate::trap_v2c::snmp_trap_oid_values(pdus),
        }
    }

    /// Converts the variable bindings into the mapping handed back to the
    /// test. A repeated OID keeps its last value.
    pub fn to_map(&self) -> TrapVarBinds {
        self.var_binds()
            .into_iter()
            .map(|(name, value)| (name.to_dotted(), value))
            .collect()
    }
}

/// Renders an octet string as text when it is printable, otherwise as `0x`
/// followed by lowercase hex.
pub(crate) fn render_octets(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) if !text.chars().any(|c| c.is_control() && !c.is_whitespace()) => {
            text.to_string()
        }
        _ => {
            let hex = bytes.iter().map(|b| format!("{b:02x}")).collect::<String>();
            format!("0x{hex}")
        }
    }
}

/// Renders an IP address octet string as a dotted quad.
pub(crate) fn render_address(octets: impl IntoIterator<Item = u8>) -> String {
    octets
        .into_iter()
        .map(|octet| octet.to_string())
        .collect::<Vec<_>>()
        .join(".")
}
