use rasn::prelude::ObjectIdentifier;
use std::num::ParseIntError;
use thiserror::Error;

/// Sub-identifiers of `snmpTrapOID.0`, the binding that carries the trap type
/// in SNMPv2c notifications.
const SNMP_TRAP_OID: [u32; 11] = [1, 3, 6, 1, 6, 3, 1, 1, 4, 1, 0];

/// Returns the `snmpTrapOID.0` object identifier.
pub fn snmp_trap_oid() -> ObjectIdentifier {
    ObjectIdentifier::new(SNMP_TRAP_OID.to_vec()).expect("snmpTrapOID.0 is a valid OID")
}

pub trait ObjectIdentifierExt {
    fn parse(oid: impl AsRef<str>) -> Result<Self, ParseObjectIdentifierError>
    where
        Self: Sized;

    fn to_dotted(&self) -> String;
}

impl ObjectIdentifierExt for ObjectIdentifier {
    /// Attempts to parse an [`ObjectIdentifier`] from a string.
    ///
    /// # Example
    /// ```
    /// use rasn::prelude::ObjectIdentifier;
    /// use snmp_traps::ObjectIdentifierExt;
    ///
    /// let oid = ObjectIdentifier::parse("1.2.3").unwrap();
    /// assert_eq!(oid, ObjectIdentifier::new(vec![1, 2, 3]).unwrap());
    ///
    /// let oid = ObjectIdentifier::parse(".1.2.3").unwrap();
    /// assert_eq!(oid, ObjectIdentifier::new(vec![1, 2, 3]).unwrap());
    /// ```
    fn parse(oid: impl AsRef<str>) -> Result<Self, ParseObjectIdentifierError> {
        let parts = oid
            .as_ref()
            .trim()
            .trim_start_matches('.')
            .split('.')
            .map(|s| s.parse())
            .collect::<Result<Vec<u32>, _>>()?;
        ObjectIdentifier::new(parts).ok_or(ParseObjectIdentifierError::InvalidObjectIdentifier)
    }

    /// Renders the OID in dotted notation without a leading dot, e.g.
    /// `1.3.6.1.2.1.1.3.0`.
    fn to_dotted(&self) -> String {
        self.iter()
            .map(|arc| arc.to_string())
            .collect::<Vec<_>>()
            .join(".")
    }
}

pub trait IntoObjectIdentifier {
    fn into(self) -> Result<ObjectIdentifier, ParseObjectIdentifierError>;
}

impl IntoObjectIdentifier for &str {
    fn into(self) -> Result<ObjectIdentifier, ParseObjectIdentifierError> {
        ObjectIdentifier::parse(self)
    }
}

impl IntoObjectIdentifier for ObjectIdentifier {
    fn into(self) -> Result<ObjectIdentifier, ParseObjectIdentifierError> {
        Ok(self)
    }
}

#[derive(Debug, Error)]
pub enum ParseObjectIdentifierError {
    #[error("parsing sub-identifier: {0}")]
    ParsingSubIdentifier(#[from] ParseIntError),
    #[error("invalid object identifier")]
    InvalidObjectIdentifier,
}
