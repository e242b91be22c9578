use crate::message::{render_address, render_octets, TrapPdu, Version, VersionedMessage};
use crate::oid::{snmp_trap_oid, ObjectIdentifierExt};
use rasn::prelude::ObjectIdentifier;
use rasn_smi::v2::{ApplicationSyntax, ObjectSyntax, SimpleSyntax};
use rasn_snmp::v2::{Pdus, VarBind, VarBindValue};
use rasn_snmp::v2c::Message;

/// An implementation of [`VersionedMessage`] for SNMPv2c.
pub struct V2c;

impl VersionedMessage for V2c {
    type Message = Message<Pdus>;
    type Pdus = Pdus;

    const VERSION: Version = Version::V2c;

    fn into_pdu(message: Message<Pdus>) -> TrapPdu {
        TrapPdu::V2c(message.data)
    }

    fn is_trap(pdus: &Pdus) -> bool {
        // Informs are confirmed notifications and would require a response.
        matches!(pdus, Pdus::Trap(_))
    }

    fn var_binds(pdus: &Pdus) -> Vec<(ObjectIdentifier, String)> {
        bindings(pdus)
            .iter()
            .map(|binding| (binding.name.clone(), render_value(&binding.value)))
            .collect()
    }
}

fn bindings(pdus: &Pdus) -> &[VarBind] {
    match pdus {
        Pdus::GetRequest(pdu) => &pdu.0.variable_bindings,
        Pdus::GetNextRequest(pdu) => &pdu.0.variable_bindings,
        Pdus::GetBulkRequest(pdu) => &pdu.0.variable_bindings,
        Pdus::Response(pdu) => &pdu.0.variable_bindings,
        Pdus::SetRequest(pdu) => &pdu.0.variable_bindings,
        Pdus::InformRequest(pdu) => &pdu.0.variable_bindings,
        Pdus::Trap(pdu) => &pdu.0.variable_bindings,
        Pdus::Report(pdu) => &pdu.0.variable_bindings,
    }
}

/// Values of all `snmpTrapOID.0` bindings of a trap, `None` for a binding
/// whose value is not an object identifier.
pub(crate) fn snmp_trap_oid_values(pdus: &Pdus) -> Vec<Option<&ObjectIdentifier>> {
    let trap_oid = snmp_trap_oid();
    bindings(pdus)
        .iter()
        .filter(|binding| binding.name == trap_oid)
        .map(|binding| match &binding.value {
            VarBindValue::Value(ObjectSyntax::Simple(SimpleSyntax::ObjectId(oid))) => Some(oid),
            _ => None,
        })
        .collect()
}

fn render_value(value: &VarBindValue) -> String {
    match value {
        VarBindValue::Value(syntax) => render_syntax(syntax),
        VarBindValue::Unspecified => String::new(),
        VarBindValue::NoSuchObject => "noSuchObject".to_string(),
        VarBindValue::NoSuchInstance => "noSuchInstance".to_string(),
        VarBindValue::EndOfMibView => "endOfMibView".to_string(),
    }
}

fn render_syntax(syntax: &ObjectSyntax) -> String {
    match syntax {
        ObjectSyntax::Simple(SimpleSyntax::Integer(integer)) => integer.to_string(),
        ObjectSyntax::Simple(SimpleSyntax::String(string)) => render_octets(string),
        ObjectSyntax::Simple(SimpleSyntax::ObjectId(oid)) => oid.to_dotted(),
        ObjectSyntax::ApplicationWide(ApplicationSyntax::Address(address)) => {
            render_address(address.0.iter().copied())
        }
        ObjectSyntax::ApplicationWide(ApplicationSyntax::Counter(counter)) => counter.0.to_string(),
        ObjectSyntax::ApplicationWide(ApplicationSyntax::Unsigned(gauge)) => gauge.0.to_string(),
        ObjectSyntax::ApplicationWide(ApplicationSyntax::Ticks(ticks)) => ticks.0.to_string(),
        ObjectSyntax::ApplicationWide(ApplicationSyntax::Arbitrary(opaque)) => {
            render_octets(opaque.as_ref())
        }
        ObjectSyntax::ApplicationWide(ApplicationSyntax::BigCounter(counter)) => {
            counter.0.to_string()
        }
    }
}
