use crate::message::{render_address, render_octets, TrapPdu, Version, VersionedMessage};
use crate::oid::ObjectIdentifierExt;
use rasn::prelude::ObjectIdentifier;
use rasn_smi::v1::{ApplicationSyntax, NetworkAddress, ObjectSyntax, SimpleSyntax};
use rasn_snmp::v1::{Message, Pdus, VarBind};

/// An implementation of [`VersionedMessage`] for SNMPv1.
pub struct V1;

impl VersionedMessage for V1 {
    type Message = Message<Pdus>;
    type Pdus = Pdus;

    const VERSION: Version = Version::V1;

    fn into_pdu(message: Message<Pdus>) -> TrapPdu {
        TrapPdu::V1(message.data)
    }

    fn is_trap(pdus: &Pdus) -> bool {
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
        Pdus::GetResponse(pdu) => &pdu.0.variable_bindings,
        Pdus::SetRequest(pdu) => &pdu.0.variable_bindings,
        // The Trap-PDU has its own layout with the bindings after the
        // enterprise, agent address and time stamp fields.
        Pdus::Trap(trap) => &trap.variable_bindings,
    }
}

fn render_value(value: &ObjectSyntax) -> String {
    match value {
        ObjectSyntax::Simple(SimpleSyntax::Number(number)) => number.to_string(),
        ObjectSyntax::Simple(SimpleSyntax::String(string)) => render_octets(string),
        ObjectSyntax::Simple(SimpleSyntax::Object(oid)) => oid.to_dotted(),
        ObjectSyntax::Simple(SimpleSyntax::Empty) => String::new(),
        ObjectSyntax::ApplicationWide(ApplicationSyntax::Address(NetworkAddress::Internet(
            address,
        ))) => render_address(address.0.iter().copied()),
        ObjectSyntax::ApplicationWide(ApplicationSyntax::Counter(counter)) => counter.0.to_string(),
        ObjectSyntax::ApplicationWide(ApplicationSyntax::Gauge(gauge)) => gauge.0.to_string(),
        ObjectSyntax::ApplicationWide(ApplicationSyntax::Ticks(ticks)) => ticks.0.to_string(),
        ObjectSyntax::ApplicationWide(ApplicationSyntax::Arbitrary(opaque)) => {
            render_octets(opaque.as_ref())
        }
    }
}
