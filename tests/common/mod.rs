//! Shared trap fixtures and helpers for the integration tests.

#![allow(dead_code)]

use rasn::ber;
use rasn::prelude::{ObjectIdentifier, OctetString};
use rasn_smi::v2::{ObjectSyntax, SimpleSyntax};
use rasn_snmp::v2::{Pdu, Pdus, Trap, VarBind, VarBindValue};
use rasn_snmp::v2c::Message;
use snmp_traps::{snmp_trap_oid, ObjectIdentifierExt};
use std::net::SocketAddr;
use tokio::net::UdpSocket;

pub mod fixtures;

pub use fixtures::*;

pub const LINK_DOWN: &str = "1.3.6.1.6.3.1.1.5.3";
pub const LINK_UP: &str = "1.3.6.1.6.3.1.1.5.4";
pub const IF_DESCR_2: &str = "1.3.6.1.2.1.2.2.1.2.2";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Encodes a v2c trap with the given `snmpTrapOID.0` and an ifDescr binding.
pub fn v2c_trap(trap_oid: &str, if_descr: &str) -> Vec<u8> {
    let message = Message {
        version: 1.into(),
        community: OctetString::from_static(b"public"),
        data: Pdus::Trap(Trap(Pdu {
            request_id: 1.into(),
            error_status: Default::default(),
            error_index: Default::default(),
            variable_bindings: vec![
                VarBind {
                    name: snmp_trap_oid(),
                    value: VarBindValue::Value(ObjectSyntax::Simple(SimpleSyntax::ObjectId(
                        ObjectIdentifier::parse(trap_oid).unwrap(),
                    ))),
                },
                VarBind {
                    name: ObjectIdentifier::parse(IF_DESCR_2).unwrap(),
                    value: VarBindValue::Value(ObjectSyntax::Simple(SimpleSyntax::String(
                        OctetString::from(if_descr.as_bytes().to_vec()),
                    ))),
                },
            ],
        })),
    };
    ber::encode(&message).unwrap()
}

pub async fn sender() -> UdpSocket {
    UdpSocket::bind("127.0.0.1:0").await.unwrap()
}

/// Reserves a free loopback port by binding and releasing it.
pub fn free_port() -> u16 {
    let socket = std::net::UdpSocket::bind("127.0.0.1:0").unwrap();
    socket.local_addr().unwrap().port()
}

pub async fn send(socket: &UdpSocket, bytes: &[u8], target: SocketAddr) {
    socket.send_to(bytes, target).await.unwrap();
}
