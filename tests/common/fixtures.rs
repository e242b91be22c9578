//! Wire captures shared by the unit and integration tests.

/// A v1 Trap-PDU from agent 127.0.0.1, enterprise 1.3.6.1.4.1.9999,
/// enterprise specific trap 1, carrying `1.11.12.13.14.15 = "teststring"`.
pub const V1_TRAP: [u8; 62] = [
    0x30, 0x3c, // Message
    0x02, 0x01, 0x00, // version: 0
    0x04, 0x06, b'p', b'u', b'b', b'l', b'i', b'c', // community
    0xa4, 0x2f, // Trap-PDU
    0x06, 0x07, 0x2b, 0x06, 0x01, 0x04, 0x01, 0xce, 0x0f, // enterprise
    0x40, 0x04, 0x7f, 0x00, 0x00, 0x01, // agent-addr
    0x02, 0x01, 0x06, // generic-trap
    0x02, 0x01, 0x01, // specific-trap
    0x43, 0x01, 0x00, // time-stamp
    0x30, 0x15, // variable-bindings
    0x30, 0x13, 0x06, 0x05, 0x33, 0x0c, 0x0d, 0x0e, 0x0f, // name
    0x04, 0x0a, b't', b'e', b's', b't', b's', b't', b'r', b'i', b'n', b'g',
];

/// A community style envelope claiming SNMP version 3.
pub const VERSION_3_ENVELOPE: [u8; 15] = [
    0x30, 0x0d, 0x02, 0x01, 0x03, 0x04, 0x06, b'p', b'u', b'b', b'l', b'i', b'c', 0x05, 0x00,
];

/// An SNMPv3 message with authPriv flags and an encrypted scoped PDU.
pub const V3_MESSAGE: [u8; 29] = [
    0x30, 0x1b, // SNMPv3Message
    0x02, 0x01, 0x03, // msgVersion: 3
    0x30, 0x0e, // msgGlobalData
    0x02, 0x01, 0x01, // msgID
    0x02, 0x03, 0x00, 0xff, 0xe3, // msgMaxSize: 65507
    0x04, 0x01, 0x03, // msgFlags: auth, priv
    0x02, 0x01, 0x03, // msgSecurityModel: USM
    0x04, 0x00, // msgSecurityParameters
    0x04, 0x04, 0xde, 0xad, 0xbe, 0xef, // encryptedPDU
];
