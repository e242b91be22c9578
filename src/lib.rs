mod error;
mod filter;
mod library;
mod message;
mod oid;
mod receiver;
mod timestr;
mod trap_v1;
mod trap_v2c;

#[cfg(test)]
#[allow(dead_code)]
#[path = "../tests/common/fixtures.rs"]
mod fixtures;

pub use error::Error;
pub use filter::{TrapFilter, TrapPredicate};
pub use library::TrapLibrary;
pub use message::{decode_message, TrapPdu, TrapVarBinds, Version};
pub use oid::{snmp_trap_oid, IntoObjectIdentifier, ObjectIdentifierExt, ParseObjectIdentifierError};
pub use receiver::{receive_trap, ReceiverOptions, TrapReceiver};
pub use timestr::{format_duration, parse_timestr, ParseTimeError};
