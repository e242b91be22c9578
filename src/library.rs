use crate::error::Error;
use crate::filter::TrapFilter;
use crate::message::TrapVarBinds;
use crate::oid::IntoObjectIdentifier;
use crate::receiver::{receive_trap, ReceiverOptions};
use std::collections::HashMap;
use std::net::IpAddr;
use tokio::runtime;
use tracing::debug;

/// Trap keywords for a test runner: named filters plus a blocking wait for
/// the first trap matching one of them.
///
/// ```no_run
/// use snmp_traps::{ReceiverOptions, TrapLibrary};
///
/// # fn example() -> Result<(), snmp_traps::Error> {
/// let mut library = TrapLibrary::new();
/// library.new_trap_filter("link down", Some("192.168.0.23"), Some("1.3.6.1.6.3.1.1.5.3"))?;
///
/// let options = ReceiverOptions::parse("10 s", "0.0.0.0", 1620)?;
/// let bindings = library.wait_until_trap_is_received_blocking("link down", &options)?;
/// println!("{:?}", bindings.get("1.3.6.1.2.1.2.2.1.1.2"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct TrapLibrary {
    filters: HashMap<String, TrapFilter>,
}

impl TrapLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines a new trap filter, replacing any filter with the same name.
    ///
    /// Only the sending host and the trap OID can be filtered on. `None` or an
    /// empty string leaves that criterion unset.
    pub fn new_trap_filter(
        &mut self,
        name: impl Into<String>,
        host: Option<&str>,
        oid: Option<&str>,
    ) -> Result<(), Error> {
        let host = match non_empty(host) {
            Some(host) => Some(host.parse::<IpAddr>()?),
            None => None,
        };
        let oid = match non_empty(oid) {
            Some(oid) => Some(IntoObjectIdentifier::into(oid)?),
            None => None,
        };

        let name = name.into();
        debug!("Defining trap filter \"{}\"", name);
        self.filters.insert(name, TrapFilter::new(host, oid));
        Ok(())
    }

    pub fn trap_filter(&self, name: &str) -> Option<&TrapFilter> {
        self.filters.get(name)
    }

    /// Waits until the first trap matching the named filter is received and
    /// returns its variable bindings.
    pub async fn wait_until_trap_is_received(
        &self,
        filter_name: &str,
        options: &ReceiverOptions,
    ) -> Result<TrapVarBinds, Error> {
        let filter = self
            .filters
            .get(filter_name)
            .ok_or_else(|| Error::FilterNotFound(filter_name.to_string()))?;
        receive_trap(filter, options).await
    }

    /// Same as [`TrapLibrary::wait_until_trap_is_received`] for callers that
    /// are not running inside an async runtime.
    ///
    /// Fails with [`Error::BlockingInRuntime`] when called from a thread that
    /// already drives a tokio runtime; use the async form there.
    pub fn wait_until_trap_is_received_blocking(
        &self,
        filter_name: &str,
        options: &ReceiverOptions,
    ) -> Result<TrapVarBinds, Error> {
        if runtime::Handle::try_current().is_ok() {
            return Err(Error::BlockingInRuntime);
        }
        let runtime = runtime::Builder::new_current_thread().enable_all().build()?;
        runtime.block_on(self.wait_until_trap_is_received(filter_name, options))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oid::ObjectIdentifierExt;
    use rasn::prelude::ObjectIdentifier;

    #[test]
    fn defines_filters() {
        let mut library = TrapLibrary::new();
        library
            .new_trap_filter("cold start", Some("10.0.0.1"), Some(".1.3.6.1.6.3.1.1.5.1"))
            .unwrap();

        let filter = library.trap_filter("cold start").unwrap();
        assert_eq!(filter.host, Some("10.0.0.1".parse().unwrap()));
        assert_eq!(filter.oid, Some(ObjectIdentifier::parse("1.3.6.1.6.3.1.1.5.1").unwrap()));
    }

    #[test]
    fn empty_criteria_are_unset() {
        let mut library = TrapLibrary::new();
        library.new_trap_filter("any", Some(""), None).unwrap();
        assert_eq!(library.trap_filter("any"), Some(&TrapFilter::default()));
    }

    #[test]
    fn redefining_replaces_filter() {
        let mut library = TrapLibrary::new();
        library.new_trap_filter("f", Some("10.0.0.1"), None).unwrap();
        library.new_trap_filter("f", None, None).unwrap();
        assert_eq!(library.trap_filter("f").unwrap().host, None);
    }

    #[test]
    fn invalid_criteria_are_rejected() {
        let mut library = TrapLibrary::new();
        assert!(matches!(
            library.new_trap_filter("f", Some("not-an-ip"), None),
            Err(Error::InvalidHost(_))
        ));
        assert!(matches!(
            library.new_trap_filter("f", None, Some("1.3.x")),
            Err(Error::InvalidObjectIdentifier(_))
        ));
        assert!(library.trap_filter("f").is_none());
    }

    #[tokio::test]
    async fn unknown_filter_fails_before_binding() {
        let library = TrapLibrary::new();
        let err = library
            .wait_until_trap_is_received("missing", &ReceiverOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::FilterNotFound(ref name) if name == "missing"));
        assert_eq!(err.to_string(), "trap filter \"missing\" not found");
    }
}
