use crate::types::{Address, UniqueAddressSet};
use std::fmt::Display;

/// AddressReport
///
/// The count of unique addresses plus a listing of every one of them.
///
/// The listing is sorted so repeated runs over the same data print identically, but
/// callers shouldn't rely on any particular order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressReport {
    pub total: usize,
    pub addresses: Vec<Address>,
}

impl AddressReport {
    pub fn from_addresses(addresses: UniqueAddressSet) -> Self {
        let mut addresses: Vec<Address> = addresses.into_iter().collect();
        addresses.sort();
        Self {
            total: addresses.len(),
            addresses,
        }
    }
}

impl Display for AddressReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total unique addresses: {}", self.total)?;
        for address in &self.addresses {
            writeln!(f, "{}", address)?;
        }
        Ok(())
    }
}
