use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use crate::constants::DEFAULT_CURRENCY;

/// Query parameters of a single request.
///
/// Inserting an existing key replaces its value, so merging several maps in
/// sequence behaves like a left-to-right object merge: the last writer wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.0.insert(key.into(), value.to_string());
        self
    }

    /// Inserts `value` when present; `None` leaves the key out of the query.
    pub fn insert_opt<V: ToString>(&mut self, key: impl Into<String>, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Copies every entry of `other` into `self`, overriding existing keys.
    pub fn merge(&mut self, other: Params) -> &mut Self {
        self.0.extend(other.0);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Borrowed `(key, value)` pairs in the shape `HttpClient::get` expects.
    pub fn to_query(&self) -> Vec<(&str, String)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.clone())).collect()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for Params {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Value of the `action` query field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Pricelist,
    MsisdnInfo,
    Topup,
    Simulation,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Pricelist => "pricelist",
            Action::MsisdnInfo => "msisdn_info",
            Action::Topup => "topup",
            Action::Simulation => "simulation",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of the `info_type` field of a pricelist request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoType {
    Countries,
    Country,
    Operator,
}

impl InfoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::Countries => "countries",
            InfoType::Country => "country",
            InfoType::Operator => "operator",
        }
    }
}

impl fmt::Display for InfoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A top-up, or a simulated one when `simulate` is set.
///
/// Unset optional fields are left out of the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopupRequest {
    /// Run as `simulation`: validated by the provider, never executed.
    pub simulate: bool,
    /// Number receiving the credit.
    pub destination_msisdn: String,
    /// Sender number.
    pub msisdn: Option<String>,
    pub operatorid: Option<String>,
    pub skuid: Option<String>,
    /// Product (face value) to send.
    pub product: Option<String>,
    /// Text message delivered to the receiver.
    pub sms: Option<String>,
    /// Defaults to USD.
    pub currency: Option<String>,
}

impl TopupRequest {
    pub fn new(destination_msisdn: impl Into<String>) -> Self {
        Self {
            destination_msisdn: destination_msisdn.into(),
            ..Default::default()
        }
    }

    pub fn action(&self) -> Action {
        if self.simulate {
            Action::Simulation
        } else {
            Action::Topup
        }
    }
}

fn pricelist(info_type: InfoType) -> Params {
    Params::from([
        ("action", Action::Pricelist.as_str()),
        ("info_type", info_type.as_str()),
    ])
}

pub fn countries() -> Params {
    pricelist(InfoType::Countries)
}

pub fn country(country_id: &str) -> Params {
    let mut params = pricelist(InfoType::Country);
    params.insert("content", country_id);
    params
}

pub fn operator(operator_id: &str) -> Params {
    let mut params = pricelist(InfoType::Operator);
    params.insert("content", operator_id);
    params
}

/// `msisdn_info` lookup.
///
/// `options` override the defaults (`delivered_amount_info=1`,
/// `return_service_fee=1`, `currency=USD`, `return_promo=1`), but `action` and
/// `destination_msisdn` are applied afterwards and cannot be overridden.
pub fn msisdn_info(msisdn: &str, options: Option<Params>) -> Params {
    let mut params = Params::new();
    params
        .insert("delivered_amount_info", 1)
        .insert("return_service_fee", 1)
        .insert("currency", DEFAULT_CURRENCY)
        .insert("return_promo", 1);
    if let Some(options) = options {
        params.merge(options);
    }
    params
        .insert("action", Action::MsisdnInfo)
        .insert("destination_msisdn", msisdn);
    params
}

pub fn topup(request: &TopupRequest) -> Params {
    let mut params = Params::new();
    params
        .insert("action", request.action())
        .insert("return_service_fee", 1)
        .insert("return_promo", 1)
        .insert("delivered_amount_info", 1)
        .insert("destination_msisdn", &request.destination_msisdn)
        .insert_opt("msisdn", request.msisdn.as_deref())
        .insert_opt("operatorid", request.operatorid.as_deref())
        .insert_opt("skuid", request.skuid.as_deref())
        .insert_opt("product", request.product.as_deref())
        .insert_opt("sms", request.sms.as_deref())
        .insert(
            "currency",
            request.currency.as_deref().unwrap_or(DEFAULT_CURRENCY),
        );
    params
}
