#![allow(clippy::module_inception)]
mod client;

#[cfg(feature = "blocking")]
mod blocking;

pub use client::{HttpClient, ProviderClient};

#[cfg(feature = "reqwest-client")]
pub use client::ReqwestClient;
#[cfg(feature = "ureq-client")]
pub use client::UreqClient;

#[cfg(feature = "blocking")]
pub use blocking::BlockingProviderClient;

// Re-export core types (avoiding module name conflicts)
pub use transferto_core::{
    constants, params, Action, Credentials, Error, InfoType, Params, ParseError, ProviderError,
    ResponseDocument, Result, TopupRequest, Value,
};
