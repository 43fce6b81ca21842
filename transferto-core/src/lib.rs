//! Protocol layer of the TransferTo airtime top-up API: request signing,
//! per-operation query parameters and the `key=value` response format.
//!
//! No I/O happens here; see `transferto-client` for the HTTP side.

pub mod constants;
pub mod error;
pub mod params;
mod response;
mod signing;

pub use error::{Error, ParseError, ProviderError, Result};
pub use params::{Action, InfoType, Params, TopupRequest};
pub use response::{ResponseDocument, Value};
pub use signing::{generate_nonce, Credentials};
