//! Remote side of the CFMS lookup core.
//!
//! `BillTransport` is the seam to the network, `BillLookupProxy` turns a
//! validated request plus session into a classified `LookupResult`, and
//! `LoginExchange` uses the same probe to verify new credentials.

pub mod login;
pub mod proxy;
pub mod transport;

pub use login::{LoginExchange, LoginResponse, LoginResult};
pub use proxy::BillLookupProxy;
pub use transport::{BillTransport, ReqwestTransport, TransportError};
