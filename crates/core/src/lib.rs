//! Call primitive and shared contract for the widget host bridge.
//!
//! Every host method goes through [`Rpc::invoke`], which forwards a method
//! name from the closed [`Method`] vocabulary and one JSON argument to the
//! installed [`Bridge`].

pub mod bridge;
pub mod config;
pub mod convention;
pub mod envelope;
pub mod error;
pub mod facts;
pub mod method;
pub mod outcome;
pub mod rpc;

pub use bridge::{install, installed, is_installed, Bridge};
pub use config::{ClientConfig, CONVENTION_ENV};
pub use convention::{ArgumentConvention, NoArgs, PositionalArgs};
pub use envelope::{Envelope, HostError, HostErrorData};
pub use error::{RpcError, RpcResult};
pub use facts::{General, HostFacts};
pub use method::Method;
pub use outcome::SetOutcome;
pub use rpc::Rpc;
