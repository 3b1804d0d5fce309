// ipacl-core: Dual-scope lifecycle controller for IP access lists (between ipacl-api and front ends).

pub mod backend;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod schema;
pub mod scope;

// ── Primary re-exports ──────────────────────────────────────────────
pub use backend::IpAccessListBackend;
pub use config::{ProviderConfig, TlsVerification};
pub use error::{CoreError, ErrorKind, Phase};
pub use lifecycle::{IpAccessListResource, ReadOutcome};
pub use model::{IpAccessList, ListId, ListType, ResourceData, ResourceState};
pub use schema::{DefaultValue, FieldKind, FieldSpec, IP_ACCESS_LIST_SCHEMA, Rule, Schema};
pub use scope::{Scope, ScopeRouter};

pub use ipacl_api::Error as RemoteError;
pub use tokio_util::sync::CancellationToken;
