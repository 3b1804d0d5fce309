// ipacl-api: Async Rust client for IP access list APIs (account + workspace scope)

pub mod account;
mod auth;
pub mod error;
mod rest;
pub mod transport;
pub mod types;
pub mod workspace;

pub use account::AccountClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
pub use types::{
    CreateIpAccessList, IpAccessListInfo, ListId, ListType, UpdateIpAccessList,
};
pub use workspace::WorkspaceClient;
