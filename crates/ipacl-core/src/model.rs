// ── Resource state model ──
//
// `ResourceData` is the handle the reconciliation framework passes into every
// lifecycle entry point: the identity of the managed object plus its
// attribute map (declared configuration going in, observed state after Read).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use ipacl_api::{ListId, ListType};

/// Whether a remote object exists for this resource.
///
/// The identifier is only ever set from a successful Create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "id", rename_all = "snake_case")]
pub enum ResourceState {
    #[default]
    Absent,
    Present(ListId),
}

impl ResourceState {
    pub(crate) fn describe(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Present(_) => "present",
        }
    }
}

/// Identity plus attributes of one managed access list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceData {
    state: ResourceState,
    #[serde(default)]
    attributes: Map<String, Value>,
}

impl ResourceData {
    /// A resource that has been declared but not created yet.
    pub fn declared(attributes: Map<String, Value>) -> Self {
        Self {
            state: ResourceState::Absent,
            attributes,
        }
    }

    /// A resource already known to exist remotely under `id`.
    pub fn existing(id: ListId, attributes: Map<String, Value>) -> Self {
        Self {
            state: ResourceState::Present(id),
            attributes,
        }
    }

    pub fn state(&self) -> &ResourceState {
        &self.state
    }

    pub fn id(&self) -> Option<&ListId> {
        match &self.state {
            ResourceState::Present(id) => Some(id),
            ResourceState::Absent => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self.state, ResourceState::Present(_))
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Replace the declared attributes, e.g. with a new plan before Update.
    pub fn set_attributes(&mut self, attributes: Map<String, Value>) {
        self.attributes = attributes;
    }

    pub(crate) fn attributes_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.attributes
    }

    pub(crate) fn set_present(&mut self, id: ListId) {
        self.state = ResourceState::Present(id);
    }

    pub(crate) fn set_absent(&mut self) {
        self.state = ResourceState::Absent;
    }
}

/// Typed view of an access list, used for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpAccessList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ListId>,
    pub label: String,
    pub list_type: ListType,
    pub ip_addresses: Vec<String>,
    pub enabled: bool,
}
