// ── Field schema ──
//
// Static field table for the access list resource. Every conversion between
// the attribute map and the typed wire structs goes through this table:
// declared attributes → create/update request, and get response → observed
// attributes. Validation runs before any request is built.

use std::net::Ipv4Addr;

use ipnet::IpNet;
use serde::Serialize;
use serde_json::{Map, Value};
use strum::{Display, VariantNames};

use crate::error::CoreError;
use crate::model::{IpAccessList, ListId, ListType, ResourceData};
use ipacl_api::{CreateIpAccessList, IpAccessListInfo, UpdateIpAccessList};

pub const LABEL: &str = "label";
pub const LIST_TYPE: &str = "list_type";
pub const IP_ADDRESSES: &str = "ip_addresses";
pub const ENABLED: &str = "enabled";

// ── Field table types ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FieldKind {
    String,
    Bool,
    StringList,
}

/// Validation rule applied to a present value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", content = "values", rename_all = "snake_case")]
pub enum Rule {
    /// Strings and lists must not be empty.
    NonEmpty,
    /// String must be one of the listed spellings (case-sensitive).
    OneOf(&'static [&'static str]),
    /// Every list element is an IPv4 address or CIDR notation.
    EachIpv4OrCidr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Bool(bool),
}

impl DefaultValue {
    fn to_value(self) -> Value {
        match self {
            Self::Bool(b) => Value::Bool(b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
    pub rules: &'static [Rule],
    pub description: &'static str,
}

/// Ordered set of fields; serializes as the static descriptor used for
/// plan diffing and documentation.
#[derive(Debug, Serialize)]
pub struct Schema {
    pub fields: &'static [FieldSpec],
}

/// The access list resource schema, in wire order.
pub static IP_ACCESS_LIST_SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec {
            name: LABEL,
            kind: FieldKind::String,
            required: true,
            default: None,
            rules: &[Rule::NonEmpty],
            description: "Human-readable name of the list",
        },
        FieldSpec {
            name: LIST_TYPE,
            kind: FieldKind::String,
            required: true,
            default: None,
            rules: &[Rule::OneOf(ListType::VARIANTS)],
            description: "Whether the addresses are allowed or blocked",
        },
        FieldSpec {
            name: IP_ADDRESSES,
            kind: FieldKind::StringList,
            required: true,
            default: None,
            rules: &[Rule::NonEmpty, Rule::EachIpv4OrCidr],
            description: "IPv4 addresses or CIDR blocks",
        },
        FieldSpec {
            name: ENABLED,
            kind: FieldKind::Bool,
            required: false,
            default: Some(DefaultValue::Bool(true)),
            rules: &[],
            description: "Whether the list is enforced",
        },
    ],
};

// ── Validation ──────────────────────────────────────────────────────

/// `true` for a dotted-quad IPv4 address or any `addr/prefix` CIDR block.
pub fn is_ipv4_or_cidr(raw: &str) -> bool {
    raw.parse::<Ipv4Addr>().is_ok() || raw.parse::<IpNet>().is_ok()
}

impl FieldSpec {
    fn check(&self, value: Option<&Value>) -> Result<(), CoreError> {
        let Some(value) = value.filter(|v| !v.is_null()) else {
            if self.required {
                return Err(CoreError::validation(self.name, "required attribute is missing"));
            }
            return Ok(());
        };

        match self.kind {
            FieldKind::String => {
                let s = value
                    .as_str()
                    .ok_or_else(|| CoreError::validation(self.name, "expected a string"))?;
                for rule in self.rules {
                    self.check_str(*rule, s)?;
                }
            }
            FieldKind::Bool => {
                if !value.is_boolean() {
                    return Err(CoreError::validation(self.name, "expected a boolean"));
                }
            }
            FieldKind::StringList => {
                let items = value
                    .as_array()
                    .ok_or_else(|| CoreError::validation(self.name, "expected a list of strings"))?;
                for rule in self.rules {
                    self.check_list(*rule, items)?;
                }
            }
        }
        Ok(())
    }

    fn check_str(&self, rule: Rule, s: &str) -> Result<(), CoreError> {
        match rule {
            Rule::NonEmpty if s.is_empty() => {
                Err(CoreError::validation(self.name, "must not be empty"))
            }
            Rule::OneOf(allowed) if !allowed.contains(&s) => Err(CoreError::validation(
                self.name,
                format!("expected one of {}, got {s:?}", allowed.join(", ")),
            )),
            _ => Ok(()),
        }
    }

    fn check_list(&self, rule: Rule, items: &[Value]) -> Result<(), CoreError> {
        if rule == Rule::NonEmpty && items.is_empty() {
            return Err(CoreError::validation(self.name, "must not be empty"));
        }
        for (idx, item) in items.iter().enumerate() {
            let path = format!("{}[{idx}]", self.name);
            let s = item
                .as_str()
                .ok_or_else(|| CoreError::validation(&path, "expected a string"))?;
            match rule {
                Rule::EachIpv4OrCidr if !is_ipv4_or_cidr(s) => {
                    return Err(CoreError::validation(
                        path,
                        format!("{s:?} is neither an IPv4 address nor a CIDR block"),
                    ));
                }
                Rule::OneOf(allowed) if !allowed.contains(&s) => {
                    return Err(CoreError::validation(
                        path,
                        format!("expected one of {}, got {s:?}", allowed.join(", ")),
                    ));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl Schema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check declared attributes against the table. Unknown names are rejected.
    pub fn validate(&self, attrs: &Map<String, Value>) -> Result<(), CoreError> {
        if let Some(unknown) = attrs.keys().find(|k| self.field(k).is_none()) {
            return Err(CoreError::validation(unknown.as_str(), "unknown attribute"));
        }
        for field in self.fields {
            field.check(attrs.get(field.name))?;
        }
        Ok(())
    }

    /// Value of `name`, falling back to the field default when unset.
    fn value_or_default(&self, attrs: &Map<String, Value>, name: &str) -> Option<Value> {
        attrs
            .get(name)
            .filter(|v| !v.is_null())
            .cloned()
            .or_else(|| self.field(name)?.default.map(DefaultValue::to_value))
    }

    /// Validate and convert declared attributes into a typed access list.
    pub fn decode(&self, attrs: &Map<String, Value>) -> Result<IpAccessList, CoreError> {
        self.validate(attrs)?;
        self.typed(attrs)
    }

    /// Shape-only conversion; value rules are not applied.
    fn typed(&self, attrs: &Map<String, Value>) -> Result<IpAccessList, CoreError> {
        let label = string_attr(attrs, LABEL)?;
        let list_type = string_attr(attrs, LIST_TYPE)?
            .parse::<ListType>()
            .map_err(|e| CoreError::validation(LIST_TYPE, e.to_string()))?;
        let ip_addresses = attrs
            .get(IP_ADDRESSES)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(String::from)
                    .collect()
            })
            .ok_or_else(|| CoreError::validation(IP_ADDRESSES, "expected a list of strings"))?;
        let enabled = self
            .value_or_default(attrs, ENABLED)
            .and_then(|v| v.as_bool())
            .ok_or_else(|| CoreError::validation(ENABLED, "expected a boolean"))?;

        Ok(IpAccessList {
            id: None,
            label,
            list_type,
            ip_addresses,
            enabled,
        })
    }

    pub fn to_create_request(
        &self,
        attrs: &Map<String, Value>,
    ) -> Result<CreateIpAccessList, CoreError> {
        let list = self.decode(attrs)?;
        Ok(CreateIpAccessList {
            label: list.label,
            list_type: list.list_type,
            ip_addresses: list.ip_addresses,
            enabled: list.enabled,
        })
    }

    pub fn to_update_request(
        &self,
        attrs: &Map<String, Value>,
        id: ListId,
    ) -> Result<UpdateIpAccessList, CoreError> {
        let list = self.decode(attrs)?;
        Ok(UpdateIpAccessList {
            ip_access_list_id: id,
            label: list.label,
            list_type: list.list_type,
            ip_addresses: list.ip_addresses,
            enabled: list.enabled,
        })
    }

    /// Overwrite every schema field in `attrs` with the remote values.
    pub fn apply_response(&self, info: &IpAccessListInfo, attrs: &mut Map<String, Value>) {
        attrs.insert(LABEL.into(), Value::String(info.label.clone()));
        attrs.insert(LIST_TYPE.into(), Value::String(info.list_type.to_string()));
        attrs.insert(
            IP_ADDRESSES.into(),
            Value::Array(
                info.ip_addresses
                    .iter()
                    .cloned()
                    .map(Value::String)
                    .collect(),
            ),
        );
        attrs.insert(ENABLED.into(), Value::Bool(info.enabled));
    }

    /// Typed view of a resource's attributes, with its id attached.
    ///
    /// Observed state is shown as the remote reports it, so values the
    /// declaration rules would reject still render.
    pub fn view(&self, data: &ResourceData) -> Result<IpAccessList, CoreError> {
        let mut list = self.typed(data.attributes())?;
        list.id = data.id().cloned();
        Ok(list)
    }
}

fn string_attr(attrs: &Map<String, Value>, name: &str) -> Result<String, CoreError> {
    attrs
        .get(name)
        .and_then(Value::as_str)
        .map(String::from)
        .ok_or_else(|| CoreError::validation(name, "expected a string"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn attrs(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn office() -> Map<String, Value> {
        attrs(json!({
            "label": "office",
            "list_type": "ALLOW",
            "ip_addresses": ["203.0.113.0/24"],
            "enabled": true
        }))
    }

    fn field_of(err: CoreError) -> String {
        match err {
            CoreError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_addresses_and_cidr_blocks() {
        for ok in ["10.0.0.1", "203.0.113.0/24", "192.168.1.1/32", "0.0.0.0/0"] {
            assert!(is_ipv4_or_cidr(ok), "{ok} should be accepted");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in [
            "",
            "10.0.0",
            "10.0.0.256",
            "10.0.0.1/33",
            "10.0.0.0/",
            "not-an-ip",
            " 10.0.0.1",
            "2001:db8::1",
        ] {
            assert!(!is_ipv4_or_cidr(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn create_request_from_declared_attributes() {
        let req = IP_ACCESS_LIST_SCHEMA.to_create_request(&office()).unwrap();
        assert_eq!(
            req,
            CreateIpAccessList {
                label: "office".into(),
                list_type: ListType::Allow,
                ip_addresses: vec!["203.0.113.0/24".into()],
                enabled: true,
            }
        );
    }

    #[test]
    fn enabled_defaults_to_true_when_omitted() {
        let declared = attrs(json!({
            "label": "x",
            "list_type": "BLOCK",
            "ip_addresses": ["10.0.0.1"]
        }));
        let req = IP_ACCESS_LIST_SCHEMA.to_create_request(&declared).unwrap();
        assert!(req.enabled);
    }

    #[test]
    fn explicit_false_is_not_overridden() {
        let mut declared = office();
        declared.insert(ENABLED.into(), json!(false));
        let req = IP_ACCESS_LIST_SCHEMA.to_create_request(&declared).unwrap();
        assert!(!req.enabled);
    }

    #[test]
    fn null_enabled_takes_default() {
        let mut declared = office();
        declared.insert(ENABLED.into(), Value::Null);
        let req = IP_ACCESS_LIST_SCHEMA.to_create_request(&declared).unwrap();
        assert!(req.enabled);
    }

    #[test]
    fn rejects_unknown_list_type() {
        for bad in ["DENY", "allow", ""] {
            let mut declared = office();
            declared.insert(LIST_TYPE.into(), json!(bad));
            let err = IP_ACCESS_LIST_SCHEMA.validate(&declared).unwrap_err();
            assert_eq!(field_of(err), LIST_TYPE);
        }
    }

    #[test]
    fn reports_index_of_bad_address() {
        let mut declared = office();
        declared.insert(IP_ADDRESSES.into(), json!(["10.0.0.1", "10.0.0.999"]));
        let err = IP_ACCESS_LIST_SCHEMA.validate(&declared).unwrap_err();
        assert_eq!(field_of(err), "ip_addresses[1]");
    }

    #[test]
    fn rejects_missing_required_fields() {
        for name in [LABEL, LIST_TYPE, IP_ADDRESSES] {
            let mut declared = office();
            declared.remove(name);
            let err = IP_ACCESS_LIST_SCHEMA.validate(&declared).unwrap_err();
            assert_eq!(field_of(err), name);
        }
    }

    #[test]
    fn rejects_empty_label_and_empty_address_list() {
        let mut declared = office();
        declared.insert(LABEL.into(), json!(""));
        assert_eq!(
            field_of(IP_ACCESS_LIST_SCHEMA.validate(&declared).unwrap_err()),
            LABEL
        );

        let mut declared = office();
        declared.insert(IP_ADDRESSES.into(), json!([]));
        assert_eq!(
            field_of(IP_ACCESS_LIST_SCHEMA.validate(&declared).unwrap_err()),
            IP_ADDRESSES
        );
    }

    #[test]
    fn rejects_wrong_types_and_unknown_attributes() {
        let mut declared = office();
        declared.insert(ENABLED.into(), json!("yes"));
        assert_eq!(
            field_of(IP_ACCESS_LIST_SCHEMA.validate(&declared).unwrap_err()),
            ENABLED
        );

        let mut declared = office();
        declared.insert(IP_ADDRESSES.into(), json!("10.0.0.1"));
        assert_eq!(
            field_of(IP_ACCESS_LIST_SCHEMA.validate(&declared).unwrap_err()),
            IP_ADDRESSES
        );

        let mut declared = office();
        declared.insert("comment".into(), json!("hi"));
        assert_eq!(
            field_of(IP_ACCESS_LIST_SCHEMA.validate(&declared).unwrap_err()),
            "comment"
        );
    }

    #[test]
    fn update_request_carries_id() {
        let req = IP_ACCESS_LIST_SCHEMA
            .to_update_request(&office(), ListId::from("abc123"))
            .unwrap();
        assert_eq!(req.ip_access_list_id.as_str(), "abc123");
        assert_eq!(req.label, "office");
    }

    #[test]
    fn apply_response_overwrites_all_fields() {
        let info = IpAccessListInfo {
            list_id: ListId::from("abc123"),
            label: "renamed".into(),
            list_type: ListType::Block,
            ip_addresses: vec!["198.51.100.5".into()],
            enabled: false,
            address_count: Some(1),
            created_at: None,
            created_by: None,
            updated_at: None,
            updated_by: None,
        };
        let mut observed = office();
        IP_ACCESS_LIST_SCHEMA.apply_response(&info, &mut observed);
        assert_eq!(
            Value::Object(observed),
            json!({
                "label": "renamed",
                "list_type": "BLOCK",
                "ip_addresses": ["198.51.100.5"],
                "enabled": false
            })
        );
    }

    #[test]
    fn view_renders_observed_values_the_rules_reject() {
        let data = ResourceData::existing(
            ListId::from("abc123"),
            attrs(json!({
                "label": "office",
                "list_type": "ALLOW",
                "ip_addresses": ["2001:db8::1"],
                "enabled": true
            })),
        );
        assert!(IP_ACCESS_LIST_SCHEMA.validate(data.attributes()).is_err());

        let list = IP_ACCESS_LIST_SCHEMA.view(&data).unwrap();
        assert_eq!(list.id, Some(ListId::from("abc123")));
        assert_eq!(list.ip_addresses, vec!["2001:db8::1".to_string()]);
    }

    #[test]
    fn descriptor_lists_fields_in_wire_order() {
        let descriptor = serde_json::to_value(&IP_ACCESS_LIST_SCHEMA).unwrap();
        let names: Vec<&str> = descriptor["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["label", "list_type", "ip_addresses", "enabled"]);
        assert_eq!(
            descriptor["fields"][1]["rules"],
            json!([{"rule": "one_of", "values": ["ALLOW", "BLOCK"]}])
        );
        assert_eq!(descriptor["fields"][3]["default"], json!(true));
    }
}
