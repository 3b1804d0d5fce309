//! `schema` command: print the resource field table.

use tabled::Tabled;

use ipacl_core::{DefaultValue, FieldSpec, IP_ACCESS_LIST_SCHEMA, Rule};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    name: &'static str,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Required")]
    required: bool,
    #[tabled(rename = "Default")]
    default: String,
    #[tabled(rename = "Rules")]
    rules: String,
    #[tabled(rename = "Description")]
    description: &'static str,
}

fn describe_rule(rule: &Rule) -> String {
    match rule {
        Rule::NonEmpty => "non-empty".into(),
        Rule::OneOf(values) => format!("one of {}", values.join("|")),
        Rule::EachIpv4OrCidr => "each IPv4 or CIDR".into(),
    }
}

impl From<&FieldSpec> for FieldRow {
    fn from(f: &FieldSpec) -> Self {
        Self {
            name: f.name,
            kind: f.kind.to_string(),
            required: f.required,
            default: match f.default {
                Some(DefaultValue::Bool(b)) => b.to_string(),
                None => String::new(),
            },
            rules: f.rules.iter().map(describe_rule).collect::<Vec<_>>().join(", "),
            description: f.description,
        }
    }
}

pub fn handle(global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_list(
        &global.output,
        IP_ACCESS_LIST_SCHEMA.fields,
        |f| FieldRow::from(f),
        |f| f.name.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
