//! IP access list command handlers.

use serde_json::Map;

use ipacl_core::{
    CoreError, IP_ACCESS_LIST_SCHEMA, IpAccessList, ListId, ReadOutcome, ResourceData,
};

use crate::cli::{GlobalOpts, ListInput};
use crate::error::CliError;
use crate::output;

use super::{Session, util};

// ── Rendering ───────────────────────────────────────────────────────

fn detail(list: &IpAccessList) -> String {
    let mut lines = Vec::new();
    if let Some(ref id) = list.id {
        lines.push(format!("ID:      {id}"));
    }
    lines.push(format!("Label:   {}", list.label));
    lines.push(format!("Type:    {}", list.list_type));
    lines.push(format!("Enabled: {}", list.enabled));
    lines.push(String::new());
    lines.push("Addresses:".into());
    for addr in &list.ip_addresses {
        lines.push(format!("  - {addr}"));
    }
    lines.join("\n")
}

fn plain_id(list: &IpAccessList) -> String {
    list.id.as_ref().map(ToString::to_string).unwrap_or_default()
}

fn print_list(data: &ResourceData, global: &GlobalOpts) -> Result<(), CliError> {
    let view = IP_ACCESS_LIST_SCHEMA.view(data)?;
    let out = output::render_single(&global.output, &view, detail, plain_id)?;
    output::print_output(&out, global.quiet);
    Ok(())
}

/// Read `id` into fresh resource data; a vanished list is a not-found error.
async fn fetch(session: &Session, id: &str) -> Result<ResourceData, CliError> {
    let mut data = ResourceData::existing(ListId::from(id), Map::new());
    match session.resource.read(&mut data, &session.cancel).await? {
        ReadOutcome::Present => Ok(data),
        ReadOutcome::Gone => Err(CoreError::NotFound {
            id: ListId::from(id),
            scope: session.resource.scope(),
        }
        .into()),
    }
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn create(
    session: &Session,
    input: ListInput,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let mut data = ResourceData::declared(util::declared_attributes(input)?);
    session.resource.create(&mut data, &session.cancel).await?;
    print_list(&data, global)
}

pub async fn get(session: &Session, id: &str, global: &GlobalOpts) -> Result<(), CliError> {
    let data = fetch(session, id).await?;
    print_list(&data, global)
}

pub async fn update(
    session: &Session,
    id: &str,
    input: ListInput,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let mut data = fetch(session, id).await?;
    let mut attrs = data.attributes().clone();
    util::apply_input(&mut attrs, input)?;
    data.set_attributes(attrs);

    session.resource.update(&mut data, &session.cancel).await?;
    print_list(&data, global)
}

pub async fn delete(session: &Session, id: &str, global: &GlobalOpts) -> Result<(), CliError> {
    if !util::confirm(&format!("Delete IP access list {id}?"), global.yes)? {
        return Ok(());
    }
    let mut data = ResourceData::existing(ListId::from(id), Map::new());
    session.resource.delete(&mut data, &session.cancel).await?;
    if !global.quiet {
        eprintln!("IP access list deleted");
    }
    Ok(())
}
