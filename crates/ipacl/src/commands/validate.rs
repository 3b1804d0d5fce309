//! `validate` command: offline check of a declaration file.

use std::path::Path;

use ipacl_core::IP_ACCESS_LIST_SCHEMA;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::util;

pub fn handle(file: &Path, global: &GlobalOpts) -> Result<(), CliError> {
    let attrs = util::read_attributes_file(file)?;
    let list = IP_ACCESS_LIST_SCHEMA.decode(&attrs)?;

    if !global.quiet {
        eprintln!("{} is a valid IP access list declaration", file.display());
    }
    let out = output::render_single(
        &global.output,
        &list,
        |l| {
            format!(
                "Label:     {}\nType:      {}\nEnabled:   {}\nAddresses: {}",
                l.label,
                l.list_type,
                l.enabled,
                l.ip_addresses.join(", ")
            )
        },
        |l| l.label.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
