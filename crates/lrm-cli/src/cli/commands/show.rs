//! `lrm show <name>` – print a resource's content.

use anyhow::{Context, Result};
use lrm_core::LicenseResourceManager;
use std::io::Write;

pub fn run_show(manager: &LicenseResourceManager, name: &str, out: &mut impl Write) -> Result<()> {
    let resource = manager.get_resource(name)?;
    out.write_all(resource.as_bytes())
        .with_context(|| format!("write {}", resource.name()))?;
    Ok(())
}
