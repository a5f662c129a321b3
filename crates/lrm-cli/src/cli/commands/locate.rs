//! `lrm locate <name>` – print which location a resource resolves to.

use anyhow::Result;
use lrm_core::LicenseResourceManager;
use std::io::Write;

pub fn run_locate(
    manager: &LicenseResourceManager,
    name: &str,
    out: &mut impl Write,
) -> Result<()> {
    let resource = manager.get_resource(name)?;
    writeln!(out, "{}", resource.name())?;
    Ok(())
}
