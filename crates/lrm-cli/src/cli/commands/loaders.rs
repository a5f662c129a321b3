//! `lrm loaders` – list configured loaders in lookup order.

use anyhow::Result;
use lrm_core::LicenseResourceManager;
use std::io::Write;

pub fn run_loaders(manager: &LicenseResourceManager, out: &mut impl Write) -> Result<()> {
    let loaders = manager.loaders();
    if loaders.is_empty() {
        writeln!(out, "No loaders configured.")?;
        return Ok(());
    }
    writeln!(out, "{:<16} {:<8} {}", "ID", "KIND", "BUNDLED")?;
    for (id, loader) in loaders.iter() {
        let bundled = if loader.is_host_bundled() { "yes" } else { "no" };
        writeln!(out, "{:<16} {:<8} {}", id, loader.kind(), bundled)?;
    }
    Ok(())
}
