//! Asset generation: materialize an instruction set as files.

use std::fs;
use std::path::Path;

use crate::error::{AssetsError, Result};
use crate::instructions::{IconAsset, InstructionSet};

/// Outcome counters for one generation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerateStats {
    pub written: usize,
    pub skipped: usize,
}

impl GenerateStats {
    pub fn merge(&mut self, other: GenerateStats) {
        self.written += other.written;
        self.skipped += other.skipped;
    }
}

/// Per-asset notification from [`generate_assets`].
#[derive(Debug)]
pub enum GenerateEvent<'a> {
    Written { kind: &'a str, path: &'a Path },
    Skipped { kind: &'a str, path: &'a Path },
    Failed { error: &'a AssetsError },
}

/// Write every instructed asset into `folder`.
///
/// With `override_assets` unset, existing files are skipped and reported
/// as [`GenerateEvent::Skipped`]. SVG favicon passthrough entries are never
/// written (the source file already is the asset).
///
/// Every entry is attempted even when some fail; the first failure is
/// returned after all entries have settled, later failures are reported
/// as [`GenerateEvent::Failed`].
pub fn generate_assets<F>(
    instructions: &InstructionSet,
    override_assets: bool,
    folder: &Path,
    mut notify: F,
) -> Result<GenerateStats>
where
    F: FnMut(GenerateEvent<'_>),
{
    let mut stats = GenerateStats::default();
    let mut first_error: Option<AssetsError> = None;

    let groups: [(&str, &std::collections::BTreeMap<String, IconAsset>); 5] = [
        ("PNG", &instructions.transparent),
        ("PNG", &instructions.maskable),
        ("PNG", &instructions.apple),
        ("ICO", &instructions.favicon),
        ("PNG", &instructions.apple_splash_screen),
    ];

    for (kind, group) in groups {
        for icon in group.values() {
            if icon.name.ends_with(".svg") {
                continue;
            }
            match generate_asset(kind, icon, folder, override_assets, &mut notify) {
                Ok(true) => stats.written += 1,
                Ok(false) => stats.skipped += 1,
                Err(error) => {
                    if first_error.is_none() {
                        first_error = Some(error);
                    } else {
                        notify(GenerateEvent::Failed { error: &error });
                    }
                }
            }
        }
    }

    match first_error {
        Some(error) => Err(error),
        None => Ok(stats),
    }
}

/// Write one asset. Returns whether a file was written (false = skipped).
fn generate_asset<F>(
    kind: &str,
    icon: &IconAsset,
    folder: &Path,
    override_assets: bool,
    notify: &mut F,
) -> Result<bool>
where
    F: FnMut(GenerateEvent<'_>),
{
    let path = folder.join(&icon.name);

    if !override_assets && path.exists() {
        notify(GenerateEvent::Skipped { kind, path: &path });
        return Ok(false);
    }

    let bytes = icon.buffer()?;
    fs::write(&path, &bytes).map_err(|e| AssetsError::AssetWrite {
        path: path.clone(),
        message: format!("{}", e),
    })?;

    notify(GenerateEvent::Written { kind, path: &path });
    Ok(true)
}
