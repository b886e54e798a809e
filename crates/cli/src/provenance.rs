use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Write `<output-stem>.provenance.json` next to a rendered image.
///
/// The record holds the git revision, the trackfit version, the call site,
/// the render parameters, and the output path, so an overlay can be
/// reproduced later.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(output: P, params: Value) -> Result<PathBuf> {
    let output = output.as_ref();
    let sidecar = sidecar_path(output);
    if let Some(parent) = sidecar.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "trackfit": trackfit::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "params": params,
        "outputs": [output.to_string_lossy()]
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn sidecar_path(output: &Path) -> PathBuf {
    let mut name = output
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("overlay"));
    name.push(".provenance.json");
    output.with_file_name(name)
}

/// Commit recorded in provenance sidecars.
///
/// Precedence: `GIT_COMMIT` baked in at build time, `GIT_COMMIT` at runtime,
/// the checkout's `HEAD`. Falls back to `"unknown"`.
pub fn current_git_rev() -> String {
    resolve_rev(option_env!("GIT_COMMIT"), std::env::var("GIT_COMMIT").ok(), git_head)
}

fn resolve_rev(
    baked: Option<&str>,
    runtime: Option<String>,
    head: impl FnOnce() -> Option<String>,
) -> String {
    baked
        .map(str::to_owned)
        .into_iter()
        .chain(runtime)
        .map(|rev| rev.trim().to_owned())
        .find(|rev| !rev.is_empty())
        .or_else(head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    let rev = rev.trim();
    (!rev.is_empty()).then(|| rev.to_owned())
}
