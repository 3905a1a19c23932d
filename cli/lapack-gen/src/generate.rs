//! The generate workflow: read the binding file, print the wrappers.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::info;

/// Location of the binding file inside the binding crate.
const BINDINGS_PATH: [&str; 2] = ["src", "lapack.rs"];

/// Path of the binding file below `sys`.
pub fn bindings_path(sys: &Path) -> PathBuf {
    BINDINGS_PATH.iter().fold(sys.to_path_buf(), |path, part| path.join(part))
}

/// Generate wrappers for `<sys>/src/lapack.rs` and write them to stdout.
///
/// Nothing is printed unless every prototype translates.
pub fn run(sys: &Path) -> Result<()> {
    let path = bindings_path(sys);
    if !path.is_file() {
        bail!("binding file not found: {}", path.display());
    }
    info!(path = %path.display(), "reading bindings");

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    let code = lapack_gen_ffi::generate(&text)
        .with_context(|| format!("generating wrappers for {}", path.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(code.as_bytes())
        .and_then(|()| out.flush())
        .context("writing wrappers to stdout")?;
    Ok(())
}
