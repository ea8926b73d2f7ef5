//! Build script for the storefront crate.
//!
//! Fingerprints `static/css/main.css` so the stylesheet can be served with a
//! content hash in its name and cached forever.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

/// Number of hex characters of the SHA-256 digest kept in file names.
const HASH_LEN: usize = 8;

fn main() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let static_dir = Path::new(&manifest_dir).join("static");

    let css_hash = fingerprint(&static_dir.join("css/main.css"), &static_dir.join("css/derived"));
    println!("cargo:rustc-env=CSS_HASH={css_hash}");
}

/// Copy `source` into `derived_dir` as `<stem>.<hash>.<ext>` and return the hash.
///
/// Returns an empty hash (and leaves `derived_dir` untouched) when the source
/// file is missing, so a fresh checkout still builds.
fn fingerprint(source: &Path, derived_dir: &Path) -> String {
    println!("cargo:rerun-if-changed={}", source.display());

    let content = match fs::read(source) {
        Ok(content) => content,
        Err(e) => {
            println!("cargo:warning=Could not read {}: {e}", source.display());
            return String::new();
        }
    };

    let digest = format!("{:x}", Sha256::digest(&content));
    let hash: String = digest.chars().take(HASH_LEN).collect();

    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("asset");
    let ext = source
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("bin");

    fs::create_dir_all(derived_dir).expect("Failed to create derived asset directory");
    fs::copy(source, derived_dir.join(format!("{stem}.{hash}.{ext}")))
        .expect("Failed to copy fingerprinted asset");

    hash
}
