//! Strategy packaging: gzipped tarball, base64 for transport

use std::path::Path;

use base64::{engine::general_purpose, Engine as _};
use flate2::{write::GzEncoder, Compression};
use tar::Builder;

use crate::error::{MmError, MmResult};

/// Prefix every archived entry is stored under.
pub const ARCHIVE_PREFIX: &str = "strategy";

/// Tar and gzip `dir`, storing its contents under `strategy/`.
pub fn compress_folder(dir: impl AsRef<Path>) -> MmResult<Vec<u8>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(MmError::StrategyNotFound {
            path: dir.to_path_buf(),
        });
    }

    let enc = GzEncoder::new(Vec::new(), Compression::default());
    let mut tar = Builder::new(enc);

    tar.append_dir_all(ARCHIVE_PREFIX, dir)
        .map_err(|source| MmError::Archive {
            stage: "compress directory",
            source,
        })?;

    let enc = tar.into_inner().map_err(|source| MmError::Archive {
        stage: "finalize archive",
        source,
    })?;

    let data = enc.finish().map_err(|source| MmError::Archive {
        stage: "finish compression",
        source,
    })?;

    tracing::debug!(dir = %dir.display(), bytes = data.len(), "compressed strategy");
    Ok(data)
}

/// Standard padded base64.
pub fn encode(data: &[u8]) -> String {
    general_purpose::STANDARD.encode(data)
}
