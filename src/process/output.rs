use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use image::{ColorType, ImageFormat};

use crate::error::WriteError;
use crate::primitives::pixel_buffer::PixelBuffer;

/// Sibling path the encoder writes to before the final rename.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Writes `buffer` as an 8-bit RGB PNG at `path`.
///
/// The file only appears at `path` once fully encoded; on failure nothing is
/// left behind. The buffer is borrowed so a failed write can be retried.
pub fn write_png(path: &Path, buffer: &PixelBuffer) -> Result<(), WriteError> {
    let staging = staging_path(path);

    let encoded = image::save_buffer_with_format(
        &staging,
        buffer.as_bytes(),
        buffer.width(),
        buffer.height(),
        ColorType::Rgb8,
        ImageFormat::Png,
    );
    if let Err(source) = encoded {
        let _ = fs::remove_file(&staging);
        return Err(WriteError::Encode {
            path: path.to_path_buf(),
            source,
        });
    }

    if let Err(source) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(WriteError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    log::debug!("Encoded {}x{} PNG to {}", buffer.width(), buffer.height(), path.display());
    Ok(())
}
