use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};

use super::{FormatError, MetadataProvider, QueryError};
use crate::error::{MetalensError, Result};
use crate::model::{PropertyName, PropertyValue};

/// One metadata-bearing filesystem object, resolved once per report run.
#[derive(Debug)]
pub struct FsObject {
    path: PathBuf,
    metadata: fs::Metadata,
}

impl FsObject {
    /// Resolve a path into an object handle. Fails if the path cannot be
    /// stat'ed (missing, permission denied, dangling symlink).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let metadata = fs::metadata(&path).map_err(|source| MetalensError::Resolve {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, metadata })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn file_name(&self) -> Option<String> {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
    }

    fn extension(&self) -> Option<String> {
        if self.metadata.is_dir() {
            return None;
        }
        self.path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
    }

    fn attributes(&self) -> String {
        let mut attrs = String::new();
        if self.metadata.is_dir() {
            attrs.push('D');
        }
        if self.metadata.permissions().readonly() {
            attrs.push('R');
        }
        if attrs.is_empty() {
            attrs.push('N');
        }
        attrs
    }
}

/// Production provider backed by `std::fs` metadata.
///
/// Canonical names outside the cross-platform subset below resolve absent,
/// which keeps the full catalog usable against any backend.
#[derive(Debug, Default)]
pub struct FsProvider;

impl FsProvider {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataProvider for FsProvider {
    type Handle = FsObject;

    fn resolve(
        &self,
        handle: &FsObject,
        name: &PropertyName,
    ) -> std::result::Result<Option<PropertyValue>, QueryError> {
        let meta = &handle.metadata;
        let value = match name.as_str() {
            "System.FileName" => handle.file_name().map(PropertyValue::Text),
            "System.FileExtension" => handle.extension().map(PropertyValue::Text),
            "System.ItemName" | "System.ItemNameDisplay" => {
                handle.file_name().map(PropertyValue::Text)
            }
            "System.ItemPathDisplay" | "System.ParsingPath" => {
                Some(PropertyValue::Text(handle.path.display().to_string()))
            }
            "System.ItemFolderPathDisplay" => handle
                .path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(|p| PropertyValue::Text(p.display().to_string())),
            "System.ItemFolderNameDisplay" => handle
                .path
                .parent()
                .and_then(|p| p.file_name())
                .map(|n| PropertyValue::Text(n.to_string_lossy().into_owned())),
            "System.ItemType" => {
                if meta.is_dir() {
                    Some(PropertyValue::Text("File folder".to_string()))
                } else {
                    handle.extension().map(PropertyValue::Text)
                }
            }
            "System.Size" | "System.TotalFileSize" => {
                if meta.is_file() {
                    Some(PropertyValue::Size(meta.len()))
                } else {
                    None
                }
            }
            "System.DateModified" => timestamp_value(meta.modified()),
            "System.DateCreated" => timestamp_value(meta.created()),
            "System.DateAccessed" => timestamp_value(meta.accessed()),
            "System.FileAttributes" => Some(PropertyValue::Text(handle.attributes())),
            _ => None,
        };
        Ok(value)
    }

    fn display_format(&self, value: &PropertyValue) -> std::result::Result<String, FormatError> {
        match value {
            PropertyValue::Text(s) => Ok(s.clone()),
            PropertyValue::UInt(n) => Ok(n.to_string()),
            PropertyValue::Real(r) if r.is_finite() => Ok(r.to_string()),
            PropertyValue::Real(_) => Err(FormatError::for_value(value)),
            PropertyValue::Size(bytes) => Ok(humanize_size(*bytes)),
            PropertyValue::Timestamp(ts) => Ok(ts.format("%Y-%m-%d %H:%M").to_string()),
            PropertyValue::Bool(true) => Ok("Yes".to_string()),
            PropertyValue::Bool(false) => Ok("No".to_string()),
            PropertyValue::List(items) => Ok(items.join("; ")),
            PropertyValue::Blob(_) => Err(FormatError::for_value(value)),
        }
    }
}

// Not every platform records every timestamp; missing ones are absent
// properties, not faults.
fn timestamp_value(stamp: std::io::Result<SystemTime>) -> Option<PropertyValue> {
    stamp
        .ok()
        .map(|t| PropertyValue::Timestamp(DateTime::<Local>::from(t)))
}

fn humanize_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} bytes", bytes);
    }
    let mut scaled = bytes as f64 / 1024.0;
    let mut unit = UNITS[0];
    for next in &UNITS[1..] {
        if scaled < 1024.0 {
            break;
        }
        scaled /= 1024.0;
        unit = next;
    }
    format!("{:.2} {} ({} bytes)", scaled, unit, bytes)
}
