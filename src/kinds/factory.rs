//! Chooses and builds the `ResourceFileKind` for a file.
//!
//! The choice depends on the owning folder's type and the file extension:
//!
//! | folder                | extension | kind                  |
//! |-----------------------|-----------|-----------------------|
//! | `values`              | `.xml`    | `ValuesFile`          |
//! | `layout`/`menu`/`xml` | `.xml`    | `IdGeneratingFile`    |
//! | any other             | any       | `SingleResourceFile`  |

use super::{IdGeneratingFile, SingleResourceFile, ValuesFile};
use crate::error::{ResourceError, ResourceResult};
use crate::resource::{AbstractFile, ResourceFileKind, ResourceFolder};
use crate::types::ResourceFolderType;
use tracing::debug;

/// Resource name of a file: its name up to the first dot, so that
/// `icon.9.png` names `icon`.
pub fn resource_name(file_name: &str) -> Option<&str> {
    let name = file_name.split('.').next()?;
    (!name.is_empty()).then_some(name)
}

fn is_xml(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("xml"))
}

/// Read `file` if its kind needs the content, and build the kind.
pub fn create_kind(
    folder: &ResourceFolder,
    file: &dyn AbstractFile,
) -> ResourceResult<Box<dyn ResourceFileKind>> {
    let folder_type = folder.folder_type();
    let file_name = file.name();
    let unsupported = || ResourceError::UnsupportedFile {
        path: file.path().to_path_buf(),
        folder_type: folder_type.to_string(),
    };

    let name = resource_name(file_name).ok_or_else(unsupported)?;
    let path = file.path().display().to_string();
    let xml = is_xml(file_name);

    let read = || {
        file.contents().map_err(|source| ResourceError::FileRead {
            path: file.path().to_path_buf(),
            source,
        })
    };
    let parse_error = |source| ResourceError::Parse {
        path: file.path().to_path_buf(),
        source,
    };

    let kind: Box<dyn ResourceFileKind> = match folder_type {
        ResourceFolderType::Values => {
            if !xml {
                return Err(unsupported());
            }
            let values = ValuesFile::parse(&read()?, folder.is_framework()).map_err(parse_error)?;
            debug!("{path}: {} value declarations", values.len());
            Box::new(values)
        }
        ty if ty.generates_ids() && xml => {
            let resource_type = ty.file_resource_type().ok_or_else(unsupported)?;
            let parsed = IdGeneratingFile::parse(
                resource_type,
                name,
                &path,
                &read()?,
                folder.is_framework(),
            )
            .map_err(parse_error)?;
            Box::new(parsed)
        }
        ty => {
            let resource_type = ty.file_resource_type().ok_or_else(unsupported)?;
            Box::new(SingleResourceFile::new(
                resource_type,
                name,
                &path,
                folder.is_framework(),
            ))
        }
    };

    Ok(kind)
}
