use super::{ModelInfo, Schema};
use crate::{Error, Result};

use std::sync::OnceLock;

static INSTALLED: OnceLock<Schema> = OnceLock::new();

/// Publishes `schema` for the rest of the process.
///
/// Only one schema may be installed; later calls fail with
/// `schema_already_installed` and leave the first in place.
pub fn install(schema: Schema) -> Result<&'static Schema> {
    let mut fresh = false;
    let installed = INSTALLED.get_or_init(|| {
        fresh = true;
        schema
    });

    if !fresh {
        return Err(Error::schema_already_installed());
    }

    log::debug!("schema installed; models={}", installed.len());
    Ok(installed)
}

/// The process-wide schema, once installed.
pub fn installed() -> Option<&'static Schema> {
    INSTALLED.get()
}

/// Looks a collection up in the installed schema.
pub fn descriptor_for(collection: &str) -> Option<&'static ModelInfo> {
    installed()?.model(collection)
}
