use std::num::ParseIntError;

use serde::Deserialize;

/// The only part of `VCAP_APPLICATION` this service cares about.
#[derive(Debug, Deserialize)]
struct VcapApplication {
    application_name: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum IdentityError {
    #[error("invalid instance index `{value}` :: {source}")]
    InstanceIndex {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid application descriptor :: {0}")]
    Descriptor(#[source] serde_json::Error),
}

/// Computes `"{application_name}/{instance_index}"` from platform metadata.
///
/// `Ok(None)` when either piece of metadata is missing: the caller is then
/// expected to identify the instance by its hostname. `fallback_name` is used
/// when the descriptor carries no `application_name`.
pub fn instance_id(
    instance_index: Option<&str>,
    descriptor: Option<&str>,
    fallback_name: &str,
) -> Result<Option<String>, IdentityError> {
    let (Some(instance_index), Some(descriptor)) = (instance_index, descriptor) else {
        return Ok(None);
    };

    let index = instance_index
        .parse::<u32>()
        .map_err(|source| IdentityError::InstanceIndex {
            value: instance_index.to_string(),
            source,
        })?;

    let VcapApplication { application_name } =
        serde_json::from_str(descriptor).map_err(IdentityError::Descriptor)?;
    let name = application_name.unwrap_or_else(|| fallback_name.to_string());

    Ok(Some(format!("{name}/{index}")))
}
