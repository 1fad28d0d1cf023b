use serde::de::DeserializeOwned;

use crate::error::ConversionError;

/// Deserialize with JSON-path context in error messages. Unlike
/// `serde_json::from_str`, a bare `Deserializer` does not check for trailing
/// input on its own, hence the explicit `end()`.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, ConversionError> {
    let mut de = serde_json::Deserializer::from_str(src);
    let value = serde_path_to_error::deserialize::<_, T>(&mut de).map_err(|err| {
        let path = err.path().to_string();
        malformed(path, err.into_inner())
    })?;
    de.end().map_err(|err| malformed("(end of input)".to_string(), err))?;
    Ok(value)
}

fn malformed(path: String, err: serde_json::Error) -> ConversionError {
    ConversionError::MalformedInput { path, message: err.to_string() }
}
