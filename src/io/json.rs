//! Pretty JSON files.
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::Error;

/// Read and deserialize a whole JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
    debug!("reading {:?}", path);
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Read a whole JSON file without assuming its shape.
pub fn read_value(path: &Path) -> Result<Value, Error> {
    read_json(path)
}

/// Serialize `value` into an indented JSON file.
///
/// Non-ASCII characters are written as-is.
/// Data is first written next to `path` then renamed, so that a failed write does not leave a truncated file behind.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), Error> {
    let mut tmp = PathBuf::from(path);
    let mut tmp_name = path
        .file_name()
        .map(|name| name.to_os_string())
        .ok_or_else(|| Error::Custom(format!("invalid destination file: {:?}", path)))?;
    tmp_name.push(".tmp");
    tmp.set_file_name(tmp_name);

    debug!("writing {:?}", path);
    {
        let mut writer = BufWriter::new(File::create(&tmp)?);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    std::fs::rename(&tmp, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_ascii_is_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let v = json!({"word": "die Straße", "fa": "خیابان"});

        write_json(&path, &v).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("die Straße"));
        assert!(raw.contains("خیابان"));
        assert!(raw.contains("\n  \"word\""));
        assert_eq!(read_value(&path).unwrap(), v);
        assert!(!dir.path().join("out.json.tmp").exists());
    }

    #[test]
    fn missing_file() {
        let r = read_value(Path::new("/nonexistent/lexicorpus/file.json"));
        assert!(matches!(r, Err(Error::Io(_))));
    }
}
