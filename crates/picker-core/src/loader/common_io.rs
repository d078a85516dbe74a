// crates/picker-core/src/loader/common_io.rs
use crate::error::{PickerError, Result};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a dataset file, buffers it and unwraps gzip when the file name ends
/// in `.gz`.
///
/// A missing file is [`PickerError::NotFound`]; any other failure to open it
/// is [`PickerError::Io`].
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(PickerError::NotFound(format!(
                "Dataset not found at {}: {}",
                path.display(),
                e
            )));
        }
        Err(e) => return Err(e.into()),
    };

    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(PickerError::InvalidData(format!(
            "{} is gzip-compressed but 'compact' is disabled",
            path.display()
        )))
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Reads a whole dataset through [`open_stream`].
pub fn read_to_string(path: &Path) -> Result<String> {
    let mut text = String::new();
    open_stream(path)?.read_to_string(&mut text)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gz_suffix_is_case_insensitive() {
        assert!(is_gzip(Path::new("calling_codes.json.gz")));
        assert!(is_gzip(Path::new("CALLING_CODES.JSON.GZ")));
        assert!(!is_gzip(Path::new("calling_codes.json")));
    }

    #[cfg(not(feature = "compact"))]
    #[test]
    fn gzip_without_compact_is_invalid_data() {
        let path = std::env::temp_dir().join(format!(
            "picker-no-compact-{}.json.gz",
            std::process::id()
        ));
        std::fs::write(&path, b"not really gzip").unwrap();

        let err = open_stream(&path).err().unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, PickerError::InvalidData(_)), "{err}");
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_dataset_is_io_error() {
        // opening a directory succeeds on unix, reading it does not
        let err = read_to_string(&std::env::temp_dir()).unwrap_err();
        assert!(matches!(err, PickerError::Io(_)), "{err}");
    }
}
