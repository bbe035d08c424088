//! Output writer: one single-field CSV row per title.

use std::fs::File;
use std::path::Path;

use super::error::TableError;

/// Creates or truncates `path` and writes each title as its own row.
///
/// Titles containing a comma, quote or line break are quoted. Returns the
/// number of rows written. A failure midway leaves whatever was already
/// written in place.
pub fn write_titles<I, S>(path: &Path, titles: I) -> Result<usize, TableError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let file = File::create(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let csv_err = |source| TableError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(file);

    let mut count = 0usize;
    for title in titles {
        writer.write_record([title.as_ref()]).map_err(csv_err)?;
        count += 1;
    }
    writer.flush().map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_row_per_title() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("titles.csv");
        let n = write_titles(&path, ["First Clip", "Second Clip"]).unwrap();
        assert_eq!(n, 2);
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "First Clip\r\nSecond Clip\r\n");
    }

    #[test]
    fn quotes_when_needed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("titles.csv");
        write_titles(&path, ["a, b", "say \"hi\""]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "\"a, b\"\r\n\"say \"\"hi\"\"\"\r\n");
    }

    #[test]
    fn empty_title_is_written_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("titles.csv");
        let n = write_titles(&path, ["", "after"]).unwrap();
        assert_eq!(n, 2);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "\"\"\r\nafter\r\n");
    }

    #[test]
    fn truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("titles.csv");
        std::fs::write(&path, "old\r\nold\r\nold\r\n").unwrap();
        let n = write_titles(&path, ["new"]).unwrap();
        assert_eq!(n, 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new\r\n");
    }

    #[test]
    fn empty_sequence_creates_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("titles.csv");
        let n = write_titles(&path, Vec::<String>::new()).unwrap();
        assert_eq!(n, 0);
        assert!(std::fs::read_to_string(&path).unwrap().is_empty());
    }

    #[test]
    fn missing_parent_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("titles.csv");
        let err = write_titles(&path, ["x"]).unwrap_err();
        assert!(matches!(err, TableError::Io { .. }));
        assert!(!err.is_not_found());
    }
}
