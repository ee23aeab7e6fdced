pub mod codec;
pub mod error;
pub mod ranges;
pub mod registry;
pub mod scanner;

use std::ffi::{OsStr, OsString};
use std::fmt;

use tracing::debug;

pub use codec::{decode, encode, EncodedKey, Endianness, Utf16Type};
pub use error::{Error, Result};
pub use ranges::CodepointRange;
pub use registry::{default_set, MembershipSet, RangeRegistry};
pub use scanner::{fits_basic_plane, fits_basic_plane_str, strip_supplementary, Match, Scanner};

const EXPORT_FLAG: &str = "--export";

/// Classifies every file named in `argv`, or writes the default table to
/// the path following `--export`.
pub fn bmpfilter<I>(argv: I) -> std::result::Result<(), Box<dyn std::error::Error>>
where
    I: IntoIterator<Item = OsString>,
{
    let mut argv = argv.into_iter().peekable();
    if argv.peek().is_none() {
        return Err(Error::Io(std::io::Error::from(std::io::ErrorKind::InvalidInput)).into());
    }
    let scanner = Scanner::emoji()?;
    while let Some(argument) = argv.next() {
        if argument == EXPORT_FLAG {
            let Some(path) = argv.next() else {
                return Err(Error::Io(std::io::Error::from(std::io::ErrorKind::InvalidInput)).into());
            };
            export(&path, scanner.set())?;
            continue;
        }
        print!("{}: ", argument.to_string_lossy());
        match std::fs::read(std::path::Path::new(&argument)) {
            Ok(file) => {
                let classification = classify_file(&file, &scanner);
                debug!(file = %argument.to_string_lossy(), %classification, "classified");
                println!("{classification}");
            }
            Err(error) => {
                println!("{error}");
            }
        }
    }
    Ok(())
}

fn export(path: &OsStr, set: &MembershipSet) -> Result<()> {
    std::fs::write(path, set.export(Endianness::LittleEndian))?;
    println!(
        "{}: exported {} codepoints",
        path.to_string_lossy(),
        set.len()
    );
    Ok(())
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum TextClassifications {
    Empty,
    Bmp { flagged: bool },
    Supplementary { flagged: bool },
    Data,
}

impl fmt::Display for TextClassifications {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (plane, flagged) = match self {
            TextClassifications::Empty => return f.write_str("empty"),
            TextClassifications::Data => return f.write_str("data"),
            TextClassifications::Bmp { flagged } => ("BMP text", flagged),
            TextClassifications::Supplementary { flagged } => ("supplementary-plane text", flagged),
        };
        if *flagged {
            write!(f, "{plane} with flagged symbols")
        } else {
            f.write_str(plane)
        }
    }
}

fn classify_file(file: &[u8], scanner: &Scanner) -> TextClassifications {
    if file.is_empty() {
        return TextClassifications::Empty;
    }
    let Ok(text) = std::str::from_utf8(file) else {
        return TextClassifications::Data;
    };
    let flagged = scanner.contains_flagged_str(text);
    if fits_basic_plane_str(text) {
        TextClassifications::Bmp { flagged }
    } else {
        TextClassifications::Supplementary { flagged }
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::*;

    fn classify(bytes: &[u8]) -> TextClassifications {
        classify_file(bytes, &Scanner::emoji().unwrap())
    }

    #[test]
    fn no_args() {
        assert!(bmpfilter(vec![]).is_err());
    }

    #[test]
    fn invalid_arg() {
        assert!(bmpfilter(vec![OsString::from("foo")]).is_ok());
    }

    #[test]
    fn export_without_path() {
        assert!(bmpfilter(vec![OsString::from("--export")]).is_err());
    }

    #[test]
    fn export_to_file() {
        let path = std::env::temp_dir().join(format!("bmpfilter-export-{}", std::process::id()));
        assert!(bmpfilter(vec![OsString::from("--export"), path.clone().into_os_string()]).is_ok());
        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(bytes, default_set().unwrap().export(Endianness::LittleEndian));
        // first entry is U+00A9 followed by CRLF
        assert_eq!(&bytes[..6], &[0xA9, 0x00, 0x0D, 0x00, 0x0A, 0x00]);
    }

    #[test]
    fn classifications() {
        assert_eq!(classify(b""), TextClassifications::Empty);
        assert_eq!(classify(b"hello"), TextClassifications::Bmp { flagged: false });
        assert_eq!(
            classify("\u{00A9} 2017".as_bytes()),
            TextClassifications::Bmp { flagged: true }
        );
        assert_eq!(
            classify("\u{20000}".as_bytes()),
            TextClassifications::Supplementary { flagged: false }
        );
        assert_eq!(
            classify("hi \u{1F600}".as_bytes()),
            TextClassifications::Supplementary { flagged: true }
        );
        assert_eq!(classify(&[0x66, 0xFF, 0xFE]), TextClassifications::Data);
    }

    #[test]
    fn display() {
        assert_eq!(TextClassifications::Empty.to_string(), "empty");
        assert_eq!(
            TextClassifications::Bmp { flagged: true }.to_string(),
            "BMP text with flagged symbols"
        );
        assert_eq!(
            TextClassifications::Supplementary { flagged: false }.to_string(),
            "supplementary-plane text"
        );
    }

    #[test]
    fn test_files() {
        assert!(bmpfilter(vec![
            OsString::from("foo"),
            OsString::from("./test_files/empty"),
            OsString::from("./test_files/ascii.txt"),
            OsString::from("./test_files/emoji.txt"),
            OsString::from("./test_files/data.data"),
        ])
        .is_ok());
    }
}
