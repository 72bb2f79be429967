//! Loader failure tests
//!
//! Each failure is reported once, as a typed error, with no document.

use std::io::{self, Read};

use oxit8_core::cgats::CgatsError;
use oxit8_core::{Document, Error, LoadError, it8};
use oxit8_tests::testdata_dir;

fn target_with_header(header: &str) -> String {
    format!(
        "CTI3\n{}\nNUMBER_OF_FIELDS 7\nBEGIN_DATA_FORMAT\n\
         SAMPLE_ID RGB_R RGB_G RGB_B XYZ_X XYZ_Y XYZ_Z\nEND_DATA_FORMAT\n\
         NUMBER_OF_SETS 1\nBEGIN_DATA\n1 100 100 100 95 100 108.9\nEND_DATA\n",
        header
    )
}

#[test]
fn test_unknown_variant() {
    let result = it8::load(b"XYZZ\nCOLOR_REP \"RGB_XYZ\"\n");
    assert_eq!(result, Err(LoadError::UnknownVariant("XYZZ".to_string())));
}

#[test]
fn test_unknown_variant_fixture() {
    let data = std::fs::read(testdata_dir().join("unknown_sheet.txt")).unwrap();
    assert!(matches!(
        it8::load(&data),
        Err(LoadError::UnknownVariant(tag)) if tag == "XYZZ"
    ));
}

#[test]
fn test_two_token_luminance() {
    let text = target_with_header(
        "COLOR_REP \"RGB_XYZ\"\nNORMALIZED_TO_Y_100 \"YES\"\nLUMINANCE_XYZ_CDM2 \"1.0 2.0\"",
    );
    assert_eq!(
        it8::load(text.as_bytes()),
        Err(LoadError::InvalidLuminance(Some("1.0 2.0".to_string())))
    );
}

#[test]
fn test_non_numeric_luminance() {
    let text = target_with_header(
        "COLOR_REP \"RGB_XYZ\"\nNORMALIZED_TO_Y_100 \"YES\"\nLUMINANCE_XYZ_CDM2 \"1.0 bright 3.0\"",
    );
    assert!(matches!(
        it8::load(text.as_bytes()),
        Err(LoadError::InvalidLuminance(Some(_)))
    ));
}

#[test]
fn test_luminance_ignored_when_not_normalized() {
    let text = target_with_header(
        "COLOR_REP \"RGB_XYZ\"\nNORMALIZED_TO_Y_100 \"NO\"\nLUMINANCE_XYZ_CDM2 \"garbage\"",
    );
    let doc = it8::load(text.as_bytes()).unwrap();
    assert!(!doc.normalized());
    assert_eq!(doc.sample_at(0).unwrap().xyz.y, 100.0);
}

#[test]
fn test_missing_color_rep() {
    let text = target_with_header("DESCRIPTOR \"no color rep\"");
    assert_eq!(
        it8::load(text.as_bytes()),
        Err(LoadError::InvalidColorRepresentation {
            expected: "RGB_XYZ",
            found: None,
        })
    );
}

#[test]
fn test_color_rep_is_case_sensitive() {
    let text = target_with_header("COLOR_REP \"rgb_xyz\"");
    assert!(matches!(
        it8::load(text.as_bytes()),
        Err(LoadError::InvalidColorRepresentation { .. })
    ));
}

#[test]
fn test_malformed_input() {
    assert_eq!(it8::load(b""), Err(LoadError::Malformed(CgatsError::Empty)));
    assert!(matches!(
        it8::load(b"CTI3\nBEGIN_DATA\n1 2 3\n"),
        Err(LoadError::Malformed(CgatsError::UnterminatedSection { .. }))
    ));
    assert!(matches!(
        it8::load(&[0x43, 0x54, 0x49, 0x33, 0x0a, 0xc3, 0x28]),
        Err(LoadError::Malformed(CgatsError::Encoding { .. }))
    ));
}

#[test]
fn test_non_numeric_cell() {
    let text = "CTI3\nCOLOR_REP \"RGB_XYZ\"\nNUMBER_OF_FIELDS 7\nBEGIN_DATA_FORMAT\n\
                SAMPLE_ID RGB_R RGB_G RGB_B XYZ_X XYZ_Y XYZ_Z\nEND_DATA_FORMAT\n\
                NUMBER_OF_SETS 1\nBEGIN_DATA\nA1 1 1 1 95 lots 108\nEND_DATA\n";
    assert_eq!(
        it8::load(text.as_bytes()),
        Err(LoadError::Malformed(CgatsError::InvalidNumber {
            row: 0,
            col: 5,
            text: "lots".to_string(),
        }))
    );
}

#[test]
fn test_incomplete_matrix() {
    let text = "CCMX\nCOLOR_REP \"XYZ\"\nNUMBER_OF_FIELDS 3\nBEGIN_DATA_FORMAT\n\
                XYZ_X XYZ_Y XYZ_Z\nEND_DATA_FORMAT\nNUMBER_OF_SETS 3\nBEGIN_DATA\n\
                1 0 0\n0 1 0\nEND_DATA\n";
    assert_eq!(
        it8::load(text.as_bytes()),
        Err(LoadError::Malformed(CgatsError::RowOutOfRange { row: 2, count: 2 }))
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        LoadError::UnknownVariant("XYZZ".to_string()).to_string(),
        "Invalid sheet type: XYZZ"
    );
    assert_eq!(
        LoadError::InvalidLuminance(Some("1.0 2.0".to_string())).to_string(),
        "LUMINANCE_XYZ_CDM2 format invalid: 1.0 2.0"
    );
    assert_eq!(
        LoadError::InvalidColorRepresentation {
            expected: "XYZ",
            found: None
        }
        .to_string(),
        "Invalid data format: expected XYZ, got nothing"
    );

    let doc = Document::new(oxit8_core::It8Kind::Ti1);
    let err = doc.sample_at(0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Sample index 0 out of range (document has 0 samples)"
    );
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "device unplugged"))
    }
}

#[test]
fn test_reader_failure_is_io_error() {
    assert!(matches!(
        Document::from_reader(FailingReader),
        Err(Error::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe
    ));
}

#[test]
fn test_load_error_converts() {
    assert!(matches!(
        Document::load(b"XYZZ\n"),
        Err(Error::Load(LoadError::UnknownVariant(_)))
    ));
}

#[test]
fn test_bad_set_count() {
    let text = "CTI1\nCOLOR_REP \"RGB_XYZ\"\nNUMBER_OF_SETS \"many\"\n";
    assert_eq!(
        it8::load(text.as_bytes()),
        Err(LoadError::InvalidSetCount("many".to_string()))
    );

    // With a data block the tokenizer rejects the count first
    let text = "CTI1\nCOLOR_REP \"RGB_XYZ\"\nNUMBER_OF_FIELDS 7\nBEGIN_DATA_FORMAT\n\
                SAMPLE_ID RGB_R RGB_G RGB_B XYZ_X XYZ_Y XYZ_Z\nEND_DATA_FORMAT\n\
                NUMBER_OF_SETS -1\nBEGIN_DATA\n1 0 0 0 0 0 0\nEND_DATA\n";
    assert!(matches!(
        it8::load(text.as_bytes()),
        Err(LoadError::Malformed(CgatsError::InvalidProperty { .. }))
    ));
}

#[test]
fn test_more_rows_than_declared() {
    let text = "CTI1\nCOLOR_REP \"RGB_XYZ\"\nNUMBER_OF_FIELDS 7\nBEGIN_DATA_FORMAT\n\
                SAMPLE_ID RGB_R RGB_G RGB_B XYZ_X XYZ_Y XYZ_Z\nEND_DATA_FORMAT\n\
                NUMBER_OF_SETS 1\nBEGIN_DATA\n1 0 0 0 0 0 0\n2 1 1 1 1 1 1\nEND_DATA\n";
    assert_eq!(
        it8::load(text.as_bytes()),
        Err(LoadError::Malformed(CgatsError::TooManySets {
            declared: 1,
            found: 2,
        }))
    );
}
