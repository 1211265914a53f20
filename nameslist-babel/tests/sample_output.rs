//! Serializing the sample NamesList file through the registry

use nameslist_babel::{FormatError, FormatRegistry};
use nameslist_parser::nameslist::parse_str;
use nameslist_parser::nameslist::testing::fixtures;
use rstest::rstest;

fn sample_xml() -> String {
    let doc = parse_str(&fixtures::load("sample.txt")).unwrap();
    FormatRegistry::default().serialize(&doc, "xml").unwrap()
}

#[test]
fn test_xml_frame() {
    let xml = sample_xml();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<ucd>\n"));
    assert!(xml.ends_with("</ucd>\n"));
    assert_eq!(xml.matches("<block_header ").count(), 4);
    assert_eq!(xml.matches("</block_header>").count(), 4);
}

#[rstest]
#[case("\t<title>The Unicode Standard 15.0</title>\n")]
#[case("\t<subtitle>U150M220805.lst</subtitle>\n")]
#[case("\t\t<block_subheader name=\"C0 controls\">\n")]
#[case("\t\t\t<notice_line>Alias names are those for ISO/IEC 6429:1992.</notice_line>\n")]
#[case("\t\t\t<notice_line with_asterisk=\"Y\">Based on ISO/IEC 646.</notice_line>\n")]
#[case("\t\t\t\t<alias_line name=\"NULL\"/>\n")]
#[case("\t\t\t\t<formalalias_line name=\"ALERT\"/>\n")]
#[case("\t\t\t\t<cross_ref ref=\"no-break space - 00A0\"/>\n")]
#[case("\t\t\t\t<comment_line content=\"sometimes considered a control code\"/>\n")]
#[case("\t\t\t<compat_mapping compat=\"&lt;noBreak&gt; 0020\"/>\n")]
#[case("\t\t\t<decomposition decomp=\"0041 0300\"/>\n")]
#[case("\t\t\t<variation_line variation=\"0030 FE00 short diagonal stroke form\"/>\n")]
#[case("\t\t<char_entry code_point=\"FFFF\" type=\"not a character\"/>\n")]
fn test_xml_contains(#[case] expected: &str) {
    let xml = sample_xml();
    assert!(xml.contains(expected), "missing {:?} in\n{}", expected, xml);
}

#[test]
fn test_subheaders_close_after_their_entries() {
    let xml = sample_xml();
    let c0 = xml.find("<block_subheader name=\"C0 controls\">").unwrap();
    let bell = xml.find("code_point=\"0007\"").unwrap();
    let punct = xml.find("<block_subheader name=\"ASCII punctuation and symbols\">").unwrap();
    assert!(c0 < bell && bell < punct);
}

#[test]
fn test_every_format_serializes_the_sample() {
    let doc = parse_str(&fixtures::load("sample.txt")).unwrap();
    let registry = FormatRegistry::default();
    for name in registry.list_formats() {
        let output = registry.serialize(&doc, &name).unwrap();
        assert!(!output.is_empty(), "{} produced nothing", name);
    }
}

#[test]
fn test_unknown_format() {
    let doc = parse_str("").unwrap();
    assert_eq!(
        FormatRegistry::default().serialize(&doc, "yaml"),
        Err(FormatError::FormatNotFound("yaml".to_string()))
    );
}
