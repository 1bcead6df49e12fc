/// End-to-end conversion of XML text through the quick-xml front end.
use sax2json_core::{convert_reader, convert_str, convert_with_stats, encode, ConvertError, ConvertOptions, Node};

fn convert(xml: &str) -> String {
    encode(&convert_str(xml, &ConvertOptions::default()).unwrap()).unwrap()
}

fn convert_strings(xml: &str) -> String {
    let options = ConvertOptions::default().with_primitives(false);
    encode(&convert_str(xml, &options).unwrap()).unwrap()
}

const NOTE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<note>
  <to>Tove</to>
  <from>Jani</from>
  <heading>Reminder</heading>
  <body>Don't forget me this weekend!</body>
</note>
"#;

const CATALOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<CATALOG>
  <CD>
    <TITLE>Empire Burlesque</TITLE>
    <ARTIST>Bob Dylan</ARTIST>
    <COUNTRY>USA</COUNTRY>
    <COMPANY>Columbia</COMPANY>
    <PRICE>10.90</PRICE>
    <YEAR>1985</YEAR>
  </CD>
  <CD>
    <TITLE>Hide your heart</TITLE>
    <ARTIST>Bonnie Tyler</ARTIST>
    <COUNTRY>UK</COUNTRY>
    <COMPANY>CBS Records</COMPANY>
    <PRICE>9.90</PRICE>
    <YEAR>1988</YEAR>
  </CD>
</CATALOG>
"#;

// ============================================================================
// Documents
// ============================================================================

#[test]
fn one_node_document() {
    assert_eq!(
        convert(NOTE),
        r#"{"note":{"to":"Tove","from":"Jani","heading":"Reminder","body":"Don't forget me this weekend!"}}"#
    );
}

#[test]
fn catalog_with_number_conversion() {
    assert_eq!(
        convert(CATALOG),
        concat!(
            r#"{"CATALOG":{"CD":["#,
            r#"{"TITLE":"Empire Burlesque","ARTIST":"Bob Dylan","COUNTRY":"USA","COMPANY":"Columbia","PRICE":10.90,"YEAR":1985},"#,
            r#"{"TITLE":"Hide your heart","ARTIST":"Bonnie Tyler","COUNTRY":"UK","COMPANY":"CBS Records","PRICE":9.90,"YEAR":1988}"#,
            r#"]}}"#
        )
    );
}

#[test]
fn catalog_without_number_conversion() {
    assert_eq!(
        convert_strings(CATALOG),
        concat!(
            r#"{"CATALOG":{"CD":["#,
            r#"{"TITLE":"Empire Burlesque","ARTIST":"Bob Dylan","COUNTRY":"USA","COMPANY":"Columbia","PRICE":"10.90","YEAR":"1985"},"#,
            r#"{"TITLE":"Hide your heart","ARTIST":"Bonnie Tyler","COUNTRY":"UK","COMPANY":"CBS Records","PRICE":"9.90","YEAR":"1988"}"#,
            r#"]}}"#
        )
    );
}

#[test]
fn attributes_and_text() {
    assert_eq!(convert(r#"<note id="7">hi</note>"#), r#"{"note":{"text":"hi","id":7}}"#);
}

#[test]
fn attributes_with_prefix_and_custom_value_key() {
    let options = ConvertOptions::default()
        .with_attribute_prefix("-")
        .with_value_key("$");
    let root = convert_str(r#"<price currency="EUR">9.90</price>"#, &options).unwrap();
    assert_eq!(encode(&root).unwrap(), r#"{"price":{"$":9.90,"-currency":"EUR"}}"#);
}

#[test]
fn self_closing_elements() {
    assert_eq!(convert("<r><a/><b x=\"1\"/></r>"), r#"{"r":{"a":null,"b":{"x":1}}}"#);
}

#[test]
fn entities_are_unescaped() {
    assert_eq!(
        convert(r#"<r a="&lt;1&gt;">Tom &amp; Jerry</r>"#),
        r#"{"r":{"text":"Tom & Jerry","a":"<1>"}}"#
    );
}

#[test]
fn cdata_is_text() {
    assert_eq!(convert("<r><![CDATA[<raw> & 42]]></r>"), r#"{"r":"<raw> & 42"}"#);
}

#[test]
fn cdata_joins_with_text() {
    assert_eq!(convert("<n>1<![CDATA[2]]>3</n>"), r#"{"n":123}"#);
}

#[test]
fn comments_and_processing_instructions_are_skipped() {
    assert_eq!(
        convert("<?xml version=\"1.0\"?><!-- top --><r><?pi data?><a>1</a><!-- c --></r>"),
        r#"{"r":{"a":1}}"#
    );
}

#[test]
fn qualified_names_are_kept_verbatim() {
    assert_eq!(
        convert(r#"<ns:r xmlns:ns="urn:x"><ns:a>v</ns:a></ns:r>"#),
        r#"{"ns:r":{"ns:a":"v","xmlns:ns":"urn:x"}}"#
    );
}

#[test]
fn big_numbers_survive_exactly() {
    assert_eq!(
        convert("<r><i>123456789012345678901234567890</i><d>0.000000000000000000001</d></r>"),
        r#"{"r":{"i":123456789012345678901234567890,"d":0.000000000000000000001}}"#
    );
}

#[test]
fn empty_input_is_an_empty_object() {
    assert_eq!(convert(""), "{}");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn mixed_content_is_rejected() {
    let err = convert_str("<p>lead <b>bold</b> tail</p>", &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, ConvertError::MixedContent { ref element } if element == "p"));
}

#[test]
fn mixed_content_text_after_child_is_rejected() {
    let err = convert_str("<p><b>bold</b> tail</p>", &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, ConvertError::MixedContent { ref element } if element == "p"));
}

#[test]
fn mismatched_tags_fail() {
    assert!(convert_str("<a><b></a></b>", &ConvertOptions::default()).is_err());
}

#[test]
fn unclosed_document_fails() {
    let err = convert_str("<a><b>x</b>", &ConvertOptions::default()).unwrap_err();
    assert!(
        matches!(err, ConvertError::UnbalancedStructure(_) | ConvertError::Xml { .. }),
        "unexpected error: {err:?}"
    );
}

#[test]
fn unknown_entity_is_an_xml_error() {
    let err = convert_str("<a>&nbsp;</a>", &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, ConvertError::Xml { .. }), "unexpected error: {err:?}");
}

// ============================================================================
// Reader variants
// ============================================================================

#[test]
fn convert_reader_accepts_buffered_input() {
    let cursor = std::io::Cursor::new(NOTE.as_bytes().to_vec());
    let root = convert_reader(cursor, &ConvertOptions::default()).unwrap();
    assert_eq!(root.get("note").and_then(|n| n.get("to")), Some(&Node::from("Tove")));
}

#[test]
fn convert_with_stats_reports_counts() {
    let (root, stats) = convert_with_stats(CATALOG.as_bytes(), &ConvertOptions::default()).unwrap();
    assert!(root.get("CATALOG").is_some());
    assert_eq!(stats.elements, 1 + 2 + 12);
    assert_eq!(stats.attributes, 0);
    assert_eq!(stats.max_depth, 3);
}
