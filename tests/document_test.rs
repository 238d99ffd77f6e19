//! End-to-end tests for the document driver.

use docshape::{
    normalize, parse_document, to_json, ContentSchema, JsonFormat, LineSchema, LineValue,
    NodeSchema, Paragraph, ParseSchema, RawBlock, SectionSchema, SectionValue, StyleTag,
};

/// A resume-shaped schema exercising all three strategies.
fn resume_schema() -> ParseSchema {
    ParseSchema::new()
        .with_section(SectionSchema::new("Summary", StyleTag::Heading1))
        .with_section(
            SectionSchema::new("Skills", StyleTag::Heading2)
                .with_content(ContentSchema::list(LineSchema::new().flattened())),
        )
        .with_section(
            SectionSchema::new("Experience", StyleTag::Heading2).with_content(
                ContentSchema::tree(
                    NodeSchema::new(StyleTag::Heading3)
                        .with_child(NodeSchema::new(StyleTag::Heading4)),
                ),
            ),
        )
}

fn resume_paragraphs() -> Vec<Paragraph> {
    vec![
        Paragraph::heading("My Resume", StyleTag::Title),
        Paragraph::heading("Summary", StyleTag::Heading1),
        Paragraph::with_text("Systems engineer."),
        Paragraph::with_text("Based in Berlin."),
        Paragraph::heading("Skills", StyleTag::Heading2),
        Paragraph::with_text("Rust, Go"),
        Paragraph::with_text("SQL"),
        Paragraph::heading("Experience", StyleTag::Heading2),
        Paragraph::heading("Google", StyleTag::Heading3),
        Paragraph::heading("Search", StyleTag::Heading4),
        Paragraph::with_text("Ranking infrastructure."),
        Paragraph::heading("Maps", StyleTag::Heading4),
        Paragraph::heading("Sandbox Co", StyleTag::Heading3),
    ]
}

#[test]
fn test_full_document_parse() {
    let doc = parse_document(&resume_paragraphs(), &resume_schema());

    assert_eq!(doc.len(), 3);
    assert_eq!(
        doc.get("Summary"),
        Some(&SectionValue::Text(
            "Systems engineer. Based in Berlin.".into()
        ))
    );
    assert_eq!(
        doc.get("Skills"),
        Some(&SectionValue::List(vec![
            LineValue::text("Rust"),
            LineValue::text("Go"),
            LineValue::text("SQL"),
        ]))
    );
    match doc.get("Experience") {
        Some(SectionValue::Tree(nodes)) => {
            assert_eq!(nodes.len(), 2);
            assert_eq!(nodes[0].title.as_text(), Some("Google"));
            assert_eq!(nodes[0].children().count(), 2);
            assert_eq!(nodes[1].title.as_text(), Some("Sandbox Co"));
            assert!(nodes[1].content.is_empty());
        }
        other => panic!("expected tree, got {other:?}"),
    }
}

#[test]
fn test_parse_is_deterministic() {
    let paragraphs = resume_paragraphs();
    let schema = resume_schema();

    let first = parse_document(&paragraphs, &schema);
    let second = parse_document(&paragraphs, &schema);
    assert_eq!(first, second);
    assert_eq!(
        to_json(&first, JsonFormat::Compact).unwrap(),
        to_json(&second, JsonFormat::Compact).unwrap()
    );
}

#[test]
fn test_last_write_wins_on_repeated_section() {
    let schema =
        ParseSchema::new().with_section(SectionSchema::new("Summary", StyleTag::Heading1));
    let paragraphs = vec![
        Paragraph::heading("Summary", StyleTag::Heading1),
        Paragraph::with_text("first version"),
        Paragraph::heading("SUMMARY", StyleTag::Heading1),
        Paragraph::with_text("second version"),
    ];

    let doc = parse_document(&paragraphs, &schema);
    assert_eq!(doc.len(), 1);
    assert_eq!(
        doc.get("Summary"),
        Some(&SectionValue::Text("second version".into()))
    );
}

#[test]
fn test_boundary_needs_both_style_and_text() {
    let schema =
        ParseSchema::new().with_section(SectionSchema::new("Summary", StyleTag::Heading1));
    let paragraphs = vec![
        // Right text, wrong style: not a boundary, skipped by the driver
        Paragraph::heading("Summary", StyleTag::Heading2),
        Paragraph::with_text("unreachable"),
    ];

    let doc = parse_document(&paragraphs, &schema);
    assert!(doc.is_empty());
}

#[test]
fn test_section_matched_case_insensitively_keeps_schema_name() {
    let schema =
        ParseSchema::new().with_section(SectionSchema::new("Skills", StyleTag::Heading2));
    let paragraphs = vec![
        Paragraph::heading("  sKiLLs  ", StyleTag::Heading2),
        Paragraph::with_text("Rust"),
    ];

    let doc = parse_document(&paragraphs, &schema);
    assert_eq!(doc.get("Skills"), Some(&SectionValue::Text("Rust".into())));
}

#[test]
fn test_empty_document_and_empty_schema() {
    assert!(parse_document(&[], &resume_schema()).is_empty());
    assert!(parse_document(&resume_paragraphs(), &ParseSchema::new()).is_empty());
}

#[test]
fn test_raw_block_pipeline() {
    let blocks = vec![
        RawBlock::styled("Skills", "HEADING_2"),
        RawBlock {
            text: None,
            style: Some("NORMAL".into()),
        },
        RawBlock::text("Rust, Go"),
        RawBlock::styled("ignored", "UNKNOWN_STYLE"),
    ];
    let schema = ParseSchema::new().with_section(
        SectionSchema::new("Skills", StyleTag::Heading2)
            .with_content(ContentSchema::list(LineSchema::new().flattened())),
    );

    let doc = parse_document(&normalize(&blocks), &schema);
    assert_eq!(
        doc.get("Skills"),
        Some(&SectionValue::List(vec![
            LineValue::text("Rust"),
            LineValue::text("Go"),
            // The unrecognized style is not a heading, so its text is an
            // ordinary list line.
            LineValue::text("ignored"),
        ]))
    );
}

#[test]
fn test_rendered_json_shape() {
    let doc = parse_document(&resume_paragraphs(), &resume_schema());
    let json = to_json(&doc, JsonFormat::Compact).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["Summary"].is_string());
    assert_eq!(value["Skills"], serde_json::json!(["Rust", "Go", "SQL"]));
    assert_eq!(value["Experience"][0]["title"], "Google");
    assert_eq!(
        value["Experience"][0]["content"][0]["title"],
        "Search"
    );
    assert_eq!(
        value["Experience"][0]["content"][0]["content"][0],
        "Ranking infrastructure."
    );
}
