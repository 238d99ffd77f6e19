//! Benchmarks for document segmentation.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use docshape::{
    parse_document, ContentSchema, LineSchema, NodeSchema, Paragraph, ParseSchema, SectionSchema,
    StyleTag,
};

/// A document with `sections` top-level sections, each holding a two-level
/// tree of `nodes` nodes with a few content lines apiece.
fn synthetic_document(sections: usize, nodes: usize) -> (Vec<Paragraph>, ParseSchema) {
    let mut schema = ParseSchema::new();
    let mut paragraphs = Vec::new();

    for s in 0..sections {
        let name = format!("Section {s}");
        schema = schema.with_section(
            SectionSchema::new(&name, StyleTag::Heading1).with_content(ContentSchema::tree(
                NodeSchema::new(StyleTag::Heading2).with_child(NodeSchema::new(StyleTag::Heading3)),
            )),
        );

        paragraphs.push(Paragraph::heading(name, StyleTag::Heading1));
        for n in 0..nodes {
            paragraphs.push(Paragraph::heading(format!("Node {n}"), StyleTag::Heading2));
            paragraphs.push(Paragraph::heading("Detail", StyleTag::Heading3));
            paragraphs.push(Paragraph::with_text("alpha, beta, gamma"));
            paragraphs.push(Paragraph::with_text("one more content line"));
        }
    }
    (paragraphs, schema)
}

fn flat_list_document(lines: usize) -> (Vec<Paragraph>, ParseSchema) {
    let schema = ParseSchema::new().with_section(
        SectionSchema::new("Skills", StyleTag::Heading2)
            .with_content(ContentSchema::list(LineSchema::new().flattened())),
    );
    let mut paragraphs = vec![Paragraph::heading("Skills", StyleTag::Heading2)];
    for i in 0..lines {
        paragraphs.push(Paragraph::with_text(format!("skill-{i}, tool-{i}")));
    }
    (paragraphs, schema)
}

fn bench_tree_parse(c: &mut Criterion) {
    let (paragraphs, schema) = synthetic_document(8, 50);
    c.bench_function("tree_8_sections_50_nodes", |b| {
        b.iter(|| parse_document(black_box(&paragraphs), black_box(&schema)))
    });
}

fn bench_list_parse(c: &mut Criterion) {
    let (paragraphs, schema) = flat_list_document(2000);
    c.bench_function("flat_list_2000_lines", |b| {
        b.iter(|| parse_document(black_box(&paragraphs), black_box(&schema)))
    });
}

criterion_group!(benches, bench_tree_parse, bench_list_parse);
criterion_main!(benches);
