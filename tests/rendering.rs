use doc_builder::demos::{self, custom, technical_report};
use doc_builder::{Document, DocumentBuilder, Flavor, HtmlDocumentBuilder, FOOTNOTE_SEPARATOR};

fn lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

#[test]
fn parts_render_in_call_order_without_footnote_block() {
    let mut document = Document::new();
    let parts = ["alpha", "beta", "", "gamma delta"];
    for part in parts {
        document.add_part(part);
    }

    let rendered = document.render();
    assert_eq!(lines(&rendered), parts);
    assert!(rendered.ends_with('\n'));
    assert!(!rendered.contains(FOOTNOTE_SEPARATOR));
}

#[test]
fn footnotes_are_numbered_in_insertion_order() {
    let mut builder = HtmlDocumentBuilder::new();
    for note in ["a", "b", "c"] {
        builder.add_footnote(note);
    }

    let rendered = builder.get_document().render();
    let separator = rendered
        .find(FOOTNOTE_SEPARATOR)
        .expect("separator present");
    let tail = lines(&rendered[separator..]);
    assert_eq!(
        tail,
        [
            FOOTNOTE_SEPARATOR,
            "[1] <small>a</small>",
            "[2] <small>b</small>",
            "[3] <small>c</small>",
        ]
    );
}

#[test]
fn directed_report_orders_content_before_footnotes() {
    let document = technical_report::build(&mut HtmlDocumentBuilder::new());
    let rendered = document.render();

    let expected_order = [
        "<h1>Технічний звіт</h1>",
        "<p>Це вступна секція технічного документа.</p>",
        HtmlDocumentBuilder::FOOTNOTE_MARKER,
        "<p>Опис основної архітектури системи.</p>",
        "<h1>Висновок</h1>",
        "<p>Система працює стабільно.</p>",
        FOOTNOTE_SEPARATOR,
        "[1] <small>Дані взяті з відкритих джерел.</small>",
    ];

    let mut cursor = 0;
    for fragment in expected_order {
        let found = rendered[cursor..]
            .find(fragment)
            .unwrap_or_else(|| panic!("missing or out of order: {fragment}"));
        cursor += found + fragment.len();
    }
}

#[test]
fn every_flavor_resets_between_documents() {
    for flavor in Flavor::ALL {
        let mut builder = flavor.builder();
        let report = technical_report::build(builder.as_mut());
        let custom = custom::build(builder.as_mut());
        let empty = builder.get_document();

        assert_eq!(report.parts().len(), 6, "{flavor}");
        assert_eq!(custom.parts().len(), 3, "{flavor}");
        assert_eq!(custom.footnotes().len(), 1, "{flavor}");
        assert_eq!(empty.render(), "", "{flavor}");
    }
}

#[test]
fn demo_output_matches_console_layout() {
    let mut out = Vec::new();
    demos::run_all_demos(Flavor::Markdown, &mut out).expect("write demo output");
    let text = String::from_utf8(out).expect("utf-8 output");

    let expected = "Generating Document...\n\
                    # Технічний звіт\n\
                    Це вступна секція технічного документа.\n\
                    [^1]\n\
                    Опис основної архітектури системи.\n\
                    # Висновок\n\
                    Система працює стабільно.\n\
                    \n\
                    --- ВИНОСКИ ---\n\
                    [1] Дані взяті з відкритих джерел.\n\
                    \n\
                    \n\
                    Generating Custom Document...\n\
                    # Мій власний документ\n\
                    Довільний текст секції.\n\
                    [^1]\n\
                    \n\
                    --- ВИНОСКИ ---\n\
                    [1] Примітка автора.\n\
                    \n";
    assert_eq!(text, expected);
}
