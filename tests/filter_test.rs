//! Integration tests running pandoc JSON documents through the filters.

use panlatex::model::{Block, Inline, MetaValue};
use panlatex::{
    filter_str, json, run_filter, IdentityFilter, JsonFormat, MintedFilter, MintedOptions,
    PrettyTablesFilter,
};
use serde_json::Value;

const ATTR: &str = r#"["",[],[]]"#;

fn cell(text: &str) -> String {
    format!(
        r#"[{ATTR},{{"t":"AlignDefault"}},1,1,[{{"t":"Plain","c":[{{"t":"Str","c":"{text}"}}]}}]]"#
    )
}

fn row(cells: &[&str]) -> String {
    let cells = cells.iter().map(|c| cell(c)).collect::<Vec<_>>().join(",");
    format!("[{ATTR},[{cells}]]")
}

fn table(caption: &str) -> String {
    let caption = if caption.is_empty() {
        "[null,[]]".to_string()
    } else {
        format!(r#"[null,[{{"t":"Plain","c":[{{"t":"Str","c":"{caption}"}}]}}]]"#)
    };
    format!(
        r#"{{"t":"Table","c":[{ATTR},{caption},[[{{"t":"AlignLeft"}},{{"t":"ColWidth","c":0.6}}],[{{"t":"AlignRight"}},{{"t":"ColWidth","c":0.4}}]],[{ATTR},[{head}]],[[{ATTR},0,[],[{body}]]],[{ATTR},[]]]}}"#,
        head = row(&["Name", "Value"]),
        body = row(&["x", "1"]),
    )
}

fn document(meta: &str, blocks: &[String]) -> String {
    format!(
        r#"{{"pandoc-api-version":[1,23,1],"meta":{{{meta}}},"blocks":[{}]}}"#,
        blocks.join(",")
    )
}

/// Concatenated text of every raw and plain inline of a paragraph.
fn para_text(block: &Block) -> String {
    match block {
        Block::Para(inlines) => inlines
            .iter()
            .map(|inline| match inline {
                Inline::RawInline(_, text) => text.clone(),
                other => other.plain_text(),
            })
            .collect(),
        other => panic!("expected a paragraph, got {:?}", other),
    }
}

#[test]
fn test_identity_preserves_tree() {
    let input = document(
        r#""title":{"t":"MetaInlines","c":[{"t":"Str","c":"Report"}]}"#,
        &[
            r#"{"t":"Header","c":[1,["intro",[],[]],[{"t":"Str","c":"Intro"}]]}"#.to_string(),
            r#"{"t":"Para","c":[{"t":"Emph","c":[{"t":"Str","c":"a"}]},{"t":"Space"},{"t":"Math","c":[{"t":"InlineMath"},"x^2"]}]}"#.to_string(),
            r#"{"t":"BulletList","c":[[{"t":"Plain","c":[{"t":"Str","c":"one"}]}]]}"#.to_string(),
            table("Results"),
        ],
    );

    let output = filter_str(&mut IdentityFilter, "latex", &input).unwrap();
    let expected: Value = serde_json::from_str(&input).unwrap();
    let actual: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(actual, expected);
}

#[test]
fn test_filters_ignore_other_formats() {
    let input = document(
        "",
        &[
            r#"{"t":"CodeBlock","c":[["",["python"],[]],"print(1)"]}"#.to_string(),
            table("Results"),
        ],
    );
    let expected: Value = serde_json::from_str(&input).unwrap();

    for format in ["html", "markdown", "beamer", ""] {
        let tables = filter_str(&mut PrettyTablesFilter::default(), format, &input).unwrap();
        let minted = filter_str(&mut MintedFilter::default(), format, &input).unwrap();
        assert_eq!(serde_json::from_str::<Value>(&tables).unwrap(), expected);
        assert_eq!(serde_json::from_str::<Value>(&minted).unwrap(), expected);
    }
}

#[test]
fn test_minted_code_block() {
    let input = document(
        "",
        &[r#"{"t":"CodeBlock","c":[["",["python"],[["caption","Example"]]],"print(1)"]}"#.to_string()],
    );

    let output = filter_str(&mut MintedFilter::default(), "latex", &input).unwrap();
    let doc = json::from_str(&output).unwrap();
    assert_eq!(
        doc.blocks,
        vec![Block::raw(
            "latex",
            "\n\\begin{listing}\n\\begin{minted}[]{python}\nprint(1)\n\\end{minted}\n\\caption{Example}\n\\label{}\n\\end{listing}\n"
        )]
    );
}

#[test]
fn test_minted_nested_inline_code() {
    let input = document(
        "",
        &[r#"{"t":"BlockQuote","c":[{"t":"Para","c":[{"t":"Str","c":"Call"},{"t":"Space"},{"t":"Code","c":[["",["c"],[]],"main()"]}]}]}"#.to_string()],
    );

    let mut filter = MintedFilter::new(MintedOptions::new());
    let doc = json::from_str(&filter_str(&mut filter, "latex", &input).unwrap()).unwrap();
    match &doc.blocks[0] {
        Block::BlockQuote(blocks) => match &blocks[0] {
            Block::Para(inlines) => {
                assert_eq!(inlines[0], Inline::str("Call"));
                assert_eq!(inlines[2], Inline::raw("latex", "\\mintinline[]{c}{main()}"));
            }
            other => panic!("expected a paragraph, got {:?}", other),
        },
        other => panic!("expected a block quote, got {:?}", other),
    }
}

#[test]
fn test_pretty_table_replaced_by_float() {
    let input = document(
        "",
        &[
            r#"{"t":"Para","c":[{"t":"Str","c":"Before"}]}"#.to_string(),
            table("Results"),
            r#"{"t":"Para","c":[{"t":"Str","c":"After"}]}"#.to_string(),
        ],
    );

    let output = filter_str(&mut PrettyTablesFilter::default(), "latex", &input).unwrap();
    let doc = json::from_str(&output).unwrap();

    assert_eq!(doc.blocks.len(), 10);
    assert_eq!(doc.blocks[0], Block::para_text("Before"));
    assert_eq!(doc.blocks[1], Block::raw("latex", "\\begin{table}[h]"));
    assert_eq!(
        para_text(&doc.blocks[4]),
        "\\hline\n\\textbf{Name} & \\textbf{Value} \\\\\n\\hline\\hline"
    );
    assert_eq!(para_text(&doc.blocks[5]), "x & 1 \\\\\n\\hline\n");
    assert_eq!(para_text(&doc.blocks[7]), "\\caption{Results}");
    assert_eq!(doc.blocks[8], Block::raw("latex", "\\end{table}"));
    assert_eq!(doc.blocks[9], Block::para_text("After"));
}

#[test]
fn test_uncaptioned_table_left_alone() {
    let input = document("", &[table("")]);
    let output = filter_str(&mut PrettyTablesFilter::default(), "latex", &input).unwrap();
    assert_eq!(
        serde_json::from_str::<Value>(&output).unwrap(),
        serde_json::from_str::<Value>(&input).unwrap()
    );
}

#[test]
fn test_metadata_table_left_alone() {
    let meta = format!(r#""extra":{{"t":"MetaBlocks","c":[{}]}}"#, table(""));
    let input = document(&meta, &[table("Results")]);

    let output = filter_str(&mut PrettyTablesFilter::default(), "latex", &input).unwrap();
    let doc = json::from_str(&output).unwrap();

    match doc.meta.get("extra") {
        Some(MetaValue::MetaBlocks(blocks)) => assert!(matches!(blocks[0], Block::Table(_))),
        other => panic!("expected metadata blocks, got {:?}", other),
    }
    assert!(!doc.blocks.iter().any(|b| matches!(b, Block::Table(_))));
}

#[test]
fn test_unsupported_cell_content_fails() {
    let bad_cell = format!(r#"[{ATTR},{{"t":"AlignDefault"}},1,1,[{{"t":"CodeBlock","c":[{ATTR},"x"]}}]]"#);
    let table = table("Results").replace(&cell("x"), &bad_cell);
    let input = document("", &[table]);

    let mut output = Vec::new();
    let result = run_filter(
        &mut PrettyTablesFilter::default(),
        "latex",
        input.as_bytes(),
        &mut output,
        JsonFormat::Compact,
    );
    assert!(matches!(
        result,
        Err(panlatex::Error::UnsupportedNode { found: "CodeBlock", .. })
    ));
    assert!(output.is_empty());
}

#[test]
fn test_malformed_json_fails() {
    let result = filter_str(&mut IdentityFilter, "latex", r#"{"blocks":[{"t":"Nope"}]}"#);
    assert!(matches!(result, Err(panlatex::Error::Json(_))));
}

#[test]
fn test_pretty_output_decodes_to_same_tree() {
    let input = document("", &[table("Results")]);
    let mut output = Vec::new();
    run_filter(
        &mut IdentityFilter,
        "latex",
        input.as_bytes(),
        &mut output,
        JsonFormat::Pretty,
    )
    .unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("\n  "));
    assert_eq!(
        serde_json::from_str::<Value>(&text).unwrap(),
        serde_json::from_str::<Value>(&input).unwrap()
    );
}

#[test]
fn test_run_filter_file_channels() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("doc.json");
    let output_path = dir.path().join("filtered.json");
    std::fs::write(&input_path, document("", &[table("Results")])).unwrap();

    let reader = std::fs::File::open(&input_path).unwrap();
    let writer = std::fs::File::create(&output_path).unwrap();
    run_filter(
        &mut PrettyTablesFilter::default(),
        "latex",
        reader,
        writer,
        JsonFormat::Compact,
    )
    .unwrap();

    let doc = json::from_reader(std::fs::File::open(&output_path).unwrap()).unwrap();
    assert_eq!(doc.blocks.len(), 8);
    assert!(doc.blocks.iter().all(|b| !matches!(b, Block::Table(_))));
}
