use marktide_engine::{Options, to_html};

#[test]
fn snapshot_sectioned_document() {
    let source = "\
# Guide

intro ^^text^^

## First

alpha

## First

beta
";
    let html = to_html(source, &Options::default()).unwrap();
    insta::assert_snapshot!("sectioned_document", html);
}

#[test]
fn snapshot_lone_markers() {
    let html = to_html("^^^^^^^hey^^^^^^^", &Options::default()).unwrap();
    insta::assert_snapshot!("lone_markers", html);
}

#[test]
fn snapshot_escaping() {
    let html = to_html("a < b ^^& c^^", &Options::default()).unwrap();
    insta::assert_snapshot!("escaping", html);
}
