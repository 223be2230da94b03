//! End-to-end dispatch tests against the real worker binary.
//!
//! Cargo builds the worker before running these, so the binary path comes
//! from `CARGO_BIN_EXE_crucible-worker` rather than discovery.

use crucible_core::{Dispatcher, Disposition, Language};

fn dispatcher() -> Dispatcher {
    Dispatcher::new().with_worker_path(env!("CARGO_BIN_EXE_crucible-worker"))
}

#[tokio::test]
async fn markdown_resolves_with_html() {
    let output = dispatcher().run("markdown", "# Hi").await;
    assert!(output.contains("<h1>Hi</h1>"), "unexpected output: {output:?}");
}

#[tokio::test]
async fn isolated_path_matches_direct_compile() {
    let source = "## Title\n\nSome *emphasis* here.";
    let direct = Language::Markdown.compile(source).unwrap();
    let isolated = dispatcher().run("markdown", source).await;
    assert_eq!(isolated, direct);
}

#[tokio::test]
async fn scss_resolves_with_flattened_css() {
    let output = dispatcher().run("scss", "a { b { color: red; } }").await;
    assert!(output.contains("a b"), "nesting not flattened: {output:?}");
}

#[tokio::test]
async fn unknown_language_resolves_empty() {
    let outcome = dispatcher().dispatch("doesNotExist", "x").await;
    assert_eq!(outcome.output, "");
    assert_eq!(outcome.disposition, Disposition::Silent);
}

#[tokio::test]
async fn table_only_dialect_resolves_empty() {
    // `less` sits in the registry tables with no compiler registered; it
    // takes the same silent path as an unknown key.
    let output = dispatcher().run("less", ".a { .b; }").await;
    assert_eq!(output, "");
}

#[tokio::test]
async fn compile_failure_folds_to_empty() {
    let outcome = dispatcher().dispatch("scss", "a { color: ").await;
    assert_eq!(outcome.output, "");
    assert_eq!(outcome.disposition, Disposition::CompileFailed);
}

#[tokio::test]
async fn compile_failure_is_transparent_on_the_direct_path() {
    // Same malformed source: the direct path rejects where the isolated
    // path degraded to an empty string above.
    assert!(Language::Scss.compile("a { color: ").is_err());
}

#[tokio::test]
async fn concurrent_runs_do_not_cross_contaminate() {
    let dispatcher = dispatcher();
    let (html, css) = tokio::join!(
        dispatcher.run("markdown", "# One"),
        dispatcher.run("scss", "a { b { color: red; } }"),
    );

    assert!(html.contains("<h1>One</h1>"), "got: {html:?}");
    assert!(css.contains("a b"), "got: {css:?}");
    assert!(!html.contains("color"), "css leaked into html: {html:?}");
    assert!(!css.contains("<h1>"), "html leaked into css: {css:?}");
}

#[tokio::test]
async fn empty_source_resolves_with_empty_output() {
    let outcome = dispatcher().dispatch("markdown", "").await;
    assert_eq!(outcome.output, "");
    // The worker did reply; the compiler just had nothing to say.
    assert_eq!(outcome.disposition, Disposition::Completed);
}
