#[test]
fn macros_expand_and_compile() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/*.rs");
}
