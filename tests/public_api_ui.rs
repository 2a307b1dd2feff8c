#[test]
fn public_api_ui() {
    let testcases = trybuild::TestCases::new();
    testcases.pass("tests/ui/public_api/pass.rs");
}
