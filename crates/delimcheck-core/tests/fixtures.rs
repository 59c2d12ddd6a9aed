use delimcheck_core::{Config, scan_source};
use std::fs;
use std::path::Path;

fn test_fixture(name: &str) {
    let fixtures_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let input_path = fixtures_dir.join(format!("{name}.src"));
    let expected_path = fixtures_dir.join(format!("{name}.expected"));

    let input = fs::read_to_string(&input_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", input_path.display()));
    let expected = fs::read_to_string(&expected_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", expected_path.display()));

    let config = Config::default();
    let report = scan_source(&input, &config).to_string();

    assert_eq!(
        report,
        expected.trim_end(),
        "Fixture {name} did not match expected report"
    );
}

macro_rules! fixture_tests {
    ($($name:ident),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                test_fixture(stringify!($name));
            }
        )*
    };
}

fixture_tests!(
    balanced,
    empty,
    unmatched_closer,
    mismatched_closer,
    unclosed_openers,
    strings_and_comments,
);
