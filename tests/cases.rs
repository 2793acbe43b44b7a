use std::fs;

use keypad::calculate;
use walkdir::WalkDir;

/// Every `.calc` file under `tests/cases` holds lines of the form
/// `expression => expected display`. Lines starting with `#` are comments.
#[test]
fn case_files_evaluate_as_listed() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (expression, expected)) in extract_cases(&content).into_iter().enumerate() {
            count += 1;
            let actual = calculate(expression);
            assert_eq!(actual,
                       expected,
                       "case {} in {:?} ({}) produced {} instead of {}",
                       i + 1,
                       path,
                       expression,
                       actual,
                       expected);
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn extract_cases(content: &str) -> Vec<(&str, &str)> {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .filter_map(|line| line.split_once("=>"))
           .map(|(expression, expected)| (expression.trim(), expected.trim()))
           .collect()
}
