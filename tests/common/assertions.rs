//! Assertions over `key=value` pipeline files.

use tracing::error;

/// Assert `key=value` pipeline lines appear in order.
pub fn assert_pipeline_lines(contents: &str, expected: &[(&str, &str)]) {
    let lines: Vec<&str> = contents.lines().collect();
    let mut cursor = 0;
    for (key, value) in expected {
        let line = format!("{key}={value}");
        match lines[cursor..].iter().position(|l| *l == line) {
            Some(offset) => cursor += offset + 1,
            None => {
                error!(line, "Missing or out-of-order pipeline line");
                panic!("Missing pipeline line {line:?} in:\n{contents}");
            }
        }
    }
}

#[allow(dead_code)] // integration target only
pub fn assert_no_pipeline_key(contents: &str, key: &str) {
    let prefix = format!("{key}=");
    if contents.lines().any(|l| l.starts_with(&prefix)) {
        error!(key, "Unexpected pipeline key");
        panic!("Unexpected pipeline key {key} in:\n{contents}");
    }
}
