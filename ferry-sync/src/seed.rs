//! Sample input generation
//!
//! Writes a well-formed batch-input file into the source directory so a
//! fresh deployment has something to submit. Each line is one request in
//! the format the batch service expects.

use std::fs;
use std::io;
use std::path::Path;

/// Writes `count` sample request lines to `path`.
///
/// Every line is a standalone JSON object with a unique `custom_id`, ready
/// to be uploaded as-is.
pub fn write_sample_file(path: &Path, model: &str, count: usize) -> io::Result<()> {
    let lines: Vec<String> = (1..=count)
        .map(|i| {
            serde_json::json!({
                "custom_id": format!("request-{i}"),
                "method": "POST",
                "url": "/v1/chat/completions",
                "body": {
                    "model": model,
                    "messages": [
                        { "role": "system", "content": "You are a helpful assistant." },
                        { "role": "user", "content": "Hello world!" }
                    ],
                    "max_tokens": 1000
                }
            })
            .to_string()
        })
        .collect();

    fs::write(path, lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sample_file_has_one_valid_request_per_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.jsonl");

        write_sample_file(&path, "gpt-4o-mini", 3).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);

        for (i, line) in lines.iter().enumerate() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["custom_id"], format!("request-{}", i + 1));
            assert_eq!(value["method"], "POST");
            assert_eq!(value["body"]["model"], "gpt-4o-mini");
        }
    }
}
