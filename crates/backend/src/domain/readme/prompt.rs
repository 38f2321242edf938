//! Prompt assembly for the summarization call

use super::source::SourceFile;

/// System prompt for the summarization model.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that summarizes code repositories.";

/// The quoted sources are capped so the request stays well inside the
/// model's context window.
const MAX_COMBINED_CHARS: usize = 120_000;

/// Quote the selected files and wrap them in the generation instruction.
pub fn build_user_prompt(files: &[SourceFile]) -> String {
    let mut combined = String::new();
    for file in files {
        let entry = format!("Filename: {}\nContent:\n{}\n\n", file.path, file.content);
        if combined.len() + entry.len() > MAX_COMBINED_CHARS {
            break;
        }
        combined.push_str(&entry);
    }

    format!(
        "Based on the following repository contents, generate a clear, concise README \
         that explains the purpose, structure, and usage of the repository.\n\n{combined}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, content: &str) -> SourceFile {
        SourceFile {
            path: path.to_owned(),
            content: content.to_owned(),
        }
    }

    #[test]
    fn quotes_each_file_with_its_name() {
        let prompt = build_user_prompt(&[
            file("src/main.rs", "fn main() {}"),
            file("README.md", "# old"),
        ]);
        assert!(prompt.contains("Filename: src/main.rs\nContent:\nfn main() {}"));
        assert!(prompt.contains("Filename: README.md"));
        assert!(prompt.starts_with("Based on the following repository contents"));
    }

    #[test]
    fn stops_quoting_at_the_size_cap() {
        let big = "x".repeat(MAX_COMBINED_CHARS);
        let prompt = build_user_prompt(&[file("small.rs", "fn a() {}"), file("big.rs", &big)]);
        assert!(prompt.contains("Filename: small.rs"));
        assert!(!prompt.contains("Filename: big.rs"));
    }
}
