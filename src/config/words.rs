use std::path::Path;

use crate::error::Result;

/// Split a user-supplied word list. Commas separate entries when present,
/// otherwise whitespace does. Entries are trimmed and blanks dropped.
pub fn parse_word_list(input: &str) -> Vec<String> {
    let parts: Vec<&str> = if input.contains(',') {
        input.split(',').collect()
    } else {
        input.split_whitespace().collect()
    };
    parts
        .into_iter()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect()
}

/// Read one pattern per line. Blank lines and `#` comments are skipped.
pub fn load_words_file(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)?;
    let mut words = Vec::new();
    for (line_num, line) in contents.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('#') {
            tracing::trace!("skipping comment on line {} of {}", line_num + 1, path.display());
            continue;
        }
        words.push(trimmed.to_string());
    }
    tracing::debug!(count = words.len(), "loaded words from {}", path.display());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_separated() {
        assert_eq!(
            parse_word_list("bad word, worse ,,worst"),
            vec!["bad word", "worse", "worst"]
        );
    }

    #[test]
    fn test_whitespace_separated() {
        assert_eq!(parse_word_list("  小狼 开心\t快乐 "), vec!["小狼", "开心", "快乐"]);
    }

    #[test]
    fn test_blank_input() {
        assert!(parse_word_list("   ").is_empty());
        assert!(parse_word_list(",,").is_empty());
    }
}
