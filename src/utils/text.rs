/// Human-readable name for a material URL.
///
/// `https://cdn/1741735085446-lab_04_Pointers.pdf` becomes `lab 04 Pointers`:
/// upload timestamp prefix and extension are dropped, underscores become spaces.
pub fn extract_file_name(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let raw = path.rsplit('/').next().unwrap_or(path);
    let decoded = urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string());

    let without_prefix = match decoded.split_once('-') {
        Some((prefix, rest)) if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) => rest,
        _ => decoded.as_str(),
    };
    let without_ext = match without_prefix.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() => stem,
        _ => without_prefix,
    };

    let name = without_ext.replace('_', " ");
    if name.trim().is_empty() {
        "Material".to_string()
    } else {
        name
    }
}

/// Case-insensitive substring match; an empty query matches everything.
pub fn matches_search(haystack: Option<&str>, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    haystack
        .unwrap_or_default()
        .to_lowercase()
        .contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_timestamp_extension_and_underscores() {
        assert_eq!(
            extract_file_name("https://cdn.example.edu/uploads/1741735085446-lab_04_Pointers.pdf"),
            "lab 04 Pointers"
        );
    }

    #[test]
    fn keeps_non_numeric_prefix() {
        assert_eq!(extract_file_name("files/week3-notes.pdf"), "week3-notes");
    }

    #[test]
    fn empty_url_gets_placeholder() {
        assert_eq!(extract_file_name(""), "Material");
        assert_eq!(extract_file_name("https://cdn.example.edu/"), "Material");
    }

    #[test]
    fn search_is_case_insensitive() {
        assert!(matches_search(Some("Final Exam 2023"), "exam"));
        assert!(!matches_search(Some("Quiz"), "exam"));
        assert!(matches_search(None, ""));
        assert!(!matches_search(None, "exam"));
    }
}
