//! Aligned two-column listing of repositories for the selector
//!
//! Lines look like `name<padding>path`. The padding always leaves at least
//! five spaces after the longest name, so splitting on [`COLUMN_SEPARATOR`]
//! recovers the name.

use super::RepositoryEntry;

/// Extra spaces placed after the longest name
pub const MIN_GAP: usize = 5;

/// Separator used to split a selected line back into its name column
pub const COLUMN_SEPARATOR: &str = "    ";

/// Number of spaces between `name` and its path, given the longest name length
pub fn padding(name: &str, longest: usize) -> usize {
    (longest + MIN_GAP).saturating_sub(name.chars().count())
}

/// Render entries as one aligned line each, in input order
pub fn render(entries: &[RepositoryEntry]) -> String {
    let longest = entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut table = String::new();
    for entry in entries {
        table.push_str(&entry.name);
        table.push_str(&" ".repeat(padding(&entry.name, longest)));
        table.push_str(&entry.path.to_string_lossy());
        table.push('\n');
    }

    table
}

/// Extract the repository name from a rendered (selected) line
pub fn parse_name(line: &str) -> &str {
    line.split(COLUMN_SEPARATOR)
        .next()
        .unwrap_or(line)
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<RepositoryEntry> {
        vec![
            RepositoryEntry::new("alpha", "/home/u/code/org/alpha"),
            RepositoryEntry::new("b", "/home/u/code/org2/b"),
        ]
    }

    #[test]
    fn test_render_example() {
        let table = render(&sample());
        assert_eq!(
            table,
            "alpha     /home/u/code/org/alpha\nb         /home/u/code/org2/b\n"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_path_column_aligned() {
        let entries = vec![
            RepositoryEntry::new("x", "/c/x"),
            RepositoryEntry::new("medium-name", "/c/g/medium-name"),
            RepositoryEntry::new("naïve", "/c/naïve"),
            RepositoryEntry::new("a-much-longer-name", "/c/a-much-longer-name"),
        ];
        let expected = "a-much-longer-name".len() + MIN_GAP;

        for line in render(&entries).lines() {
            let name_len = line.split(' ').next().unwrap().chars().count();
            let gap = line.chars().skip(name_len).take_while(|c| *c == ' ').count();
            assert_eq!(name_len + gap, expected, "misaligned line: {line:?}");
        }
    }

    #[test]
    fn test_parse_round_trip() {
        let entries = vec![
            RepositoryEntry::new("alpha", "/home/u/code/org/alpha"),
            RepositoryEntry::new("with space", "/home/u/code/org/with space"),
            RepositoryEntry::new("b", "/home/u/code/org2/b"),
            RepositoryEntry::new("longest-of-them-all", "/x/longest-of-them-all"),
        ];
        let table = render(&entries);
        let names: Vec<&str> = table.lines().map(parse_name).collect();
        let expected: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        assert_eq!(parse_name("  alpha     /home/u/code/org/alpha  \n"), "alpha");
    }

    #[test]
    fn test_parse_without_separator() {
        assert_eq!(parse_name("  lonely  "), "lonely");
        assert_eq!(parse_name(""), "");
    }

    #[test]
    fn test_padding() {
        assert_eq!(padding("alpha", 5), 5);
        assert_eq!(padding("b", 5), 9);
    }
}
