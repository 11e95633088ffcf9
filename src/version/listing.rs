//! Package-listing parsing.

/// Find the version of `package` in a package manager listing.
///
/// Each line is split on whitespace; the first line whose first token is
/// exactly `package` yields its second token. Lines with a matching name but
/// no version column are skipped.
pub fn find_package_version(listing: &str, package: &str) -> Option<String> {
    listing.lines().find_map(|line| {
        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next()) {
            (Some(name), Some(version)) if name == package => Some(version.to_string()),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONDA_LIST: &str = "\
# packages in environment at /opt/conda/envs/robot:
#
# Name                    Version                   Build  Channel
numpy                     1.26.4          py310hb13e2d6_0    conda-forge
polymetis-examples        0.9.0                    py_0    local
polymetis                 1.2.3           py310_5_g0d3f1e2    local
polymetis                 9.9.9                    py_0    local
";

    #[test]
    fn finds_exact_package_name() {
        assert_eq!(
            find_package_version(CONDA_LIST, "polymetis"),
            Some("1.2.3".to_string())
        );
    }

    #[test]
    fn prefix_matches_are_ignored() {
        assert_eq!(
            find_package_version(CONDA_LIST, "polymetis-examples"),
            Some("0.9.0".to_string())
        );
        assert_eq!(find_package_version(CONDA_LIST, "polymet"), None);
    }

    #[test]
    fn missing_package_is_none() {
        assert_eq!(find_package_version(CONDA_LIST, "torch"), None);
    }

    #[test]
    fn comments_never_match() {
        assert_eq!(find_package_version("# polymetis 1.0.0\n", "polymetis"), None);
        assert_eq!(find_package_version(CONDA_LIST, "Name"), None);
    }

    #[test]
    fn name_without_version_is_skipped() {
        let listing = "polymetis\npolymetis 2.0.0 py_0\n";
        assert_eq!(
            find_package_version(listing, "polymetis"),
            Some("2.0.0".to_string())
        );
    }

    #[test]
    fn tabs_separate_fields() {
        assert_eq!(
            find_package_version("polymetis\t1.2.3\tpy_0\n", "polymetis"),
            Some("1.2.3".to_string())
        );
    }

    #[test]
    fn empty_listing() {
        assert_eq!(find_package_version("", "polymetis"), None);
    }
}
