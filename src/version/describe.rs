//! Tag-describe output formatting.
//!
//! `git describe --tags` prints `<tag>-<distance>-g<hash>`; the version keeps
//! the last two hyphen-separated parts joined by an underscore, which is the
//! same shape a packaged build gets from its describe number.

use super::resolution::FallbackReason;

/// Turn tag-describe output into a version string.
///
/// Only the first line is considered. Fewer than two hyphen-separated parts
/// is an error, as is empty output.
pub fn format_describe(output: &str) -> Result<String, FallbackReason> {
    let first = match output.lines().next() {
        Some(line) => line.trim_end_matches(['\r', '\n']),
        None => return Err(FallbackReason::NoDescribeOutput),
    };

    let parts: Vec<&str> = first.split('-').collect();
    if parts.len() < 2 {
        return Err(FallbackReason::MalformedDescribe {
            output: first.to_string(),
        });
    }

    let n = parts.len();
    Ok(format!("{}_{}", parts[n - 2], parts[n - 1]))
}
