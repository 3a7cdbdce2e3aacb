//! Parsing of the status reports printed by the libsmbios tools.

use crate::ModeId;

/// Find the current mode in a tool report.
///
/// The status block starts at the first line that begins with `marker`
/// (case-insensitive, leading whitespace ignored) and carries a `:`; banner
/// text merely mentioning the marker does not count. The block holds the
/// text after that `:` plus the following run of non-empty lines.
/// The first entry in the block that names one of `modes` wins.
pub(crate) fn parse_current_mode(report: &str, marker: &str, modes: &[ModeId]) -> Option<ModeId> {
    let marker = marker.to_lowercase();
    let mut lines = report.lines();

    let header = lines.by_ref().find(|line| {
        let line = line.trim_start().to_lowercase();
        line.starts_with(&marker) && line.contains(':')
    })?;
    let inline = header.split_once(':').map_or("", |(_, rest)| rest).trim();

    let block = lines
        .map(str::trim)
        .skip_while(|line| line.is_empty())
        .take_while(|line| !line.is_empty());

    std::iter::once(inline)
        .filter(|line| !line.is_empty())
        .chain(block)
        .find_map(|candidate| {
            let wanted = normalize(candidate);
            modes
                .iter()
                .find(|mode| normalize(mode.as_str()) == wanted)
                .cloned()
        })
}

// Tools print "Cool Bottom" for the token "cool-bottom".
fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            ' ' | '_' => '-',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}
