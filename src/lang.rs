//! String helpers shared with the hashing callers: slugs for file names and splitting repository URLs.

/// Accented Latin-1 ranges and their ASCII replacement. The first matching range wins, so the wide `c` range
/// also swallows `Ñ` before its own entry is reached.
const SLUG_TABLE: [(char, char, char); 13] = [
    ('\u{C0}', '\u{C6}', 'A'),
    ('\u{E0}', '\u{E6}', 'a'),
    ('\u{C8}', '\u{CB}', 'E'),
    ('\u{E8}', '\u{EB}', 'e'),
    ('\u{CC}', '\u{CF}', 'I'),
    ('\u{EC}', '\u{EF}', 'i'),
    ('\u{D2}', '\u{D6}', 'O'),
    ('\u{F2}', '\u{F6}', 'o'),
    ('\u{D9}', '\u{DC}', 'U'),
    ('\u{F9}', '\u{FC}', 'u'),
    ('\u{C7}', '\u{E7}', 'c'),
    ('\u{D1}', '\u{D1}', 'N'),
    ('\u{F1}', '\u{F1}', 'n'),
];

/// Scheme prefix of repository URLs.
const PROTOCOL_PREFIX: &str = "ajxp.";

fn fold_accent(c: char) -> char {
    SLUG_TABLE
        .iter()
        .find(|(first, last, _)| (*first..=*last).contains(&c))
        .map_or(c, |(_, _, replacement)| *replacement)
}

/// Turn ``value`` into a lowercase, dash separated slug of `[a-z0-9-]`.
///
/// ```
/// assert_eq!(webhash::lang::compute_string_slug("Résumé  Final (v2)"), "resume-final-v2");
/// ```
pub fn compute_string_slug(value: &str) -> String {
    let lowered = value.chars().map(fold_accent).collect::<String>().to_lowercase();

    let mut slug = String::with_capacity(lowered.len());
    let mut in_whitespace = false;
    for c in lowered.chars() {
        let c = if is_js_space(c) {
            if in_whitespace {
                continue;
            }
            in_whitespace = true;
            '-'
        } else {
            in_whitespace = false;
            c
        };

        if c == '-' {
            if !slug.ends_with('-') {
                slug.push(c);
            }
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
        }
    }
    slug
}

/// A repository URL split into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedUrl {
    /// the complete matched text
    pub url: String,
    /// `ajxp.<scheme>`, or empty when the URL has none
    pub protocol: String,
    pub host: String,
    /// from the first `/` after the host through the last `/` of the directory run
    pub path: String,
    pub file: String,
    /// Always empty: a `#fragment` stays part of ``file``.
    pub hash: String,
}

/// Whitespace as matched by `\s` in the legacy client's patterns: no NEL, but the byte order mark.
fn is_js_space(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Split ``data`` into `[ajxp.<scheme>:/]/?<host>/<dir>/.../<file>`. Returns `None` when ``data`` is not shaped
/// like that in its entirety.
pub fn parse_url(data: &str) -> Option<ParsedUrl> {
    split_protocol(data)
        .and_then(|(protocol, rest)| parse_location(data, protocol, rest))
        .or_else(|| parse_location(data, "", data))
}

/// Find every repository URL in ``text``, at most one per line, each starting at the leftmost position that
/// parses and running to the end of its line.
pub fn parse_urls(text: &str) -> Vec<ParsedUrl> {
    text.split(is_line_break)
        .filter_map(|line| {
            line.char_indices()
                .find_map(|(start, _)| parse_url(&line[start..]))
        })
        .collect()
}

fn split_protocol(data: &str) -> Option<(&str, &str)> {
    if !data.starts_with(PROTOCOL_PREFIX) {
        return None;
    }

    let scheme_length = data[PROTOCOL_PREFIX.len()..]
        .bytes()
        .take_while(|b| is_word_byte(*b))
        .count();
    if scheme_length == 0 {
        return None;
    }

    let protocol_end = PROTOCOL_PREFIX.len() + scheme_length;
    if data[protocol_end..].starts_with(":/") {
        Some((&data[..protocol_end], &data[protocol_end + 2..]))
    } else {
        None
    }
}

fn parse_location(url: &str, protocol: &str, rest: &str) -> Option<ParsedUrl> {
    let rest = if rest.starts_with('/') { &rest[1..] } else { rest };

    let host_length = rest
        .find(|c: char| c == ':' || c == '/' || is_js_space(c))
        .unwrap_or_else(|| rest.len());
    if host_length == 0 || !rest[host_length..].starts_with('/') {
        return None;
    }
    let (host, rest) = rest.split_at(host_length);

    // longest run of `/word` segments that is closed by another `/`
    let bytes = rest.as_bytes();
    let mut path_length = 1;
    let mut segment_start = 0;
    loop {
        let word_length = bytes[segment_start + 1..]
            .iter()
            .take_while(|b| is_word_byte(**b))
            .count();
        let segment_end = segment_start + 1 + word_length;
        if word_length == 0 || bytes.get(segment_end) != Some(&b'/') {
            break;
        }
        path_length = segment_end + 1;
        segment_start = segment_end;
    }
    let (path, file) = rest.split_at(path_length);

    if file.contains(is_line_break) {
        return None;
    }

    Some(ParsedUrl {
        url: url.to_string(),
        protocol: protocol.to_string(),
        host: host.to_string(),
        path: path.to_string(),
        file: file.to_string(),
        hash: String::new(),
    })
}
