use crate::error::Result;

use super::row::DisplayRow;

/// Options for plain-text output
#[derive(Debug, Clone)]
pub struct TextOptions {
    /// Keep HTML entities in padding instead of decoding them
    pub raw: bool,
    /// Show leaf ids after the name
    pub show_ids: bool,
    /// Print decoration fields after the name
    pub show_extra: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            raw: false,
            show_ids: true,
            show_extra: false,
        }
    }
}

impl TextOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    pub fn with_ids(mut self, show: bool) -> Self {
        self.show_ids = show;
        self
    }

    pub fn with_extra(mut self, show: bool) -> Self {
        self.show_extra = show;
        self
    }
}

/// Format rows as JSON
pub fn format_json(rows: &[DisplayRow], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(rows)?
    } else {
        serde_json::to_string(rows)?
    };
    Ok(json)
}

/// Format rows one per line
pub fn format_text(rows: &[DisplayRow], options: &TextOptions) -> String {
    let mut output = String::new();

    for row in rows {
        let padding = if options.raw {
            row.padding.clone()
        } else {
            decode_entities(&row.padding)
        };

        output.push_str(&padding);
        output.push_str(&row.name);

        if row.is_category {
            output.push('/');
        } else if let (true, Some(id)) = (options.show_ids, row.id) {
            output.push_str(&format!(" [{}]", id));
        }

        if options.show_extra && !row.extra.is_empty() {
            let fields: Vec<String> = row
                .extra
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            output.push_str(&format!("  ({})", fields.join(", ")));
        }

        output.push('\n');
    }

    output
}

/// Decode the HTML entities used by padding strings.
///
/// `&nbsp;` becomes a plain space so terminal columns line up. Unknown
/// entities are left as written.
pub fn decode_entities(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('&') {
        output.push_str(&rest[..start]);
        let tail = &rest[start..];

        let decoded = tail
            .find(';')
            .filter(|&end| end <= 10)
            .and_then(|end| decode_entity(&tail[1..end]).map(|c| (c, end)));

        match decoded {
            Some((c, end)) => {
                output.push(c);
                rest = &tail[end + 1..];
            }
            None => {
                output.push('&');
                rest = &tail[1..];
            }
        }
    }

    output.push_str(rest);
    output
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "nbsp" => Some(' '),
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value)
        }
    }
}
