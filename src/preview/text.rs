use super::ELLIPSIS;

/// Collapses whitespace the way previews need it.
///
/// Runs of three or more newlines first shrink to two; any remaining run of
/// two or more whitespace characters then becomes a single space. A lone
/// whitespace character is left untouched, so single line breaks survive.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if !c.is_whitespace() {
            out.push(c);
            continue;
        }

        let mut run = 1;
        while chars.next_if(|next| next.is_whitespace()).is_some() {
            run += 1;
        }

        // A shrunk newline run is still two characters long, so both rules
        // together leave a single space for every run longer than one.
        if run == 1 {
            out.push(c);
        } else {
            out.push(' ');
        }
    }

    out
}

/// Cuts `text` to `max_length` characters and appends [`ELLIPSIS`] when
/// anything was cut.
///
/// Whitespace left dangling at the cut is dropped before the marker, so the
/// visible prefix can be shorter than `max_length`: `("abc def", 4)` gives
/// `"abc..."`, not `"abc ..."`.
pub fn truncate_with_ellipsis(text: &str, max_length: usize) -> String {
    match text.char_indices().nth(max_length) {
        None => text.to_string(),
        Some((cut, _)) => {
            let mut preview = text[..cut].trim_end().to_string();
            preview.push_str(ELLIPSIS);
            preview
        }
    }
}
