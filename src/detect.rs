// third-party imports
use memchr::memchr;

// ---

const BACKSLASH: u8 = b'\\';
const OPEN_PAREN: u8 = b'(';
const CLOSE_PAREN: u8 = b')';

/// Reports whether `text` contains an extglob token.
///
/// An extglob token is one of `?(`, `@(`, `!(`, `+(` or `*(` that is not
/// escaped by a backslash and is followed by a `)` anywhere later in the text.
/// Parentheses are not checked for balance, the first `)` after the opening one suffices.
///
/// # Examples
///
/// ```
/// use extglob::is_extglob;
///
/// assert!(is_extglob("?(abc)"));
/// assert!(is_extglob("xyz/!(abc)/xyz"));
/// assert!(!is_extglob("**/*.js"));
/// assert!(!is_extglob(r"\?(abc)"));
/// ```
#[inline]
pub fn is_extglob(text: &str) -> bool {
    let text = text.as_bytes();
    if text.is_empty() || !has_candidates_bytes(text) {
        return false;
    }

    scan(text)
}

/// Reports whether `text` contains any of the extglob prefix characters `@?!+*`.
///
/// This is a cheap precheck: `false` guarantees that [`is_extglob`] is `false` as well,
/// `true` means nothing.
#[inline]
pub fn has_candidates(text: &str) -> bool {
    has_candidates_bytes(text.as_bytes())
}

#[inline]
fn has_candidates_bytes(text: &[u8]) -> bool {
    text.iter().copied().any(is_prefix)
}

#[inline(always)]
fn is_prefix(b: u8) -> bool {
    matches!(b, b'@' | b'?' | b'!' | b'+' | b'*')
}

fn scan(text: &[u8]) -> bool {
    let mut i = 0;
    while i < text.len() {
        let b = text[i];
        if b == BACKSLASH {
            i += 2;
            continue;
        }

        if is_prefix(b) && text.get(i + 1) == Some(&OPEN_PAREN) {
            // any later candidate would search a suffix of the same range
            return memchr(CLOSE_PAREN, &text[i + 2..]).is_some();
        }

        i += 1;
    }

    false
}
