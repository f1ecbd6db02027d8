// Client Service — Username and password policy
//
// Pure predicates, no I/O. The rule set is the public contract for account
// creation; the exact bounds (3, 8, 20) are pinned by tests below.

/// Minimum username length. There is no upper bound.
pub const USERNAME_MIN_LEN: usize = 3;

/// Inclusive password length bounds, counted in characters.
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 20;

/// Characters that satisfy the "special character" requirement.
/// `–` is U+2013 EN DASH, not the ASCII hyphen. Square brackets are not in the set.
pub const PASSWORD_SPECIAL_CHARS: &[char] = &[
    '!', '@', '#', '&', '(', ')', '–', '{', '}', ':', ';', '\'', ',', '?', '/', '*', '~', '$',
    '^', '+', '=', '<', '>',
];

fn is_username_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}

/// Letters, digits, `.`, `_` and `-` only, at least three of them.
pub fn is_valid_username(username: &str) -> bool {
    username.chars().count() >= USERNAME_MIN_LEN && username.chars().all(is_username_char)
}

/// 8 to 20 characters on a single line, with at least one digit, one
/// lowercase letter, one uppercase letter and one special character.
pub fn is_valid_password(password: &str) -> bool {
    let len = password.chars().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        return false;
    }
    if password.chars().any(is_line_terminator) {
        return false;
    }

    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_special = password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(&c));

    has_digit && has_lower && has_upper && has_special
}

// ─── Tests ───────────────────────────────────────────────────────────────────
