#[inline]
pub fn is_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
pub fn is_numeric(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub fn is_alphanumeric(c: char) -> bool {
    is_alphabetic(c) || is_numeric(c)
}
