//! Character classes scanned by the case style automata.
//!
//! ## Notes
//! - Letter case follows Unicode (`char::is_lowercase` / `char::is_uppercase`), so `é` is a lowercase letter and
//!   `Ö` an uppercase one.
//! - Caseless letters (e.g. CJK ideographs), digits and titlecase letters all land in [`CharClass::Other`].

/// Classify a single character for case style scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lower,
    Upper,
    Underscore,
    Dash,
    Other,
}

impl CharClass {
    /// Classify `c`.
    ///
    /// ## Examples
    /// ```rust
    /// use stylesniffer_core::CharClass;
    ///
    /// assert_eq!(CharClass::of('a'), CharClass::Lower);
    /// assert_eq!(CharClass::of('Z'), CharClass::Upper);
    /// assert_eq!(CharClass::of('_'), CharClass::Underscore);
    /// assert_eq!(CharClass::of('-'), CharClass::Dash);
    /// assert_eq!(CharClass::of('7'), CharClass::Other);
    /// ```
    pub fn of(c: char) -> Self {
        match c {
            '_' => CharClass::Underscore,
            '-' => CharClass::Dash,
            c if c.is_lowercase() => CharClass::Lower,
            c if c.is_uppercase() => CharClass::Upper,
            _ => CharClass::Other,
        }
    }
}

/// Iterate over the classes of every character in `input`, in order.
pub fn classes(input: &str) -> impl Iterator<Item = CharClass> + '_ {
    input.chars().map(CharClass::of)
}
