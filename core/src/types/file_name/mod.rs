use nutype::nutype;

pub const MAX_FILE_NAME_LENGTH: usize = 255;

/// A bare file name inside the viewer root. Never a path.
///
/// Separators, NUL and the `.`/`..` segments are rejected at construction,
/// so joining a `FileName` onto the root can never escape it.
#[nutype(
    validate(
        not_empty,
        len_char_max = MAX_FILE_NAME_LENGTH,
        predicate = |name: &str| is_bare_name(name)
    ),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Borrow,
        Display,
    )
)]
pub struct FileName(String);

fn is_bare_name(name: &str) -> bool {
    name != "." && name != ".." && !name.contains(['/', '\\', '\0'])
}
