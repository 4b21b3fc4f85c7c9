//! PEP 503 package name normalization.

/// Normalizes a display name into the directory segment used by the index.
///
/// Lowercases the whole string, then maps every `_` and `.` to `-`. Runs of
/// separators are kept as-is and the result is not checked for path safety.
///
/// # Examples
///
/// - `normalize("Foo_Bar.Baz")` → `"foo-bar-baz"`
/// - `normalize("My_Pkg")` → `"my-pkg"`
pub fn normalize(name: &str) -> String {
    name.to_lowercase().replace('_', "-").replace('.', "-")
}
