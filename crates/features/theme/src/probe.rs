/// OS-level "prefers dark color scheme" signal.
///
/// Only consulted when no preference has been stored yet.
pub trait ColorSchemeProbe {
    fn prefers_dark(&self) -> bool;
}

impl<F> ColorSchemeProbe for F
where
    F: Fn() -> bool,
{
    fn prefers_dark(&self) -> bool {
        self()
    }
}
