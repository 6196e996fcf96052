/// What a load found at the source path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The snapshot was read and replaced the store. Carries the entry count.
    Loaded(usize),
    /// No file at the path; the store was left untouched.
    Missing,
}
