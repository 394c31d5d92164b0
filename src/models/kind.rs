/// What a probed path turned out to be. Symlinks are followed before
/// classification, so a link to a directory reports `Directory`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PathKind {
    Directory,
    File,
    Other,
}
