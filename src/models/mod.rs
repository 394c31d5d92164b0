mod kind;
mod options;

pub use kind::PathKind;
pub use options::TruffulaOptions;
