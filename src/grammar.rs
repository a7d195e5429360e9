mod notation;
mod symbol;

pub use notation::Notation;
pub use symbol::Symbol;
