mod cat;

pub use cat::{Cat, CatFields};
