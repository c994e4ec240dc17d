mod translations;

pub use translations::{dictionary, translate};
