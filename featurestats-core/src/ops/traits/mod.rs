pub mod numeric;

pub use numeric::{MinMaxElement, StatFloat};
