pub mod numeric;

pub use numeric::ScalarNumeric;
