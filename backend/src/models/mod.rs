pub mod planet;

pub use planet::*;
