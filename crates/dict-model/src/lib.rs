pub mod error;
pub mod language;
pub mod proxy;
pub mod translation;

pub use error::*;
pub use language::*;
pub use proxy::*;
pub use translation::*;
