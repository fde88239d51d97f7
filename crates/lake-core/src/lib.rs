pub mod background;
pub mod config;
pub mod constants;
pub mod error;
pub mod fade;
pub mod field;
pub mod pointer;
pub mod ripple;
pub mod surface;

pub use background::*;
pub use config::*;
pub use error::*;
pub use fade::*;
pub use field::*;
pub use pointer::*;
pub use ripple::*;
pub use surface::*;
