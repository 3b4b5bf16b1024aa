pub mod climate;
pub mod crop;
pub mod results;
pub mod season;
pub mod soil;

pub use climate::*;
pub use crop::*;
pub use results::*;
pub use season::*;
pub use soil::*;
