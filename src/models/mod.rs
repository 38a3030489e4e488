pub mod location;
pub mod record;
pub mod sample;
pub mod summary;
pub mod table;

pub use location::*;
pub use record::*;
pub use sample::*;
pub use summary::*;
pub use table::*;
