mod bbox;
mod coordinates;
mod macros;
mod multi_polygon;
mod polygon;
mod ring;
mod traits;

pub use bbox::*;
pub use coordinates::*;
pub use multi_polygon::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
