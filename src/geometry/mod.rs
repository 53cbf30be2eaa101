pub mod airfoil;
pub mod composition;
pub mod section;
pub mod surface;
pub mod trapezoid;


pub use airfoil::Airfoil;
pub use composition::Geometry;
pub use section::{Section, Spacing};
pub use surface::Surface;
pub use trapezoid::{SurfaceBuilder, TrapezoidalLiftingSurface};
