pub mod reported;
pub mod traits;

pub use reported::PositionReport;
pub use traits::PositionSource;
