pub mod f32;
pub mod io;
pub mod mask;
pub mod rgb;
pub mod traits;

pub use self::f32::ImageF32;
pub use self::mask::Mask;
pub use self::rgb::{ImageRgbF32, Rgb};
pub use self::traits::{ImageView, Rows};
