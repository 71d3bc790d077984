pub mod brand;
pub mod image_upload;
pub mod measurement;
pub mod recommendation;
pub mod timestamp;
pub mod user;

pub use brand::*;
pub use image_upload::*;
pub use measurement::*;
pub use recommendation::*;
pub use user::*;
