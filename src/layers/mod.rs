pub mod image;
pub mod marker;
pub mod pins;
