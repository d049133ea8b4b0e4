#[cfg(test)]
pub mod impl_fake;
pub mod impl_image;
pub mod interface;
