pub mod detect;
pub mod detector;
