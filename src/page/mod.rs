pub mod advice;
pub mod theme;
