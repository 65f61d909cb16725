//! Reusable presentation components shared by all screens.

pub mod primary_button;

pub use primary_button::PrimaryButton;
