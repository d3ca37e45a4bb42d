pub mod contact;
pub mod error_pages;
pub mod health;
pub mod home;
pub mod resume;
