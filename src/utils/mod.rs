pub mod error_helpers;
