pub mod error;
pub mod logger;
pub mod paths;
pub mod text;
pub mod validation;
