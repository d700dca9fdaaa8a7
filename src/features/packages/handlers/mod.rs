mod package_handler;

pub use package_handler::*;
