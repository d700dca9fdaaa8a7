mod package;

pub use package::Package;
