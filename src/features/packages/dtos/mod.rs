mod package_dto;

pub use package_dto::PackageResponseDto;
