pub mod project_dto;
pub mod service_dto;
pub mod staff_dto;
pub mod vacancy_dto;
