//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Reads and inserts are plain
//! queries; updates and deletes go through [`crate::mutation`].

pub mod certification_repo;
pub mod miniature_paint_repo;
pub mod miniature_project_repo;
pub mod miniature_technique_repo;
pub mod miniature_theme_repo;
pub mod portfolio_project_repo;
pub mod profile_repo;
pub mod skill_repo;
pub mod skill_type_repo;
pub mod storage_file_repo;
pub mod work_experience_repo;

pub use certification_repo::CertificationRepo;
pub use miniature_paint_repo::MiniaturePaintRepo;
pub use miniature_project_repo::MiniatureProjectRepo;
pub use miniature_technique_repo::MiniatureTechniqueRepo;
pub use miniature_theme_repo::MiniatureThemeRepo;
pub use portfolio_project_repo::PortfolioProjectRepo;
pub use profile_repo::ProfileRepo;
pub use skill_repo::SkillRepo;
pub use skill_type_repo::SkillTypeRepo;
pub use storage_file_repo::StorageFileRepo;
pub use work_experience_repo::WorkExperienceRepo;
