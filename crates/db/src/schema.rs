//! Explicit table declarations driving the generic mutation engines.
//!
//! Every table the engines write to is described here: its name, the label
//! used in errors and logs, the columns a caller may change, and the foreign
//! keys that point at it together with their `ON DELETE` rule. The
//! declarations mirror `db/migrations`; `tests/schema_conformance.rs` keeps
//! the two in lockstep.

/// Columns owned by the store. Never accepted from caller input.
pub const SYSTEM_COLUMNS: [&str; 3] = ["id", "created_at", "updated_at"];

/// What the store does to a referencing row when its target is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnDelete {
    /// The referencing row is deleted with its parent.
    Cascade,
    /// The referencing column is cleared; the row survives.
    SetNull,
    /// The delete is refused while references exist.
    Restrict,
}

impl OnDelete {
    /// The rule as reported by `information_schema.referential_constraints`.
    pub fn delete_rule(self) -> &'static str {
        match self {
            OnDelete::Cascade => "CASCADE",
            OnDelete::SetNull => "SET NULL",
            OnDelete::Restrict => "RESTRICT",
        }
    }
}

/// A foreign key in another table that references this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependent {
    pub table: &'static str,
    pub column: &'static str,
    pub on_delete: OnDelete,
}

const fn dep(table: &'static str, column: &'static str, on_delete: OnDelete) -> Dependent {
    Dependent {
        table,
        column,
        on_delete,
    }
}

/// A table with a `BIGSERIAL id` primary key.
#[derive(Debug)]
pub struct Table {
    pub name: &'static str,
    /// Human-readable entity label used in `NotFound` errors and logs.
    pub entity: &'static str,
    /// Columns a partial update may touch.
    pub columns: &'static [&'static str],
    pub dependents: &'static [Dependent],
}

impl Table {
    /// Whether `column` may be written by a partial update.
    pub fn accepts(&self, column: &str) -> bool {
        !SYSTEM_COLUMNS.contains(&column) && self.columns.contains(&column)
    }
}

/// A junction table pairing a parent with shared reference rows.
#[derive(Debug)]
pub struct LinkTable {
    pub table: &'static str,
    pub parent_table: &'static str,
    pub parent_column: &'static str,
    pub child_table: &'static str,
    pub child_column: &'static str,
    /// Label for the parent entity in errors and logs.
    pub parent_entity: &'static str,
}

/// A table of ordered file attachments scoped to a parent.
#[derive(Debug)]
pub struct AttachmentTable {
    pub table: &'static str,
    pub parent_table: &'static str,
    pub parent_column: &'static str,
    pub file_column: &'static str,
    pub parent_entity: &'static str,
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

/// External asset references. Rows here are never deleted by this service.
pub const STORAGE_FILES: Table = Table {
    name: "storage_files",
    entity: "StorageFile",
    columns: &[],
    dependents: &[
        dep("profile", "avatar_file_id", OnDelete::SetNull),
        dep("profile", "resume_file_id", OnDelete::SetNull),
        dep("portfolio_projects", "image_file_id", OnDelete::SetNull),
        dep("miniature_themes", "cover_image_file_id", OnDelete::SetNull),
        dep("miniature_files", "file_id", OnDelete::Restrict),
    ],
};

// ---------------------------------------------------------------------------
// Portfolio
// ---------------------------------------------------------------------------

/// Singleton row addressed by [`PROFILE_ID`].
pub const PROFILE: Table = Table {
    name: "profile",
    entity: "Profile",
    columns: &[
        "full_name",
        "title",
        "bio",
        "email",
        "phone",
        "location",
        "avatar_file_id",
        "resume_file_id",
    ],
    dependents: &[],
};

/// Sentinel primary key of the singleton profile row.
pub const PROFILE_ID: i16 = 1;

pub const WORK_EXPERIENCE: Table = Table {
    name: "work_experience",
    entity: "WorkExperience",
    columns: &[
        "company",
        "position",
        "description",
        "start_date",
        "end_date",
        "is_current",
        "display_order",
    ],
    dependents: &[],
};

pub const CERTIFICATIONS: Table = Table {
    name: "certifications",
    entity: "Certification",
    columns: &[
        "name",
        "issuer",
        "issue_date",
        "expiry_date",
        "credential_id",
        "credential_url",
        "display_order",
    ],
    dependents: &[],
};

pub const SKILL_TYPES: Table = Table {
    name: "skill_types",
    entity: "SkillType",
    columns: &["name", "description", "display_order"],
    dependents: &[dep("skills", "skill_type_id", OnDelete::Restrict)],
};

pub const SKILLS: Table = Table {
    name: "skills",
    entity: "Skill",
    columns: &["skill", "skill_type_id", "is_visible", "display_order"],
    dependents: &[dep("portfolio_project_technologies", "skill_id", OnDelete::Cascade)],
};

pub const PORTFOLIO_PROJECTS: Table = Table {
    name: "portfolio_projects",
    entity: "PortfolioProject",
    columns: &[
        "title",
        "category",
        "description",
        "long_description",
        "image_file_id",
        "github_url",
        "live_url",
        "start_date",
        "end_date",
        "is_ongoing",
        "team_size",
        "role",
        "featured",
        "features",
        "challenges",
        "learnings",
        "display_order",
    ],
    dependents: &[dep("portfolio_project_technologies", "project_id", OnDelete::Cascade)],
};

/// Portfolio project <-> skill.
pub const PORTFOLIO_PROJECT_TECHNOLOGIES: LinkTable = LinkTable {
    table: "portfolio_project_technologies",
    parent_table: "portfolio_projects",
    parent_column: "project_id",
    child_table: "skills",
    child_column: "skill_id",
    parent_entity: "PortfolioProject",
};

// ---------------------------------------------------------------------------
// Miniatures
// ---------------------------------------------------------------------------

pub const MINIATURE_THEMES: Table = Table {
    name: "miniature_themes",
    entity: "MiniatureTheme",
    columns: &["name", "description", "cover_image_file_id", "display_order"],
    dependents: &[dep("miniature_projects", "theme_id", OnDelete::SetNull)],
};

pub const MINIATURE_PROJECTS: Table = Table {
    name: "miniature_projects",
    entity: "MiniatureProject",
    columns: &[
        "title",
        "description",
        "theme_id",
        "scale",
        "manufacturer",
        "time_spent_hours",
        "difficulty",
        "completed_date",
        "display_order",
    ],
    dependents: &[
        dep("miniature_files", "miniature_project_id", OnDelete::Cascade),
        dep("miniature_project_techniques", "project_id", OnDelete::Cascade),
        dep("miniature_project_paints", "project_id", OnDelete::Cascade),
    ],
};

/// Seeded reference data; no caller-mutable columns.
pub const MINIATURE_TECHNIQUES: Table = Table {
    name: "miniature_techniques",
    entity: "MiniatureTechnique",
    columns: &[],
    dependents: &[dep("miniature_project_techniques", "technique_id", OnDelete::Cascade)],
};

pub const MINIATURE_PAINTS: Table = Table {
    name: "miniature_paints",
    entity: "MiniaturePaint",
    columns: &["name", "manufacturer", "color_hex", "paint_type"],
    dependents: &[dep("miniature_project_paints", "paint_id", OnDelete::Cascade)],
};

/// Attachment rows, addressable on their own for removal.
pub const MINIATURE_FILES: Table = Table {
    name: "miniature_files",
    entity: "MiniatureFile",
    columns: &["caption", "display_order"],
    dependents: &[],
};

/// Miniature project <-> technique.
pub const MINIATURE_PROJECT_TECHNIQUES: LinkTable = LinkTable {
    table: "miniature_project_techniques",
    parent_table: "miniature_projects",
    parent_column: "project_id",
    child_table: "miniature_techniques",
    child_column: "technique_id",
    parent_entity: "MiniatureProject",
};

/// Miniature project <-> paint.
pub const MINIATURE_PROJECT_PAINTS: LinkTable = LinkTable {
    table: "miniature_project_paints",
    parent_table: "miniature_projects",
    parent_column: "project_id",
    child_table: "miniature_paints",
    child_column: "paint_id",
    parent_entity: "MiniatureProject",
};

/// Ordered images of a miniature project.
pub const MINIATURE_IMAGES: AttachmentTable = AttachmentTable {
    table: "miniature_files",
    parent_table: "miniature_projects",
    parent_column: "miniature_project_id",
    file_column: "file_id",
    parent_entity: "MiniatureProject",
};

/// Every declared table, for conformance checks.
pub const ALL_TABLES: [&Table; 12] = [
    &STORAGE_FILES,
    &PROFILE,
    &WORK_EXPERIENCE,
    &CERTIFICATIONS,
    &SKILL_TYPES,
    &SKILLS,
    &PORTFOLIO_PROJECTS,
    &MINIATURE_THEMES,
    &MINIATURE_PROJECTS,
    &MINIATURE_TECHNIQUES,
    &MINIATURE_PAINTS,
    &MINIATURE_FILES,
];
