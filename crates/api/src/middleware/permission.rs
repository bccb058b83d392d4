//! Scope-checking extractors.
//!
//! Every API handler names the scope it needs in its signature:
//!
//! ```ignore
//! async fn delete(
//!     _: Require<MiniaturesDelete>,
//!     State(state): State<AppState>,
//!     Path(id): Path<DbId>,
//! ) -> AppResult<StatusCode> { ... }
//! ```
//!
//! The check runs during extraction, before the handler body and therefore
//! before any store access. A missing or invalid token is a 401; a valid
//! token without the level is a 403.

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use folio_core::permissions::{has_permission, Level, Resource};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// A resource/level requirement known at compile time.
pub trait Scope {
    const RESOURCE: Resource;
    const LEVEL: Level;
}

/// Rejects callers whose token does not grant `S::LEVEL` on `S::RESOURCE`.
pub struct Require<S: Scope>(pub AuthUser, PhantomData<S>);

impl<S> FromRequestParts<AppState> for Require<S>
where
    S: Scope + Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !has_permission(&user.scopes, S::RESOURCE, S::LEVEL) {
            let granted = user.level(S::RESOURCE);
            tracing::debug!(
                subject = %user.subject,
                resource = %S::RESOURCE,
                required = %S::LEVEL,
                granted = %granted,
                "Permission denied"
            );
            return Err(AppError::InsufficientPermission {
                resource: S::RESOURCE,
                required: S::LEVEL,
            });
        }
        Ok(Require(user, PhantomData))
    }
}

macro_rules! scopes {
    ($($name:ident => $resource:ident, $level:ident;)*) => {
        $(
            #[doc = concat!("`", stringify!($level), "` on `", stringify!($resource), "`.")]
            pub struct $name;

            impl Scope for $name {
                const RESOURCE: Resource = Resource::$resource;
                const LEVEL: Level = Level::$level;
            }
        )*
    };
}

scopes! {
    ProfileRead => Profile, Read;
    ProfileEdit => Profile, Edit;
    ProfileDelete => Profile, Delete;
    ExperienceRead => Experience, Read;
    ExperienceEdit => Experience, Edit;
    ExperienceDelete => Experience, Delete;
    CertificationsRead => Certifications, Read;
    CertificationsEdit => Certifications, Edit;
    CertificationsDelete => Certifications, Delete;
    SkillsRead => Skills, Read;
    SkillsEdit => Skills, Edit;
    SkillsDelete => Skills, Delete;
    ProjectsRead => Projects, Read;
    ProjectsEdit => Projects, Edit;
    ProjectsDelete => Projects, Delete;
    MiniaturesRead => Miniatures, Read;
    MiniaturesEdit => Miniatures, Edit;
    MiniaturesDelete => Miniatures, Delete;
    FilesDelete => Files, Delete;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_carry_their_requirement() {
        assert_eq!(ProfileDelete::RESOURCE, Resource::Profile);
        assert_eq!(ProfileDelete::LEVEL, Level::Delete);
        assert_eq!(SkillsRead::RESOURCE, Resource::Skills);
        assert_eq!(MiniaturesEdit::LEVEL, Level::Edit);
        assert_eq!(FilesDelete::RESOURCE, Resource::Files);
    }
}
