use serde::{Deserialize, Serialize};

/// Failure reasons reported across the API boundary.
///
/// The integer codes are part of the wire contract. New reasons are only
/// ever appended; existing codes are never renumbered or reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[serde(into = "i32", try_from = "i32")]
pub enum ApiError {
    #[error("unknown error")]
    Unknown,
    #[error("invalid discord user")]
    InvalidDiscordUser,
    #[error("the target of this case is protected")]
    ProtectedModCaseSuspect,
    #[error("the target of this case is a bot")]
    ProtectedModCaseSuspectIsBot,
    #[error("the target of this case is a site admin")]
    ProtectedModCaseSuspectIsSiteAdmin,
    #[error("the target of this case is a team member")]
    ProtectedModCaseSuspectIsTeam,
    #[error("resource not found")]
    ResourceNotFound,
    #[error("invalid identity")]
    InvalidIdentity,
    #[error("guild is not registered")]
    GuildUnregistered,
    #[error("unauthorized")]
    Unauthorized,
    #[error("guild has no muted roles defined")]
    GuildUndefinedMutedRoles,
    #[error("case is marked to be deleted")]
    ModCaseIsMarkedToBeDeleted,
    #[error("case is not marked to be deleted")]
    ModCaseIsNotMarkedToBeDeleted,
    #[error("guild is already registered")]
    GuildAlreadyRegistered,
    #[error("not allowed in demo mode")]
    NotAllowedInDemoMode,
    #[error("role not found")]
    RoleNotFound,
    #[error("token cannot manage this resource")]
    TokenCannotManageThisResource,
    #[error("token is already registered")]
    TokenAlreadyRegistered,
    #[error("source and target cannot be the same user")]
    CannotBeSameUser,
    #[error("resource already exists")]
    ResourceAlreadyExists,
}

/// Returned when an integer does not name any [`ApiError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown api error code {0}")]
pub struct UnknownApiErrorCode(pub i32);

const CATALOG: [ApiError; 20] = [
    ApiError::Unknown,
    ApiError::InvalidDiscordUser,
    ApiError::ProtectedModCaseSuspect,
    ApiError::ProtectedModCaseSuspectIsBot,
    ApiError::ProtectedModCaseSuspectIsSiteAdmin,
    ApiError::ProtectedModCaseSuspectIsTeam,
    ApiError::ResourceNotFound,
    ApiError::InvalidIdentity,
    ApiError::GuildUnregistered,
    ApiError::Unauthorized,
    ApiError::GuildUndefinedMutedRoles,
    ApiError::ModCaseIsMarkedToBeDeleted,
    ApiError::ModCaseIsNotMarkedToBeDeleted,
    ApiError::GuildAlreadyRegistered,
    ApiError::NotAllowedInDemoMode,
    ApiError::RoleNotFound,
    ApiError::TokenCannotManageThisResource,
    ApiError::TokenAlreadyRegistered,
    ApiError::CannotBeSameUser,
    ApiError::ResourceAlreadyExists,
];

impl ApiError {
    pub fn code(self) -> i32 {
        match self {
            ApiError::Unknown => 0,
            ApiError::InvalidDiscordUser => 1,
            ApiError::ProtectedModCaseSuspect => 2,
            ApiError::ProtectedModCaseSuspectIsBot => 3,
            ApiError::ProtectedModCaseSuspectIsSiteAdmin => 4,
            ApiError::ProtectedModCaseSuspectIsTeam => 5,
            ApiError::ResourceNotFound => 6,
            ApiError::InvalidIdentity => 7,
            ApiError::GuildUnregistered => 8,
            ApiError::Unauthorized => 9,
            ApiError::GuildUndefinedMutedRoles => 10,
            ApiError::ModCaseIsMarkedToBeDeleted => 11,
            ApiError::ModCaseIsNotMarkedToBeDeleted => 12,
            ApiError::GuildAlreadyRegistered => 13,
            ApiError::NotAllowedInDemoMode => 14,
            ApiError::RoleNotFound => 15,
            ApiError::TokenCannotManageThisResource => 16,
            ApiError::TokenAlreadyRegistered => 17,
            ApiError::CannotBeSameUser => 18,
            ApiError::ResourceAlreadyExists => 19,
        }
    }

    /// Every known reason, ordered by code.
    pub fn all() -> &'static [ApiError] {
        &CATALOG
    }
}

impl From<ApiError> for i32 {
    fn from(value: ApiError) -> Self {
        value.code()
    }
}

impl TryFrom<i32> for ApiError {
    type Error = UnknownApiErrorCode;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        CATALOG
            .iter()
            .copied()
            .find(|entry| entry.code() == value)
            .ok_or(UnknownApiErrorCode(value))
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiError, UnknownApiErrorCode};

    #[test]
    fn codes_are_stable() {
        assert_eq!(ApiError::Unknown.code(), 0);
        assert_eq!(ApiError::ResourceNotFound.code(), 6);
        assert_eq!(ApiError::Unauthorized.code(), 9);
        assert_eq!(ApiError::GuildAlreadyRegistered.code(), 13);
        assert_eq!(ApiError::ResourceAlreadyExists.code(), 19);
    }

    #[test]
    fn catalog_is_dense_and_ordered() {
        for (idx, entry) in ApiError::all().iter().enumerate() {
            assert_eq!(entry.code(), idx as i32);
        }
    }

    #[test]
    fn converts_from_integer_codes() {
        assert_eq!(ApiError::try_from(18), Ok(ApiError::CannotBeSameUser));
        assert_eq!(ApiError::try_from(20), Err(UnknownApiErrorCode(20)));
        assert_eq!(ApiError::try_from(-1), Err(UnknownApiErrorCode(-1)));
    }

    #[test]
    fn serializes_as_integer() {
        let encoded = serde_json::to_string(&ApiError::InvalidIdentity).unwrap();
        assert_eq!(encoded, "7");

        let decoded: ApiError = serde_json::from_str("16").unwrap();
        assert_eq!(decoded, ApiError::TokenCannotManageThisResource);

        assert!(serde_json::from_str::<ApiError>("42").is_err());
    }
}
