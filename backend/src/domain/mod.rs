//! Domain primitives, services and ports.
//!
//! Purpose: define the strongly typed definitions model and the rules around
//! it (validation, ownership) without any knowledge of HTTP or SQL.
//!
//! Public surface:
//! - `Error`: transport-agnostic error payload.
//! - `Definition` / `DefinitionDraft`: stored rows and validated form input.
//! - `DefinitionsService`: implements the definitions driving ports.
//! - `User` / `UserId` / `Username`: identity supplied by the auth collaborator.

pub mod auth;
pub mod definition;
pub mod definitions_service;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::definition::{Definition, DefinitionDraft, DefinitionId, DefinitionValidationError};
pub use self::definitions_service::{AuthorCheck, DefinitionsService, FORBIDDEN_EDIT_MESSAGE};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId, UserValidationError, Username};

