use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{EntityId, Member};

#[derive(Debug, Deserialize)]
pub struct ListMembersParams {
    pub active: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct MemberListResponse {
    pub members: Vec<Member>,
    pub total: u32,
}

pub async fn list_members(
    State(state): State<AppState>,
    Query(params): Query<ListMembersParams>,
) -> Result<Json<MemberListResponse>, ApiError> {
    let mut members = state.store.members()?;

    if params.active.unwrap_or(false) {
        members.retain(|m| m.is_active);
    }

    members.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

    let total = members.len() as u32;
    Ok(Json(MemberListResponse { members, total }))
}

pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Member>, ApiError> {
    let member = state
        .store
        .member_by_id(&EntityId::from(id.as_str()))?
        .ok_or_else(|| ApiError::NotFound(format!("Member {}", id)))?;
    Ok(Json(member))
}

#[derive(Debug, Deserialize)]
pub struct CreateMemberRequest {
    pub name: String,
    pub email: Option<String>,
}

pub async fn create_member(
    State(state): State<AppState>,
    Json(req): Json<CreateMemberRequest>,
) -> Result<Json<Member>, ApiError> {
    if req.name.trim().is_empty() {
        return Err(ApiError::BadRequest("name must not be empty".to_string()));
    }

    let mut member = Member::new(req.name.trim().to_string());
    if let Some(email) = req.email {
        member = member.with_email(email);
    }

    let member = state.store.upsert_member(member)?;
    Ok(Json(member))
}

#[derive(Debug, Deserialize)]
pub struct UpdateMemberRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
}

pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateMemberRequest>,
) -> Result<Json<Member>, ApiError> {
    let mut member = state
        .store
        .member_by_id(&EntityId::from(id.as_str()))?
        .ok_or_else(|| ApiError::NotFound(format!("Member {}", id)))?;

    if let Some(name) = req.name {
        if name.trim().is_empty() {
            return Err(ApiError::BadRequest("name must not be empty".to_string()));
        }
        member.name = name.trim().to_string();
    }
    if let Some(email) = req.email {
        member.email = Some(email);
    }
    if let Some(is_active) = req.is_active {
        member.is_active = is_active;
    }

    let member = state.store.upsert_member(member)?;
    Ok(Json(member))
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

/// Soft delete: the member record stays so historical scorecards keep
/// aggregating, but it drops out of active listings and name lookups.
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let deleted = state
        .store
        .soft_delete_member(&EntityId::from(id.as_str()))?;

    if !deleted {
        return Err(ApiError::NotFound(format!("Member {}", id)));
    }
    Ok(Json(DeleteResponse { deleted }))
}
