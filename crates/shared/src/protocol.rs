use serde::{Deserialize, Serialize};

use crate::domain::PlateDraft;

/// Body for `POST foods`. New plates always start out available; the add
/// dialog has no way to say otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlateRequest {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
    pub available: bool,
}

impl CreatePlateRequest {
    pub fn from_draft(draft: PlateDraft) -> Self {
        Self {
            name: draft.name,
            image: draft.image,
            price: draft.price,
            description: draft.description,
            available: true,
        }
    }
}

/// Body for `PUT foods/{id}`. The edit dialog never exposes `available`,
/// so the caller carries the target's current flag forward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePlateRequest {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
    pub available: bool,
}

impl UpdatePlateRequest {
    pub fn from_draft(draft: PlateDraft, available: bool) -> Self {
        Self {
            name: draft.name,
            image: draft.image,
            price: draft.price,
            description: draft.description,
            available,
        }
    }
}
