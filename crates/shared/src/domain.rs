use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(PlateId);

/// One menu item as the backend stores it. `id` is server-assigned and
/// immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateRecord {
    pub id: PlateId,
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
    pub available: bool,
}

/// The fields a user fills into the add/edit dialogs. `id` and `available`
/// are never user-supplied: the server assigns the former, the controller
/// decides the latter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateDraft {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
}
