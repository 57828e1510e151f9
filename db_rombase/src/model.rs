use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One ROM category entry, e.g. a genre or region, shown in `sort` order.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct RombaseEnum {
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub rom_type : String,
    pub name : String,
    #[serde(default)]
    pub sort : u32,
}

impl RombaseEnum {
    pub fn new<S : Into<String>>(rom_type : S, name : S, sort : u32) -> Self {
        RombaseEnum { rom_type: rom_type.into(), name: name.into(), sort }
    }
}
