use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::db::{HostelModel, MessModel};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HostelDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessDto {
    pub id: i32,
    pub name: String,
    pub menu: String,
}

/// Flattened billing record for the requesting identity: the profile name,
/// the subscribed mess name, and the bill amounts.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BillDto {
    pub name: String,
    pub mess: String,
    pub monthly_bill: i32,
    pub extra_charges: i32,
}

impl From<HostelModel> for HostelDto {
    fn from(hostel: HostelModel) -> Self {
        Self {
            id: hostel.id,
            name: hostel.name,
        }
    }
}

impl From<MessModel> for MessDto {
    fn from(mess: MessModel) -> Self {
        Self {
            id: mess.id,
            name: mess.name,
            menu: mess.menu,
        }
    }
}
