use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderlens_core::{CustomerId, Entity};

/// A purchaser. Referenced by many orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub country: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> CustomerId {
        self.id
    }
}
