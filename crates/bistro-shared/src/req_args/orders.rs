use crate::id::DbId;

/// Sent to `/orders` (POST)
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct NewOrderReqArgs {
    pub items: Vec<NewOrderLine>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct NewOrderLine {
    #[serde(rename = "productId")]
    pub product_id: DbId,
    pub quantity: u32,
}
