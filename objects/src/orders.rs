use serde::{
    Deserialize,
    Serialize,
};



#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Market,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
}

/// Body of `POST /orders`. `total_amount` is the notional in quote currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub order_type: OrderType,
    pub side: OrderSide,
    pub symbol: String,
    pub total_amount: f64,
}

impl OrderPayload {
    pub fn market_buy(symbol: impl Into<String>, total_amount: f64) -> Self {
        Self {
            order_type: OrderType::Market,
            side: OrderSide::Buy,
            symbol: symbol.into(),
            total_amount: total_amount,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
