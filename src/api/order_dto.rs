use serde::Deserialize;

/// A single entry of the orders file. The order number is the key the entry
/// is stored under, so only the payload lives here. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderDto {
    pub destination: String,
}
