use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Confirmation body returned by update and delete endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Body returned by create endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CreatedId {
    pub id: i32,
}
