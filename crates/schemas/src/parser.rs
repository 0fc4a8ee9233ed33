//! The two-method contract callers program against.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ParseError;
use crate::schema::Schema;

/// Anything that can check untrusted input synchronously or asynchronously.
///
/// `None` stands for an absent input (no body at all).
#[async_trait]
pub trait Parser: Send + Sync {
    fn parse(&self, input: Option<Value>) -> Result<Value, ParseError>;

    async fn parse_async(&self, input: Option<Value>) -> Result<Value, ParseError>;
}

#[async_trait]
impl Parser for Schema {
    fn parse(&self, input: Option<Value>) -> Result<Value, ParseError> {
        self.parse_input(input)
    }

    async fn parse_async(&self, input: Option<Value>) -> Result<Value, ParseError> {
        self.parse_input_async(input).await
    }
}
