//! The greeting record and the transformation that produces it.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::domain::{ArgumentList, DomainError};

/// Value of the `Hello` field. Never changes.
pub const GREETING: &str = "World";

/// `{"Hello": "World", "args": [...]}`.
///
/// Field order is the declaration order below; serializers that keep
/// insertion order emit `Hello` before `args`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGreetingRecord")]
pub struct GreetingRecord {
    #[serde(rename = "Hello", skip_deserializing)]
    hello: &'static str,
    args: ArgumentList,
}

impl GreetingRecord {
    pub fn hello(&self) -> &str {
        self.hello
    }

    pub fn args(&self) -> &ArgumentList {
        &self.args
    }

    pub fn into_args(self) -> ArgumentList {
        self.args
    }
}

/// Wire shape accepted on the way in; checked before it becomes a record.
#[derive(Deserialize)]
struct RawGreetingRecord {
    #[serde(rename = "Hello")]
    hello: String,
    args: ArgumentList,
}

impl TryFrom<RawGreetingRecord> for GreetingRecord {
    type Error = DomainError;

    fn try_from(raw: RawGreetingRecord) -> Result<Self, Self::Error> {
        if raw.hello != GREETING {
            return Err(DomainError::UnexpectedGreeting { found: raw.hello });
        }
        Ok(greet(raw.args))
    }
}

/// Build the greeting record for `args`.
///
/// Pure and infallible; the list is embedded as-is.
pub fn greet(args: ArgumentList) -> GreetingRecord {
    trace!(count = args.len(), "greeting");
    GreetingRecord {
        hello: GREETING,
        args,
    }
}
