//! Inbound request bodies

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// Body of `POST /echo`.
///
/// Only a JSON object is accepted and `message` is its only permitted key.
/// An absent key or a `null` value decodes as the empty string and is caught
/// by the non-empty check rather than the decoder. When the key repeats, the
/// last non-null value wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoRequest {
    pub message: String,
}

const FIELDS: &[&str] = &["message"];

impl<'de> Deserialize<'de> for EchoRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EchoRequestVisitor;

        impl<'de> Visitor<'de> for EchoRequestVisitor {
            type Value = EchoRequest;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object with a single `message` string")
            }

            fn visit_map<A>(self, mut map: A) -> Result<EchoRequest, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut message: Option<String> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "message" => {
                            if let Some(value) = map.next_value::<Option<String>>()? {
                                message = Some(value);
                            }
                        }
                        other => return Err(de::Error::unknown_field(other, FIELDS)),
                    }
                }

                Ok(EchoRequest {
                    message: message.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_map(EchoRequestVisitor)
    }
}
