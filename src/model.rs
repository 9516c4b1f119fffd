// Request/response data records
// Flat records populated by the binder and rendered by the handlers

use serde::Deserialize;

/// Fixed demo record listed by `GET /people`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: i32,
}

impl Person {
    pub fn new(name: &str, age: i32) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }
}

/// Record variant with full accessor support.
///
/// Fields are public, so parameter binding can populate them by name
/// match and a JSON body can be decoded into them directly. Fields
/// absent from the source keep their defaults (`None` / `0`).
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct UserDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: i32,
}

/// Record variant without accessor support.
///
/// Fields are private and there are no mutators: parameter binding
/// always leaves the record at its default value, and request bodies
/// cannot be decoded into it at all. Compares and hashes over both
/// fields.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct UserVo {
    name: Option<String>,
    age: i32,
}

impl UserVo {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub const fn age(&self) -> i32 {
        self.age
    }
}
