//! Record binding
//!
//! Populates flat records from request parameters by field-name
//! matching. Pairs that name no settable field are ignored and
//! unmatched fields keep their defaults, so a record without any
//! settable fields always comes out as its default value.

use super::error::BindError;
use super::params::ParamMap;
use crate::model::{UserDto, UserVo};

/// A record the parameter binder can populate field-by-field.
pub trait BindRecord: Default {
    /// Offer one key/value pair to the record. Implementations copy
    /// the value into the matching field, or ignore the pair when no
    /// field matches or none is settable.
    fn bind_field(&mut self, key: &str, value: &str) -> Result<(), BindError>;
}

/// Build a record from request parameters.
pub fn bind_record<T: BindRecord>(params: &ParamMap) -> Result<T, BindError> {
    let mut record = T::default();
    for (key, value) in params.iter() {
        record.bind_field(key, value)?;
    }
    Ok(record)
}

impl BindRecord for UserDto {
    fn bind_field(&mut self, key: &str, value: &str) -> Result<(), BindError> {
        match key {
            "name" => self.name = Some(value.to_string()),
            "age" => {
                self.age = value.parse().map_err(|_| BindError::InvalidParam {
                    name: "age",
                    value: value.to_string(),
                })?;
            }
            _ => {}
        }
        Ok(())
    }
}

impl BindRecord for UserVo {
    // No settable fields: every pair is ignored.
    fn bind_field(&mut self, _key: &str, _value: &str) -> Result<(), BindError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dto_binds_matching_fields() {
        let params = ParamMap::parse("name=Alice&age=10").unwrap();
        let dto: UserDto = bind_record(&params).unwrap();
        assert_eq!(dto.name.as_deref(), Some("Alice"));
        assert_eq!(dto.age, 10);
    }

    #[test]
    fn test_dto_unmatched_fields_keep_defaults() {
        let params = ParamMap::parse("name=Alice").unwrap();
        let dto: UserDto = bind_record(&params).unwrap();
        assert_eq!(dto.name.as_deref(), Some("Alice"));
        assert_eq!(dto.age, 0);
    }

    #[test]
    fn test_dto_ignores_unknown_keys() {
        let params = ParamMap::parse("name=Alice&city=Seoul").unwrap();
        let dto: UserDto = bind_record(&params).unwrap();
        assert_eq!(dto.name.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_dto_rejects_non_numeric_age() {
        let params = ParamMap::parse("age=ten").unwrap();
        let result: Result<UserDto, _> = bind_record(&params);
        assert!(matches!(
            result,
            Err(BindError::InvalidParam { name: "age", .. })
        ));
    }

    #[test]
    fn test_vo_always_comes_out_default() {
        let params = ParamMap::parse("name=Alice&age=10").unwrap();
        let vo: UserVo = bind_record(&params).unwrap();
        assert_eq!(vo, UserVo::default());
        assert_eq!(vo.name(), None);
        assert_eq!(vo.age(), 0);
    }

    #[test]
    fn test_empty_params_yield_defaults() {
        let params = ParamMap::new();
        let dto: UserDto = bind_record(&params).unwrap();
        assert_eq!(dto, UserDto::default());
    }
}
