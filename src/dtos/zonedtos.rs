use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::zonemodel::Zone;

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct CreateZoneDto {
    #[validate(
        length(min = 1, message = "Zone name is required"),
        length(max = 100, message = "Zone name must not be more than 100 characters")
    )]
    pub name: String,

    pub description: Option<String>,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct UpdateZoneDto {
    #[validate(
        length(min = 1, message = "Zone name is required"),
        length(max = 100, message = "Zone name must not be more than 100 characters")
    )]
    pub name: String,

    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Validate)]
pub struct ZoneQueryDto {
    pub search: Option<String>,
    #[validate(range(min = 1))]
    pub page: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ZoneData {
    pub zone: Zone,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ZoneResponseDto {
    pub status: String,
    pub data: ZoneData,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ZoneListResponseDto {
    pub status: String,
    pub zones: Vec<Zone>,
    pub results: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_zone_name_is_rejected() {
        let dto = CreateZoneDto {
            name: String::new(),
            description: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn plain_zone_name_passes() {
        let dto = CreateZoneDto {
            name: "Ward 12".to_string(),
            description: Some("North district".to_string()),
        };
        assert!(dto.validate().is_ok());
    }
}
