use crate::model::error::RatingError;
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;
use strum_macros::{Display, EnumIter, EnumString};

/// The three ranking models a rating pass can run under. Each model owns its
/// update law; the numeric repr is what gets persisted alongside scores.
#[derive(Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
#[repr(u8)]
pub enum RatingModel {
    PlackettLuce = 0,
    BradleyTerry = 1,
    ThurstoneMosteller = 2
}

impl TryFrom<i32> for RatingModel {
    type Error = RatingError;

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(RatingModel::PlackettLuce),
            1 => Ok(RatingModel::BradleyTerry),
            2 => Ok(RatingModel::ThurstoneMosteller),
            _ => Err(RatingError::UnknownModel(v.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{error::RatingError, structures::rating_model::RatingModel};
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_convert_plackett_luce() {
        assert_eq!(RatingModel::try_from(0), Ok(RatingModel::PlackettLuce));
    }

    #[test]
    fn test_convert_bradley_terry() {
        assert_eq!(RatingModel::try_from(1), Ok(RatingModel::BradleyTerry));
    }

    #[test]
    fn test_convert_thurstone_mosteller() {
        assert_eq!(RatingModel::try_from(2), Ok(RatingModel::ThurstoneMosteller));
    }

    #[test]
    fn test_convert_invalid() {
        assert_eq!(RatingModel::try_from(3), Err(RatingError::UnknownModel("3".to_string())));
    }

    #[test]
    fn test_parse_cli_names() {
        assert_eq!(RatingModel::from_str("plackett-luce"), Ok(RatingModel::PlackettLuce));
        assert_eq!(RatingModel::from_str("bradley-terry"), Ok(RatingModel::BradleyTerry));
        assert_eq!(
            RatingModel::from_str("thurstone-mosteller"),
            Ok(RatingModel::ThurstoneMosteller)
        );
        assert!(RatingModel::from_str("glicko").is_err());
    }

    #[test]
    fn test_enumerate() {
        let models = RatingModel::iter().collect::<Vec<_>>();
        assert_eq!(
            models,
            vec![
                RatingModel::PlackettLuce,
                RatingModel::BradleyTerry,
                RatingModel::ThurstoneMosteller
            ]
        );
    }
}
