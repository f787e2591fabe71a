use super::error::Error;

use std::{fmt, str::FromStr};

/// How an image becomes the fields of an output record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractionPolicy {
    /// Copy every attribute of the image as a string.
    #[default]
    FullImage,
    /// Keep only the identifier attribute.
    IdentifierOnly,
}

/// What a `REMOVE` notification produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovePolicy {
    /// Publish the old image as a record tagged `REMOVE`.
    #[default]
    Tombstone,
    /// Log the removal and publish nothing.
    Skip,
}

impl FromStr for ExtractionPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full-image" => Ok(Self::FullImage),
            "identifier-only" => Ok(Self::IdentifierOnly),
            other => Err(Error::InvalidConfig(format!(
                "unknown extraction policy `{other}`"
            ))),
        }
    }
}

impl fmt::Display for ExtractionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullImage => f.write_str("full-image"),
            Self::IdentifierOnly => f.write_str("identifier-only"),
        }
    }
}

impl FromStr for RemovePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tombstone" => Ok(Self::Tombstone),
            "skip" => Ok(Self::Skip),
            other => Err(Error::InvalidConfig(format!(
                "unknown remove policy `{other}`"
            ))),
        }
    }
}

impl fmt::Display for RemovePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tombstone => f.write_str("tombstone"),
            Self::Skip => f.write_str("skip"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policies_parse_case_insensitively() {
        assert_eq!(
            "Full-Image".parse::<ExtractionPolicy>().unwrap(),
            ExtractionPolicy::FullImage
        );
        assert_eq!(
            " identifier-only ".parse::<ExtractionPolicy>().unwrap(),
            ExtractionPolicy::IdentifierOnly
        );
        assert_eq!(
            "TOMBSTONE".parse::<RemovePolicy>().unwrap(),
            RemovePolicy::Tombstone
        );
        assert_eq!("skip".parse::<RemovePolicy>().unwrap(), RemovePolicy::Skip);
    }

    #[test]
    fn unknown_policy_is_a_config_error() {
        let err = "everything".parse::<ExtractionPolicy>().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));

        let err = "ignore".parse::<RemovePolicy>().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn display_matches_parse() {
        for policy in [ExtractionPolicy::FullImage, ExtractionPolicy::IdentifierOnly] {
            assert_eq!(policy.to_string().parse::<ExtractionPolicy>().unwrap(), policy);
        }
        for policy in [RemovePolicy::Tombstone, RemovePolicy::Skip] {
            assert_eq!(policy.to_string().parse::<RemovePolicy>().unwrap(), policy);
        }
    }
}
