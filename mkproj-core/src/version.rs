use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

/// A tool version such as the minimum CMake version (`3.2` or `3.2.1`).
///
/// The patch component is optional and only rendered when given.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Version {
    major: u32,
    minor: u32,
    patch: Option<u32>,
}

impl TryFrom<String> for Version {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl Version {
    pub fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            patch: None,
        }
    }

    pub fn with_patch(mut self, patch: u32) -> Self {
        self.patch = Some(patch);
        self
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::new(3, 2)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(patch) = self.patch {
            write!(f, ".{}", patch)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 2 && parts.len() != 3 {
            return Err(format!("invalid version '{}', expected 'X.Y' or 'X.Y.Z'", s));
        }
        Ok(Self {
            major: parts[0].parse().map_err(|_| "invalid major")?,
            minor: parts[1].parse().map_err(|_| "invalid minor")?,
            patch: match parts.get(2) {
                Some(p) => Some(p.parse().map_err(|_| "invalid patch")?),
                None => None,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(Version::default().to_string(), "3.2");
    }

    #[test]
    fn test_display() {
        assert_eq!(Version::new(3, 10).to_string(), "3.10");
        assert_eq!(Version::new(3, 2).with_patch(1).to_string(), "3.2.1");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("3.2".parse::<Version>().unwrap(), Version::new(3, 2));
        assert_eq!(
            "3.16.4".parse::<Version>().unwrap(),
            Version::new(3, 16).with_patch(4)
        );
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("3".parse::<Version>().is_err());
        assert!("1.2.3.4".parse::<Version>().is_err());
        assert!("a.b".parse::<Version>().is_err());
        assert!("3.2.x".parse::<Version>().is_err());
        assert!("".parse::<Version>().is_err());
    }

    #[test]
    fn test_deserialize() {
        let v: Version = serde_json::from_str(r#""3.5""#).unwrap();
        assert_eq!(v, Version::new(3, 5));
        assert!(serde_json::from_str::<Version>(r#""three""#).is_err());
    }

    #[test]
    fn test_serialize_roundtrip_text() {
        assert_eq!(
            serde_json::to_string(&Version::new(3, 2)).unwrap(),
            r#""3.2""#
        );
    }
}
