//! Divination methods.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CastError;

/// The two supported divination methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Six-line hexagram cast with three coins per line.
    Liuyao,
    /// Three-card past/present/future spread from the major arcana.
    Tarot,
}

impl Method {
    /// Number of physical steps (tosses or draws) the method needs.
    pub fn required_steps(self) -> usize {
        match self {
            Self::Liuyao => 6,
            Self::Tarot => 3,
        }
    }

    /// Wire name of the method.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Liuyao => "liuyao",
            Self::Tarot => "tarot",
        }
    }
}

impl FromStr for Method {
    type Err = CastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "liuyao" | "iching" | "i-ching" => Ok(Self::Liuyao),
            "tarot" => Ok(Self::Tarot),
            other => Err(CastError::InvalidMethod(other.to_string())),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_steps() {
        assert_eq!(Method::Liuyao.required_steps(), 6);
        assert_eq!(Method::Tarot.required_steps(), 3);
    }

    #[test]
    fn parse_methods() {
        assert_eq!("liuyao".parse::<Method>(), Ok(Method::Liuyao));
        assert_eq!(" Tarot ".parse::<Method>(), Ok(Method::Tarot));
        assert_eq!(
            "runes".parse::<Method>(),
            Err(CastError::InvalidMethod("runes".to_string()))
        );
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&Method::Tarot).unwrap();
        assert_eq!(json, "\"tarot\"");
        let m: Method = serde_json::from_str(&json).unwrap();
        assert_eq!(m, Method::Tarot);
    }
}
