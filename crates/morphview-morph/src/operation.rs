//! Operation selector
//!
//! [`OperationKind`] is the closed set of operators the engine knows. Names
//! coming from outside (menus, config, tests) go through [`FromStr`], which is
//! the only place an unknown operation can be reported.

use crate::MorphError;
use std::fmt;
use std::str::FromStr;

/// Binary morphological operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OperationKind {
    /// Shrink foreground regions
    #[default]
    Erosion,
    /// Grow foreground regions
    Dilation,
    /// Erosion followed by dilation
    Opening,
    /// Dilation followed by erosion
    Closing,
}

impl OperationKind {
    /// All operations, in menu order
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Erosion,
        OperationKind::Dilation,
        OperationKind::Opening,
        OperationKind::Closing,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            OperationKind::Erosion => "Erosion",
            OperationKind::Dilation => "Dilation",
            OperationKind::Opening => "Opening",
            OperationKind::Closing => "Closing",
        }
    }

    /// Short description of the operation's visual effect
    pub fn explanation(self) -> &'static str {
        match self {
            OperationKind::Erosion => {
                "Erosion shrinks and thins objects. Pixels on object boundaries are \
                 removed, which strips small protrusions and can split connected \
                 components apart."
            }
            OperationKind::Dilation => {
                "Dilation grows and thickens objects. Pixels are added along object \
                 boundaries, which fills small holes and joins nearby components."
            }
            OperationKind::Opening => {
                "Opening is an erosion followed by a dilation. Small objects disappear \
                 while larger objects keep their shape and size."
            }
            OperationKind::Closing => {
                "Closing is a dilation followed by an erosion. Small holes and gaps are \
                 filled while objects keep their shape and size."
            }
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperationKind {
    type Err = MorphError;

    /// Parse an operation name, case-insensitively.
    ///
    /// Accepts the display names and the verb forms (`erode`, `dilate`,
    /// `open`, `close`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "erosion" | "erode" => Ok(OperationKind::Erosion),
            "dilation" | "dilate" => Ok(OperationKind::Dilation),
            "opening" | "open" => Ok(OperationKind::Opening),
            "closing" | "close" => Ok(OperationKind::Closing),
            _ => Err(MorphError::InvalidOperation(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for op in OperationKind::ALL {
            assert_eq!(op.name().parse::<OperationKind>().unwrap(), op);
            assert_eq!(op.to_string(), op.name());
        }
        assert_eq!(
            "  DILATE ".parse::<OperationKind>().unwrap(),
            OperationKind::Dilation
        );
        assert_eq!("close".parse::<OperationKind>().unwrap(), OperationKind::Closing);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "tophat".parse::<OperationKind>().unwrap_err();
        assert_eq!(err, MorphError::InvalidOperation("tophat".to_string()));
        assert!("".parse::<OperationKind>().is_err());
    }

    #[test]
    fn test_explanations_distinct() {
        for op in OperationKind::ALL {
            assert!(op.explanation().starts_with(op.name()));
        }
    }
}
