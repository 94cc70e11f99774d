use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DecisionError;

pub const SCALE_UP: i32 = 1;
pub const SCALE_DOWN: i32 = -1;
pub const NO_ACTION: i32 = 0;

/// Outcome of a single scaling decision. Externally encoded as `+1`, `-1` and `0`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Decision {
    ScaleUp,
    ScaleDown,
    NoAction,
}

impl Decision {
    pub const fn as_i32(&self) -> i32 {
        match self {
            Self::ScaleUp => SCALE_UP,
            Self::ScaleDown => SCALE_DOWN,
            Self::NoAction => NO_ACTION,
        }
    }

    pub const fn is_action(&self) -> bool {
        !matches!(self, Self::NoAction)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ScaleUp => "scale_up",
            Self::ScaleDown => "scale_down",
            Self::NoAction => "no_action",
        };
        write!(f, "{}", label)
    }
}

impl From<Decision> for i32 {
    fn from(decision: Decision) -> Self {
        decision.as_i32()
    }
}

impl TryFrom<i32> for Decision {
    type Error = DecisionError;

    fn try_from(rep: i32) -> Result<Self, Self::Error> {
        match rep {
            SCALE_UP => Ok(Self::ScaleUp),
            SCALE_DOWN => Ok(Self::ScaleDown),
            NO_ACTION => Ok(Self::NoAction),
            other => Err(DecisionError::InvalidConfiguration(format!(
                "{} is not a scale action, expected one of -1, 0 or 1",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use claim::*;
    use pretty_assertions::assert_eq;
    use serde_test::{assert_tokens, Token};

    use super::*;

    #[test]
    fn test_decision_encoding() {
        assert_eq!(i32::from(Decision::ScaleUp), 1);
        assert_eq!(i32::from(Decision::ScaleDown), -1);
        assert_eq!(i32::from(Decision::NoAction), 0);

        assert_eq!(assert_ok!(Decision::try_from(-1)), Decision::ScaleDown);
        assert_err!(Decision::try_from(2));
        assert_err!(Decision::try_from(-2));
    }

    #[test]
    fn test_serde_decision_as_integer() {
        assert_tokens(&Decision::ScaleUp, &[Token::I32(1)]);
        assert_tokens(&Decision::ScaleDown, &[Token::I32(-1)]);
        assert_tokens(&Decision::NoAction, &[Token::I32(0)]);
    }

    #[test]
    fn test_decision_labels() {
        assert!(Decision::ScaleUp.is_action());
        assert!(!Decision::NoAction.is_action());
        assert_eq!(format!("{}", Decision::ScaleDown), "scale_down");
    }
}
