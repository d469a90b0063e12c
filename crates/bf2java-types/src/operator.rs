use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight canonical Brainfuck operators.
///
/// Any other source character is a comment and never reaches this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// `>`
    PtrInc,
    /// `<`
    PtrDec,
    /// `+`
    CellInc,
    /// `-`
    CellDec,
    /// `.`
    Output,
    /// `,`
    Input,
    /// `[`
    LoopOpen,
    /// `]`
    LoopClose,
}

impl Operator {
    /// Every operator, in translation-table order.
    pub const ALL: [Operator; 8] = [
        Operator::PtrInc,
        Operator::PtrDec,
        Operator::CellInc,
        Operator::CellDec,
        Operator::Output,
        Operator::Input,
        Operator::LoopOpen,
        Operator::LoopClose,
    ];

    /// Map a source character to its operator, if it is one.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '>' => Some(Self::PtrInc),
            '<' => Some(Self::PtrDec),
            '+' => Some(Self::CellInc),
            '-' => Some(Self::CellDec),
            '.' => Some(Self::Output),
            ',' => Some(Self::Input),
            '[' => Some(Self::LoopOpen),
            ']' => Some(Self::LoopClose),
            _ => None,
        }
    }

    /// Byte-level variant of [`Operator::from_char`].
    pub fn from_byte(b: u8) -> Option<Self> {
        if b.is_ascii() {
            Self::from_char(b as char)
        } else {
            None
        }
    }

    /// The source character for this operator.
    pub fn as_char(self) -> char {
        match self {
            Self::PtrInc => '>',
            Self::PtrDec => '<',
            Self::CellInc => '+',
            Self::CellDec => '-',
            Self::Output => '.',
            Self::Input => ',',
            Self::LoopOpen => '[',
            Self::LoopClose => ']',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_inverts_as_char() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_char(op.as_char()), Some(op));
        }
    }

    #[test]
    fn test_non_operators_rejected() {
        for c in ['a', ' ', '\n', '#', '{', '}', '0', 'é', '→'] {
            assert_eq!(Operator::from_char(c), None, "char {c:?}");
        }
    }

    #[test]
    fn test_from_byte_ignores_non_ascii() {
        assert_eq!(Operator::from_byte(b'['), Some(Operator::LoopOpen));
        assert_eq!(Operator::from_byte(0xAB), None);
        assert_eq!(Operator::from_byte(0xFF), None);
    }

    #[test]
    fn test_display() {
        let text: String = Operator::ALL.iter().map(|op| op.to_string()).collect();
        assert_eq!(text, "><+-.,[]");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Operator::LoopOpen).unwrap();
        assert_eq!(json, "\"loop_open\"");
        let back: Operator = serde_json::from_str("\"cell_dec\"").unwrap();
        assert_eq!(back, Operator::CellDec);
    }
}
