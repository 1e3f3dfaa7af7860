//! Relational and assignment operators.
//!
//! Comparison operators are pure and yield a boolean. Transform operators
//! combine a target with a source and yield the value to store back into the
//! target slot.

/// Operator token understood by the evaluation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    // Transform
    Assign,
    NegativeAssign,
    Increment,
    Decrement,
    AdditionAssign,
    SubtractionAssign,
    MultiplicationAssign,
    DivisionAssign,
    ModuloAssign,
    BitwiseAndAssign,
    BitwiseOrAssign,
    BitwiseXorAssign,

    // Comparison
    EqualTo,
    NotEqualTo,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,

    // Other
    None,
    Unknown,
}

impl Operator {
    /// Every operator with a textual symbol, longest symbols first so a
    /// left-to-right scan can match greedily.
    pub const SYMBOLIC: [Operator; 21] = [
        Operator::NegativeAssign,
        Operator::Increment,
        Operator::Decrement,
        Operator::AdditionAssign,
        Operator::SubtractionAssign,
        Operator::MultiplicationAssign,
        Operator::DivisionAssign,
        Operator::ModuloAssign,
        Operator::BitwiseAndAssign,
        Operator::BitwiseOrAssign,
        Operator::BitwiseXorAssign,
        Operator::EqualTo,
        Operator::NotEqualTo,
        Operator::GreaterThanOrEqualTo,
        Operator::LessThanOrEqualTo,
        Operator::Assign,
        Operator::GreaterThan,
        Operator::LessThan,
        Operator::BitwiseAnd,
        Operator::BitwiseOr,
        Operator::BitwiseXor,
    ];

    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Assign => "=",
            Self::NegativeAssign => "=-",
            Self::Increment => "++",
            Self::Decrement => "--",
            Self::AdditionAssign => "+=",
            Self::SubtractionAssign => "-=",
            Self::MultiplicationAssign => "*=",
            Self::DivisionAssign => "/=",
            Self::ModuloAssign => "%=",
            Self::BitwiseAndAssign => "&=",
            Self::BitwiseOrAssign => "|=",
            Self::BitwiseXorAssign => "^=",
            Self::EqualTo => "==",
            Self::NotEqualTo => "!=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqualTo => ">=",
            Self::LessThan => "<",
            Self::LessThanOrEqualTo => "<=",
            Self::BitwiseAnd => "&",
            Self::BitwiseOr => "|",
            Self::BitwiseXor => "^",
            Self::None => "",
            Self::Unknown => "?",
        }
    }

    /// Look up an operator by its symbol. Surrounding whitespace is ignored;
    /// empty text is [`Operator::None`] and anything unrecognized is
    /// [`Operator::Unknown`].
    pub fn from_symbol(symbol: &str) -> Self {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Operator::None;
        }
        Operator::SYMBOLIC
            .into_iter()
            .find(|op| op.as_symbol() == symbol)
            .unwrap_or(Operator::Unknown)
    }

    /// Pure relational or set-membership operator.
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::EqualTo
                | Self::NotEqualTo
                | Self::GreaterThan
                | Self::GreaterThanOrEqualTo
                | Self::LessThan
                | Self::LessThanOrEqualTo
                | Self::BitwiseAnd
                | Self::BitwiseOr
                | Self::BitwiseXor
        )
    }

    /// Operator that produces a new value for the target slot.
    pub const fn is_transform(self) -> bool {
        matches!(
            self,
            Self::Assign
                | Self::NegativeAssign
                | Self::Increment
                | Self::Decrement
                | Self::AdditionAssign
                | Self::SubtractionAssign
                | Self::MultiplicationAssign
                | Self::DivisionAssign
                | Self::ModuloAssign
                | Self::BitwiseAndAssign
                | Self::BitwiseOrAssign
                | Self::BitwiseXorAssign
        )
    }

    /// Operators that take no source operand.
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Increment | Self::Decrement)
    }
}
