//! Defines the AST for statement expressions.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A column or table identifier, e.g., `customers` or `S.customer_id`.
    Identifier(Ident),

    /// A raw SQL fragment emitted verbatim, e.g., `TRUE`.
    Literal(String),

    /// A binary operation, e.g., `T.id = S.id` or `a AND b`.
    BinaryOp(Box<BinaryOp>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub qualifier: Option<String>, // e.g., the 'S' in 'S.customer_id'
    pub name: String,              // e.g., the 'customer_id' in 'S.customer_id'
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryOp {
    pub left: Expr,
    pub op: BinaryOperator,
    pub right: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    // Comparison
    Eq,    // =
    NotEq, // <>
    Lt,    // <
    LtEq,  // <=
    Gt,    // >
    GtEq,  // >=

    // Logical
    And,
    Or,
}
