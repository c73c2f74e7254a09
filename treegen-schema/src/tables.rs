//! Built-in shape tables for the interpreter's expression and statement trees.

/// Expression node shapes, base type `Expr`.
pub const EXPR_SHAPES: &[&str] = &[
    "Binary      : Expr left, Token operator, Expr right",
    "Grouping    : Expr expression",
    "Literal     : Object value, Token unit",
    "Unary       : Token operator, Expr right",
    "Variable    : Token name",
    "Assign      : Token name, Expr value",
    "Logical     : Expr left, Token operator, Expr right",
    "Call        : Expr callee, Token paren, List<Expr> arguments",
    // obj.name
    "Get         : Expr object, Token name",
    // obj.name = value
    "Set         : Expr object, Token name, Expr value",
    // arr[expr]
    "Index       : Expr array, Expr index, Token bracket",
    // arr[expr] = value
    "IndexSet    : Expr array, Expr index, Expr value, Token bracket",
    "Array       : List<Expr> elements",
    "This        : Token keyword",
];

/// Statement node shapes, base type `Stmt`, with the `Param` and
/// `TypeNode` data types their fields refer to.
pub const STMT_SHAPES: &[&str] = &[
    "Expression  : Expr expression",
    "VarDecl     : TypeNode type, Token name, Expr initializer",
    "Function    : TypeNode returnType, Token name, List<Param> params, List<Stmt> body",
    "ClassStmt   : Token name, List<Stmt> members",
    "Block       : List<Stmt> statements",
    "If          : Expr condition, Stmt thenBranch, Stmt elseBranch",
    "While       : Expr condition, Stmt body",
    "For         : Stmt initializer, Expr condition, Expr increment, Stmt body",
    "Return      : Token keyword, Expr value",
    "Field       : TypeNode type, Token name, Expr initializer",
    "Constructor : Token name, List<Param> params, List<Stmt> body",
    "struct Param    : TypeNode type, Token name",
    "struct TypeNode : Token name, boolean isNone, boolean isArray",
];
