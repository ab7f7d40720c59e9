//! Expression parser for calculator input.
//!
//! This module implements a recursive descent parser over the canonical form
//! produced by [`normalize`](super::normalize::normalize). The grammar is
//! closed: numbers, the constants `pi` and `e`, six named functions, the four
//! arithmetic operators, exponentiation, postfix percent and parentheses.
//! Anything else is rejected before evaluation.
//!
//! # BNF Grammar
//!
//! ```bnf
//! Expression ::= Additive
//! Additive   ::= Term ( ( "+" | "-" ) Term )*
//! Term       ::= Unary ( ( "*" | "/" ) Unary )*
//! Unary      ::= ( "+" | "-" ) Unary | Power
//! Power      ::= Postfix ( "**" Unary )?
//! Postfix    ::= Primary "%"*
//! Primary    ::= Number | Constant | Function "(" Expression ")" | "(" Expression ")"
//! Constant   ::= "pi" | "e"
//! Function   ::= "sin" | "cos" | "tan" | "log10" | "ln" | "sqrt"
//! Number     ::= [0-9]+ ( "." [0-9]* )? | "." [0-9]+
//! ```
//!
//! Precedence, lowest first:
//! - Addition and subtraction (left-associative)
//! - Multiplication and division (left-associative)
//! - Unary plus and minus
//! - Power (right-associative, so `-2**2` is `-(2**2)` and `2**-1` is allowed)
//! - Postfix percent, which divides its operand by 100
//! - Parentheses and function calls

use std::f64::consts;
use std::fmt;

use super::errors::{EvalError, EvalResult};

/// Deepest nesting of unary operators, powers and parentheses accepted.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Represents a token in the canonical expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Identifier(String),

    // Operators
    Plus,
    Minus,
    Multiply,
    Divide,
    Power,
    Percent,

    // Delimiters
    LeftParen,
    RightParen,

    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "number {}", value),
            Token::Identifier(name) => write!(f, "name '{}'", name),
            Token::Plus => f.write_str("'+'"),
            Token::Minus => f.write_str("'-'"),
            Token::Multiply => f.write_str("'*'"),
            Token::Divide => f.write_str("'/'"),
            Token::Power => f.write_str("'**'"),
            Token::Percent => f.write_str("'%'"),
            Token::LeftParen => f.write_str("'('"),
            Token::RightParen => f.write_str("')'"),
            Token::Eof => f.write_str("end of input"),
        }
    }
}

/// Named constants available in expressions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pi" => Some(Constant::Pi),
            "e" => Some(Constant::E),
            _ => None,
        }
    }

    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => consts::PI,
            Constant::E => consts::E,
        }
    }
}

/// The fixed set of single-argument functions. Trigonometry is in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Log10,
    Ln,
    Sqrt,
}

impl Function {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Function::Sin),
            "cos" => Some(Function::Cos),
            "tan" => Some(Function::Tan),
            "log10" => Some(Function::Log10),
            "ln" => Some(Function::Ln),
            "sqrt" => Some(Function::Sqrt),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Log10 => "log10",
            Function::Ln => "ln",
            Function::Sqrt => "sqrt",
        }
    }

    /// Applies the function, rejecting arguments outside its real domain.
    pub fn apply(self, x: f64) -> EvalResult<f64> {
        match self {
            Function::Sin => Ok(x.sin()),
            Function::Cos => Ok(x.cos()),
            Function::Tan => Ok(x.tan()),
            Function::Log10 | Function::Ln if x <= 0.0 => {
                Err(EvalError::domain("logarithm of a non-positive number"))
            }
            Function::Log10 => Ok(x.log10()),
            Function::Ln => Ok(x.ln()),
            Function::Sqrt if x < 0.0 => {
                Err(EvalError::domain("square root of a negative number"))
            }
            Function::Sqrt => Ok(x.sqrt()),
        }
    }
}

/// Represents an Abstract Syntax Tree node for expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Constant(Constant),

    Binary {
        left: Box<Expr>,
        operator: BinaryOp,
        right: Box<Expr>,
    },

    Unary {
        operator: UnaryOp,
        operand: Box<Expr>,
    },

    Percent(Box<Expr>),

    FunctionCall {
        function: Function,
        argument: Box<Expr>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnaryOp {
    Plus,
    Minus,
}

/// Lexical analyzer for tokenizing canonical expressions.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    current_char: Option<char>,
}

impl Lexer {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let current_char = chars.first().copied();

        Self {
            input: chars,
            position: 0,
            current_char,
        }
    }

    fn advance(&mut self) {
        self.position += 1;
        self.current_char = self.input.get(self.position).copied();
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position + 1).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Reads a decimal number such as `42`, `3.14`, `2.` or `.5`.
    fn read_number(&mut self) -> EvalResult<f64> {
        let mut number_str = String::new();

        while let Some(ch) = self.current_char {
            if ch.is_ascii_digit() {
                number_str.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if self.current_char == Some('.') {
            number_str.push('.');
            self.advance();

            while let Some(ch) = self.current_char {
                if ch.is_ascii_digit() {
                    number_str.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }
        }

        number_str
            .parse::<f64>()
            .map_err(|_| EvalError::syntax(format!("invalid number '{}'", number_str)))
    }

    fn read_identifier(&mut self) -> String {
        let mut identifier = String::new();

        while let Some(ch) = self.current_char {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                identifier.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        identifier
    }

    /// Gets the next token from the input.
    pub fn next_token(&mut self) -> EvalResult<Token> {
        self.skip_whitespace();

        let Some(ch) = self.current_char else {
            return Ok(Token::Eof);
        };

        let token = match ch {
            '0'..='9' | '.' => return self.read_number().map(Token::Number),

            'A'..='Z' | 'a'..='z' | '_' => return Ok(Token::Identifier(self.read_identifier())),

            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => {
                if self.peek() == Some('*') {
                    self.advance();
                    Token::Power
                } else {
                    Token::Multiply
                }
            }
            '/' => Token::Divide,
            '%' => Token::Percent,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,

            // Assignment, statement sequencing, argument lists, indexing and
            // string literals are outside the calculator language.
            '=' | ';' | ',' | ':' | '[' | ']' | '{' | '}' | '\'' | '"' => {
                return Err(EvalError::unsupported(format!(
                    "'{}' is not allowed in a calculation",
                    ch
                )));
            }

            _ => return Err(EvalError::syntax(format!("unexpected character '{}'", ch))),
        };

        self.advance();
        Ok(token)
    }
}

/// Recursive descent parser for canonical calculator expressions.
pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    depth: usize,
}

impl Parser {
    /// Creates a new parser for the given expression.
    pub fn new(input: &str) -> EvalResult<Self> {
        let mut lexer = Lexer::new(input);
        let current_token = lexer.next_token()?;

        Ok(Self {
            lexer,
            current_token,
            depth: 0,
        })
    }

    fn advance(&mut self) -> EvalResult<()> {
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, expected: Token) -> EvalResult<()> {
        if self.current_token == expected {
            self.advance()
        } else {
            Err(EvalError::syntax(format!(
                "expected {}, found {}",
                expected, self.current_token
            )))
        }
    }

    /// Parses the whole input as a single expression.
    pub fn parse(&mut self) -> EvalResult<Expr> {
        let expr = self.parse_additive()?;

        match &self.current_token {
            Token::Eof => Ok(expr),
            Token::RightParen => Err(EvalError::syntax("unbalanced parenthesis ')'")),
            Token::Identifier(name)
                if Function::from_name(name).is_none() && Constant::from_name(name).is_none() =>
            {
                Err(EvalError::unsupported(format!("unknown name '{}'", name)))
            }
            other => Err(EvalError::syntax(format!("unexpected {} after expression", other))),
        }
    }

    fn parse_additive(&mut self) -> EvalResult<Expr> {
        let mut left = self.parse_term()?;

        while matches!(self.current_token, Token::Plus | Token::Minus) {
            let op = match self.current_token {
                Token::Plus => BinaryOp::Add,
                Token::Minus => BinaryOp::Subtract,
                _ => unreachable!(),
            };
            self.advance()?;
            let right = self.parse_term()?;
            left = Expr::Binary {
                left: Box::new(left),
                operator: op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> EvalResult<Expr> {
        let mut left = self.parse_unary()?;

        while matches!(self.current_token, Token::Multiply | Token::Divide) {
            let op = match self.current_token {
                Token::Multiply => BinaryOp::Multiply,
                Token::Divide => BinaryOp::Divide,
                _ => unreachable!(),
            };
            self.advance()?;
            let right = self.parse_unary()?;
            left = Expr::Binary {
                left: Box::new(left),
                operator: op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Every recursive path passes through here, so the nesting guard lives here.
    fn parse_unary(&mut self) -> EvalResult<Expr> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(EvalError::InputTooComplex(format!(
                "nesting deeper than {} levels",
                MAX_NESTING_DEPTH
            )));
        }

        let result = match self.current_token {
            Token::Plus | Token::Minus => {
                let operator = if self.current_token == Token::Plus {
                    UnaryOp::Plus
                } else {
                    UnaryOp::Minus
                };
                self.advance()?;
                self.parse_unary().map(|operand| Expr::Unary {
                    operator,
                    operand: Box::new(operand),
                })
            }
            _ => self.parse_power(),
        };

        self.depth -= 1;
        result
    }

    /// Parses power expressions (right-associative).
    fn parse_power(&mut self) -> EvalResult<Expr> {
        let left = self.parse_postfix()?;

        if self.current_token == Token::Power {
            self.advance()?;
            let right = self.parse_unary()?;
            Ok(Expr::Binary {
                left: Box::new(left),
                operator: BinaryOp::Power,
                right: Box::new(right),
            })
        } else {
            Ok(left)
        }
    }

    fn parse_postfix(&mut self) -> EvalResult<Expr> {
        let mut expr = self.parse_primary()?;

        while self.current_token == Token::Percent {
            self.advance()?;
            expr = Expr::Percent(Box::new(expr));
        }

        Ok(expr)
    }

    fn parse_primary(&mut self) -> EvalResult<Expr> {
        match &self.current_token {
            Token::Number(value) => {
                let value = *value;
                self.advance()?;
                Ok(Expr::Number(value))
            }

            Token::Identifier(name) => {
                let name = name.clone();

                if let Some(function) = Function::from_name(&name) {
                    self.advance()?;
                    if self.current_token != Token::LeftParen {
                        return Err(EvalError::syntax(format!("expected '(' after {}", name)));
                    }
                    self.advance()?;
                    let argument = self.parse_additive()?;
                    self.expect(Token::RightParen)?;
                    Ok(Expr::FunctionCall {
                        function,
                        argument: Box::new(argument),
                    })
                } else if let Some(constant) = Constant::from_name(&name) {
                    self.advance()?;
                    Ok(Expr::Constant(constant))
                } else {
                    // Rejected before lexing further so that whatever follows
                    // (member access, assignment) cannot mask the cause.
                    Err(EvalError::unsupported(format!("unknown name '{}'", name)))
                }
            }

            Token::LeftParen => {
                self.advance()?;
                let expr = self.parse_additive()?;
                self.expect(Token::RightParen)?;
                Ok(expr)
            }

            Token::Eof => Err(EvalError::syntax("unexpected end of input")),

            other => Err(EvalError::syntax(format!("unexpected {}", other))),
        }
    }
}

/// Walks the AST and computes its value, failing on any non-finite step.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExpressionEvaluator;

impl ExpressionEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluates an expression AST to a finite numeric result.
    pub fn evaluate(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number(value) => finite(*value),

            Expr::Constant(constant) => Ok(constant.value()),

            Expr::Binary { left, operator, right } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;

                match operator {
                    BinaryOp::Add => finite(left_val + right_val),
                    BinaryOp::Subtract => finite(left_val - right_val),
                    BinaryOp::Multiply => finite(left_val * right_val),
                    BinaryOp::Divide => {
                        if right_val == 0.0 {
                            Err(EvalError::domain("division by zero"))
                        } else {
                            finite(left_val / right_val)
                        }
                    }
                    BinaryOp::Power => {
                        if left_val == 0.0 && right_val < 0.0 {
                            Err(EvalError::domain("zero cannot be raised to a negative power"))
                        } else {
                            finite(left_val.powf(right_val))
                        }
                    }
                }
            }

            Expr::Unary { operator, operand } => {
                let operand_val = self.evaluate(operand)?;

                match operator {
                    UnaryOp::Plus => Ok(operand_val),
                    UnaryOp::Minus => Ok(-operand_val),
                }
            }

            Expr::Percent(operand) => finite(self.evaluate(operand)? / 100.0),

            Expr::FunctionCall { function, argument } => {
                let argument_val = self.evaluate(argument)?;
                finite(function.apply(argument_val)?)
            }
        }
    }
}

fn finite(value: f64) -> EvalResult<f64> {
    if value.is_nan() {
        Err(EvalError::domain("result is not a real number"))
    } else if value.is_infinite() {
        Err(EvalError::domain("numeric result out of range"))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EvalErrorKind;

    fn eval(input: &str) -> EvalResult<f64> {
        let mut parser = Parser::new(input)?;
        let ast = parser.parse()?;
        ExpressionEvaluator::new().evaluate(&ast)
    }

    fn kind_of(input: &str) -> EvalErrorKind {
        eval(input).unwrap_err().kind()
    }

    #[test]
    fn test_lexer_numbers() {
        let mut lexer = Lexer::new("42 2.75 .5 2.");

        assert_eq!(lexer.next_token().unwrap(), Token::Number(42.0));
        assert_eq!(lexer.next_token().unwrap(), Token::Number(2.75));
        assert_eq!(lexer.next_token().unwrap(), Token::Number(0.5));
        assert_eq!(lexer.next_token().unwrap(), Token::Number(2.0));
        assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    }

    #[test]
    fn test_lexer_operators() {
        let mut lexer = Lexer::new("+ - * / ** % ( )");

        assert_eq!(lexer.next_token().unwrap(), Token::Plus);
        assert_eq!(lexer.next_token().unwrap(), Token::Minus);
        assert_eq!(lexer.next_token().unwrap(), Token::Multiply);
        assert_eq!(lexer.next_token().unwrap(), Token::Divide);
        assert_eq!(lexer.next_token().unwrap(), Token::Power);
        assert_eq!(lexer.next_token().unwrap(), Token::Percent);
        assert_eq!(lexer.next_token().unwrap(), Token::LeftParen);
        assert_eq!(lexer.next_token().unwrap(), Token::RightParen);
        assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    }

    #[test]
    fn test_lexer_identifiers() {
        let mut lexer = Lexer::new("sin log10 pi e");

        assert_eq!(lexer.next_token().unwrap(), Token::Identifier("sin".to_string()));
        assert_eq!(lexer.next_token().unwrap(), Token::Identifier("log10".to_string()));
        assert_eq!(lexer.next_token().unwrap(), Token::Identifier("pi".to_string()));
        assert_eq!(lexer.next_token().unwrap(), Token::Identifier("e".to_string()));
        assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    }

    #[test]
    fn test_lexer_error_handling() {
        assert!(matches!(Lexer::new("@").next_token(), Err(EvalError::SyntaxError(_))));
        assert!(matches!(Lexer::new(".").next_token(), Err(EvalError::SyntaxError(_))));
        assert!(matches!(
            Lexer::new("=").next_token(),
            Err(EvalError::UnsupportedConstruct(_))
        ));
    }

    #[test]
    fn test_parser_operator_precedence() {
        // 2 + 3 * 4 parses as 2 + (3 * 4)
        let expr = Parser::new("2 + 3 * 4").unwrap().parse().unwrap();
        match expr {
            Expr::Binary { left, operator: BinaryOp::Add, right } => {
                assert_eq!(*left, Expr::Number(2.0));
                match right.as_ref() {
                    Expr::Binary { left, operator: BinaryOp::Multiply, right } => {
                        assert_eq!(**left, Expr::Number(3.0));
                        assert_eq!(**right, Expr::Number(4.0));
                    }
                    _ => panic!("Expected multiplication as right operand"),
                }
            }
            _ => panic!("Expected addition at top level"),
        }
    }

    #[test]
    fn test_parser_power_right_associative() {
        let expr = Parser::new("2 ** 3 ** 2").unwrap().parse().unwrap();
        match expr {
            Expr::Binary { left, operator: BinaryOp::Power, right } => {
                assert_eq!(*left, Expr::Number(2.0));
                assert!(matches!(
                    right.as_ref(),
                    Expr::Binary { operator: BinaryOp::Power, .. }
                ));
            }
            _ => panic!("Expected power at top level"),
        }
        assert_eq!(eval("2**3**2").unwrap(), 512.0);
    }

    #[test]
    fn test_parser_unary_binds_looser_than_power() {
        let expr = Parser::new("-2**2").unwrap().parse().unwrap();
        match expr {
            Expr::Unary { operator: UnaryOp::Minus, operand } => {
                assert!(matches!(
                    operand.as_ref(),
                    Expr::Binary { operator: BinaryOp::Power, .. }
                ));
            }
            _ => panic!("Expected unary minus at top level"),
        }
        assert_eq!(eval("-2**2").unwrap(), -4.0);
        assert_eq!(eval("2**-1").unwrap(), 0.5);
        assert_eq!(eval("--3").unwrap(), 3.0);
    }

    #[test]
    fn test_parser_percent_postfix() {
        assert_eq!(
            Parser::new("50%").unwrap().parse().unwrap(),
            Expr::Percent(Box::new(Expr::Number(50.0)))
        );
        assert_eq!(eval("50%+10").unwrap(), 10.5);
        assert_eq!(eval("200*50%").unwrap(), 100.0);
        assert_eq!(eval("1/50%").unwrap(), 2.0);
        assert_eq!(eval("(20+30)%").unwrap(), 0.5);
        assert!((eval("5%%").unwrap() - 0.0005).abs() < 1e-15);
    }

    #[test]
    fn test_parser_function_calls() {
        let expr = Parser::new("sqrt(16)").unwrap().parse().unwrap();
        assert_eq!(
            expr,
            Expr::FunctionCall {
                function: Function::Sqrt,
                argument: Box::new(Expr::Number(16.0)),
            }
        );
    }

    #[test]
    fn test_parser_constants() {
        assert_eq!(
            Parser::new("pi").unwrap().parse().unwrap(),
            Expr::Constant(Constant::Pi)
        );
        assert_eq!(eval("e").unwrap(), consts::E);
    }

    #[test]
    fn test_evaluator_arithmetic() {
        assert_eq!(eval("2+3*4").unwrap(), 14.0);
        assert_eq!(eval("(2+3)*4").unwrap(), 20.0);
        assert_eq!(eval("10/4").unwrap(), 2.5);
        assert_eq!(eval("7-10").unwrap(), -3.0);
        assert_eq!(eval("+5").unwrap(), 5.0);
    }

    #[test]
    fn test_evaluator_functions() {
        assert!((eval("sin(pi/2)").unwrap() - 1.0).abs() < 1e-12);
        assert!((eval("cos(0)").unwrap() - 1.0).abs() < 1e-12);
        assert!((eval("tan(pi/4)").unwrap() - 1.0).abs() < 1e-12);
        assert!((eval("log10(1000)").unwrap() - 3.0).abs() < 1e-12);
        assert!((eval("ln(e)").unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(eval("sqrt(2)*sqrt(2)").unwrap().round(), 2.0);
    }

    #[test]
    fn test_domain_errors() {
        assert_eq!(kind_of("1/0"), EvalErrorKind::MathDomainError);
        assert_eq!(kind_of("1/(2-2)"), EvalErrorKind::MathDomainError);
        assert_eq!(kind_of("log10(0)"), EvalErrorKind::MathDomainError);
        assert_eq!(kind_of("ln(-1)"), EvalErrorKind::MathDomainError);
        assert_eq!(kind_of("sqrt(-4)"), EvalErrorKind::MathDomainError);
        assert_eq!(kind_of("0**-1"), EvalErrorKind::MathDomainError);
        assert_eq!(kind_of("(-8)**(1/3)"), EvalErrorKind::MathDomainError);
        assert_eq!(kind_of("10**400"), EvalErrorKind::MathDomainError);
    }

    #[test]
    fn test_syntax_errors() {
        assert_eq!(kind_of("2 +"), EvalErrorKind::SyntaxError);
        assert_eq!(kind_of("2+*3"), EvalErrorKind::SyntaxError);
        assert_eq!(kind_of("(2 + 3"), EvalErrorKind::SyntaxError);
        assert_eq!(kind_of("2 + 3)"), EvalErrorKind::SyntaxError);
        assert_eq!(kind_of("2 3"), EvalErrorKind::SyntaxError);
        assert_eq!(kind_of("sin 0"), EvalErrorKind::SyntaxError);
        assert_eq!(kind_of("sqrt("), EvalErrorKind::SyntaxError);
        assert_eq!(kind_of("()"), EvalErrorKind::SyntaxError);
    }

    #[test]
    fn test_unsupported_constructs() {
        assert_eq!(kind_of("import os"), EvalErrorKind::UnsupportedConstruct);
        assert_eq!(kind_of("x"), EvalErrorKind::UnsupportedConstruct);
        assert_eq!(kind_of("exp(1)"), EvalErrorKind::UnsupportedConstruct);
        assert_eq!(kind_of("math.pi"), EvalErrorKind::UnsupportedConstruct);
        assert_eq!(kind_of("x = 1"), EvalErrorKind::UnsupportedConstruct);
        assert_eq!(kind_of("1; 2"), EvalErrorKind::UnsupportedConstruct);
        assert_eq!(kind_of("2 + __import__"), EvalErrorKind::UnsupportedConstruct);
        assert_eq!(kind_of("2 x"), EvalErrorKind::UnsupportedConstruct);
        assert_eq!(kind_of("1 import os"), EvalErrorKind::UnsupportedConstruct);
        assert_eq!(kind_of("sin(0) foo"), EvalErrorKind::UnsupportedConstruct);

        // Known names after a complete expression are still adjacent operands.
        assert_eq!(kind_of("2 pi"), EvalErrorKind::SyntaxError);
        assert_eq!(kind_of("2 sin(0)"), EvalErrorKind::SyntaxError);
    }

    #[test]
    fn test_canonical_names_accepted() {
        assert_eq!(eval("sqrt(4)").unwrap(), 2.0);
        assert_eq!(eval("log10(100)").unwrap(), 2.0);
        assert_eq!(eval("pi").unwrap(), std::f64::consts::PI);
    }

    #[test]
    fn test_nesting_limit() {
        let shallow = format!("{}1{}", "(".repeat(20), ")".repeat(20));
        assert_eq!(eval(&shallow).unwrap(), 1.0);

        let deep = format!("{}1{}", "(".repeat(200), ")".repeat(200));
        assert_eq!(kind_of(&deep), EvalErrorKind::InputTooComplex);

        let minus_chain = format!("{}1", "-".repeat(200));
        assert_eq!(kind_of(&minus_chain), EvalErrorKind::InputTooComplex);
    }
}
