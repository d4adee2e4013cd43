use crate::error::{Error, Result};
use crate::expr::ast::Expr;
use crate::expr::token::{tokenize, Token};

/// Parses a boolean expression into an [`Expr`].
///
/// Precedence, loosest to tightest: `or` < `xor` < `and` < `not`. All
/// binary operators are left-associative.
pub fn parse(src: &str) -> Result<Expr> {
    let tokens = tokenize(src)?;
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.parse_or()?;

    if parser.pos != parser.tokens.len() {
        return Err(Error::ExprSyntax {
            position: parser.pos,
            message: format!("unexpected trailing {:?}", parser.tokens[parser.pos]),
        });
    }

    Ok(expr)
}

struct Parser {
    tokens: Vec<Token>,
    /// Token index, reported in errors in place of a byte offset.
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, expected: Token) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn parse_or(&mut self) -> Result<Expr> {
        let mut lhs = self.parse_xor()?;
        while self.eat(Token::Or) {
            let rhs = self.parse_xor()?;
            lhs = Expr::Or(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_xor(&mut self) -> Result<Expr> {
        let mut lhs = self.parse_and()?;
        while self.eat(Token::Xor) {
            let rhs = self.parse_and()?;
            lhs = Expr::Xor(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_and(&mut self) -> Result<Expr> {
        let mut lhs = self.parse_not()?;
        while self.eat(Token::And) {
            let rhs = self.parse_not()?;
            lhs = Expr::And(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_not(&mut self) -> Result<Expr> {
        if self.eat(Token::Not) {
            return Ok(Expr::Not(Box::new(self.parse_not()?)));
        }
        self.parse_atom()
    }

    fn parse_atom(&mut self) -> Result<Expr> {
        match self.bump() {
            Some(Token::Literal(v)) => Ok(Expr::Literal(v)),
            Some(Token::Var(k)) => Ok(Expr::Var(k)),
            Some(Token::LParen) => {
                let inner = self.parse_or()?;
                if !self.eat(Token::RParen) {
                    return Err(Error::ExprSyntax {
                        position: self.pos,
                        message: "expected closing parenthesis".to_owned(),
                    });
                }
                Ok(inner)
            }
            other => Err(Error::ExprSyntax {
                position: self.pos,
                message: match other {
                    Some(token) => format!("expected a value, found {token:?}"),
                    None => "expression ended unexpectedly".to_owned(),
                },
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(src: &str, vars: &[bool]) -> bool {
        parse(src).unwrap().eval(vars).unwrap()
    }

    #[test]
    fn basic_gates() {
        assert!(!eval("X1 and X2", &[true, false]));
        assert!(eval("X1 and X2", &[true, true]));
        assert!(eval("X1 or X2", &[true, false]));
        assert!(eval("X1 xor X2", &[true, false]));
        assert!(!eval("X1 xor X2", &[true, true]));
        assert!(eval("not X1", &[false]));
    }

    #[test]
    fn not_binds_tighter_than_and() {
        // "not X1 and X2" must read as "(not X1) and X2".
        assert!(eval("not X1 and X2", &[false, true]));
        assert!(!eval("not (X1 and X2)", &[true, true]));
    }

    #[test]
    fn and_binds_tighter_than_or() {
        // "X1 or X2 and X3" must read as "X1 or (X2 and X3)".
        assert!(!eval("X1 or X2 and X3", &[false, true, false]));
        assert!(eval("(X1 or X2) and X3", &[false, true, true]));
    }

    #[test]
    fn symbolic_forms_match_keywords() {
        for vars in [[false, false], [false, true], [true, false], [true, true]] {
            assert_eq!(eval("X1 & X2", &vars), eval("X1 and X2", &vars));
            assert_eq!(eval("X1 | X2", &vars), eval("X1 or X2", &vars));
            assert_eq!(eval("X1 ^ X2", &vars), eval("X1 xor X2", &vars));
            assert_eq!(eval("!X1", &vars), eval("not X1", &vars));
        }
    }

    #[test]
    fn literals_participate() {
        assert!(eval("1", &[]));
        assert!(!eval("0 and 1", &[]));
        assert!(eval("X1 or 1", &[false]));
    }

    #[test]
    fn double_negation() {
        assert!(eval("not not X1", &[true]));
    }

    #[test]
    fn trailing_garbage_is_rejected() {
        assert!(matches!(parse("X1 X2"), Err(Error::ExprSyntax { .. })));
        assert!(matches!(parse("X1 and"), Err(Error::ExprSyntax { .. })));
        assert!(matches!(parse("(X1"), Err(Error::ExprSyntax { .. })));
        assert!(matches!(parse(""), Err(Error::ExprSyntax { .. })));
    }

    #[test]
    fn out_of_range_variable_fails_at_eval() {
        let expr = parse("X3").unwrap();
        assert_eq!(
            expr.eval(&[false, true]),
            Err(Error::UnknownVariable { name: "X3".to_owned() })
        );
    }
}
