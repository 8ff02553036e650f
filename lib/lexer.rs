use crate::{
    position::{Position, Range},
    token::{Token, TokenKind, TokenSource, BRANCH, ELSE, FALSE, FUNCTION, RETURN, TRUE},
};

pub struct Lexer {
    chars: Vec<char>,
    position: usize,
    row: usize,
    col: usize,
    last: Position,
    current: Token,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let mut lexer = Self {
            chars: input.chars().collect(),
            position: 0,
            row: 0,
            col: 0,
            last: Position::default(),
            current: Token::new(TokenKind::End, "", Range::default()),
        };
        lexer.current = lexer.next_token();
        lexer
    }

    fn next_token(&mut self) -> Token {
        while self.peek().is_some_and(|char| char.is_whitespace()) {
            self.bump();
        }

        let begin = self.here();
        let char = match self.bump() {
            Some(char) => char,
            None => return Token::new(TokenKind::End, "", Range::new(begin, begin)),
        };

        match char {
            '!' if self.follows_list_start() && !self.is_next_char('=') => {
                self.token(TokenKind::ListDelimiter, "!", begin)
            }
            '=' | '!' | '<' | '>' if self.is_next_char('=') => {
                self.bump();
                self.token(TokenKind::Operator, format!("{char}="), begin)
            }
            '=' | '!' | '<' | '>' | '+' | '-' | '*' | '/' => {
                self.token(TokenKind::Operator, char.to_string(), begin)
            }
            '(' | ')' => self.token(TokenKind::GroupDelimiter, char.to_string(), begin),
            '{' | '}' => self.token(TokenKind::BlockDelimiter, char.to_string(), begin),
            '[' | ']' => self.token(TokenKind::ListDelimiter, char.to_string(), begin),
            ',' | ':' | ';' => self.token(TokenKind::Separator, char.to_string(), begin),
            '\'' | '"' => self.read_string(char, begin),
            _ if char.is_ascii_digit() => {
                let mut literal = char.to_string();
                literal.push_str(&self.read_while(|char| char.is_ascii_digit() || char == '.'));
                self.token(TokenKind::Number, literal, begin)
            }
            _ if char.is_alphabetic() || char == '_' => {
                let mut literal = char.to_string();
                literal.push_str(&self.read_while(|char| char.is_alphanumeric() || char == '_'));
                let kind = match literal.as_str() {
                    FUNCTION | BRANCH | ELSE | RETURN => TokenKind::Keyword,
                    TRUE | FALSE => TokenKind::Boolean,
                    _ => TokenKind::Identifier,
                };
                self.token(kind, literal, begin)
            }
            _ => self.token(TokenKind::Illegal, char.to_string(), begin),
        }
    }

    fn read_string(&mut self, quote: char, begin: Position) -> Token {
        let literal = self.read_while(|char| char != quote);
        match self.bump() {
            Some(_) => self.token(TokenKind::String, literal, begin),
            None => self.token(TokenKind::IllegalString, literal, begin),
        }
    }

    fn token(&self, kind: TokenKind, value: impl Into<String>, begin: Position) -> Token {
        Token::new(kind, value, Range::new(begin, self.last))
    }

    fn here(&self) -> Position {
        Position::new(self.row, self.col)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let char = self.peek()?;
        self.last = self.here();
        self.position += 1;
        if char == '\n' {
            self.row += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
        Some(char)
    }

    fn is_next_char(&self, char: char) -> bool {
        self.peek() == Some(char)
    }

    // The char just consumed sits at `position - 1`; the one before it at `position - 2`.
    fn follows_list_start(&self) -> bool {
        self.position >= 2 && self.chars[self.position - 2] == '['
    }

    fn read_while(&mut self, condition: impl Fn(char) -> bool) -> String {
        let mut literal = String::new();
        while let Some(char) = self.peek() {
            if !condition(char) {
                break;
            }
            literal.push(char);
            self.bump();
        }
        literal
    }
}

impl TokenSource for Lexer {
    fn read(&self) -> &Token {
        &self.current
    }

    fn advance(&mut self) {
        if self.current.kind != TokenKind::End {
            self.current = self.next_token();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::new();
        while !lexer.is_end() {
            tokens.push(lexer.read().clone());
            lexer.advance();
        }
        tokens
    }

    fn kinds_and_values(input: &str) -> Vec<(TokenKind, String)> {
        lex(input)
            .into_iter()
            .map(|token| (token.kind, token.value))
            .collect()
    }

    #[test]
    fn test_lexer() {
        let input = r#"
            더하기 = 함수(x, y) {
                리턴 x + y;
            }
            만약 5 <= 10 { 참 } 아니면 { 거짓 }
            10 == 10 != 9 >= 1
            'foo bar' "baz"
            [1, 2.5] [!'a': 1]
        "#;

        let expected = vec![
            (TokenKind::Identifier, "더하기"),
            (TokenKind::Operator, "="),
            (TokenKind::Keyword, "함수"),
            (TokenKind::GroupDelimiter, "("),
            (TokenKind::Identifier, "x"),
            (TokenKind::Separator, ","),
            (TokenKind::Identifier, "y"),
            (TokenKind::GroupDelimiter, ")"),
            (TokenKind::BlockDelimiter, "{"),
            (TokenKind::Keyword, "리턴"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Operator, "+"),
            (TokenKind::Identifier, "y"),
            (TokenKind::Separator, ";"),
            (TokenKind::BlockDelimiter, "}"),
            (TokenKind::Keyword, "만약"),
            (TokenKind::Number, "5"),
            (TokenKind::Operator, "<="),
            (TokenKind::Number, "10"),
            (TokenKind::BlockDelimiter, "{"),
            (TokenKind::Boolean, "참"),
            (TokenKind::BlockDelimiter, "}"),
            (TokenKind::Keyword, "아니면"),
            (TokenKind::BlockDelimiter, "{"),
            (TokenKind::Boolean, "거짓"),
            (TokenKind::BlockDelimiter, "}"),
            (TokenKind::Number, "10"),
            (TokenKind::Operator, "=="),
            (TokenKind::Number, "10"),
            (TokenKind::Operator, "!="),
            (TokenKind::Number, "9"),
            (TokenKind::Operator, ">="),
            (TokenKind::Number, "1"),
            (TokenKind::String, "foo bar"),
            (TokenKind::String, "baz"),
            (TokenKind::ListDelimiter, "["),
            (TokenKind::Number, "1"),
            (TokenKind::Separator, ","),
            (TokenKind::Number, "2.5"),
            (TokenKind::ListDelimiter, "]"),
            (TokenKind::ListDelimiter, "["),
            (TokenKind::ListDelimiter, "!"),
            (TokenKind::String, "a"),
            (TokenKind::Separator, ":"),
            (TokenKind::Number, "1"),
            (TokenKind::ListDelimiter, "]"),
        ];
        let expected: Vec<(TokenKind, String)> = expected
            .into_iter()
            .map(|(kind, value)| (kind, value.to_string()))
            .collect();

        assert_eq!(kinds_and_values(input), expected);
    }

    #[test]
    fn bang_after_spaced_bracket_is_an_operator() {
        assert_eq!(
            kinds_and_values("[ !참]"),
            vec![
                (TokenKind::ListDelimiter, "[".to_string()),
                (TokenKind::Operator, "!".to_string()),
                (TokenKind::Boolean, "참".to_string()),
                (TokenKind::ListDelimiter, "]".to_string()),
            ]
        );
    }

    #[test]
    fn ranges_are_inclusive_and_track_rows() {
        let tokens = lex("abc == 'x'\n  42");
        let ranges: Vec<Range> = tokens.iter().map(|token| token.range).collect();
        assert_eq!(
            ranges,
            vec![
                Range::from_coords((0, 0), (0, 2)),
                Range::from_coords((0, 4), (0, 5)),
                Range::from_coords((0, 7), (0, 9)),
                Range::from_coords((1, 2), (1, 3)),
            ]
        );
    }

    #[test]
    fn illegal_tokens() {
        assert_eq!(
            kinds_and_values("'open"),
            vec![(TokenKind::IllegalString, "open".to_string())]
        );
        assert_eq!(
            kinds_and_values("@"),
            vec![(TokenKind::Illegal, "@".to_string())]
        );
    }

    #[test]
    fn end_is_sticky() {
        let mut lexer = Lexer::new("x");
        lexer.advance();
        assert!(lexer.is_end());
        lexer.advance();
        assert!(lexer.is_end());
        assert_eq!(lexer.read().range, Range::from_coords((0, 1), (0, 1)));
    }
}
