use super::*;
use pretty_assertions::assert_eq;
use sharp_ir::TokenKind;

fn value(outcome: ParseOutcome<i32>) -> Option<i32> {
    match outcome {
        ParseOutcome::ConsumedOk { value } => Some(value),
        ParseOutcome::EmptyErr { .. } => None,
    }
}

#[test]
fn test_constructors() {
    assert_eq!(value(ParseOutcome::consumed_ok(42)), Some(42));

    let expected = TokenSet::new().with(TokenKind::LParen);
    match ParseOutcome::<i32>::empty_err(expected, 5) {
        ParseOutcome::EmptyErr { expected, position } => {
            assert!(expected.contains(&TokenKind::LParen));
            assert_eq!(position, 5);
        }
        ParseOutcome::ConsumedOk { value } => panic!("expected EmptyErr, got {value}"),
    }
}

// === Macro tests ===

#[derive(Clone, Copy)]
struct MockSnapshot {
    position: usize,
}

/// Stands in for the parser: a position that alternatives may advance.
struct MockParser {
    position: usize,
}

impl MockParser {
    fn new() -> Self {
        Self { position: 0 }
    }

    fn snapshot(&self) -> MockSnapshot {
        MockSnapshot {
            position: self.position,
        }
    }

    fn restore(&mut self, snap: MockSnapshot) {
        self.position = snap.position;
    }

    fn offset(&self) -> usize {
        self.position
    }

    fn parse_consuming(&mut self) -> ParseOutcome<i32> {
        self.position += 1;
        ParseOutcome::consumed_ok(42)
    }

    fn parse_from_start(&mut self) -> ParseOutcome<i32> {
        assert_eq!(self.position, 0, "alternative must start from the original position");
        self.position += 2;
        ParseOutcome::consumed_ok(7)
    }

    /// Advances, then declines. The macro must rewind.
    fn parse_soft_fail(&mut self) -> ParseOutcome<i32> {
        self.position += 3;
        ParseOutcome::empty_err(TokenSet::new().with(TokenKind::LParen), self.position)
    }

    fn parse_soft_fail_bracket(&mut self) -> ParseOutcome<i32> {
        ParseOutcome::empty_err(TokenSet::new().with(TokenKind::LBracket), self.position)
    }
}

#[test]
fn test_one_of_first_succeeds() {
    let mut parser = MockParser::new();
    let result = one_of!(parser, parser.parse_consuming(), parser.parse_soft_fail());
    assert_eq!(value(result), Some(42));
    assert_eq!(parser.position, 1);
}

#[test]
fn test_one_of_rewinds_between_alternatives() {
    let mut parser = MockParser::new();
    let result = one_of!(parser, parser.parse_soft_fail(), parser.parse_from_start());
    assert_eq!(value(result), Some(7));
    assert_eq!(parser.position, 2);
}

#[test]
fn test_one_of_accumulates_expected() {
    let mut parser = MockParser::new();
    let result = one_of!(
        parser,
        parser.parse_soft_fail(),
        parser.parse_soft_fail_bracket(),
    );
    match result {
        ParseOutcome::EmptyErr { expected, position } => {
            assert!(expected.contains(&TokenKind::LParen));
            assert!(expected.contains(&TokenKind::LBracket));
            assert_eq!(position, 3);
        }
        ParseOutcome::ConsumedOk { value } => panic!("expected EmptyErr, got {value}"),
    }
    assert_eq!(parser.position, 0);
}
