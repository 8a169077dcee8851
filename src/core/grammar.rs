//! Recursive-descent matcher for the amount grammar.
//!
//! Accepts exactly the same language as the regex in [`super::validator`],
//! without a regex engine. Each rule consumes from a byte cursor and reports
//! whether it matched. No rule needs to backtrack: symbol letters, digits and
//! separators never overlap, so greedy consumption decides every alternative.
//!
//! ```text
//! Line          ::= Symbol? Amount
//! Symbol        ::= "$" | Letters "$"?
//! Amount        ::= "-" Plain | "(" Plain ")" | Plain
//! Plain         ::= Integer "," Digit{2,}
//! Integer       ::= "0" | Digit19 Digit{0,2} | Digit19 Digit? ("." Digit{3})+
//! ```

use crate::domain::ports::LineValidator;

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_if(&mut self, pred: impl Fn(u8) -> bool) -> bool {
        match self.peek() {
            Some(b) if pred(b) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    /// Consumes up to `max` bytes matching `pred`, returning how many were taken.
    fn eat_while(&mut self, pred: impl Fn(u8) -> bool, max: usize) -> usize {
        let mut taken = 0;
        while taken < max && self.eat_if(&pred) {
            taken += 1;
        }
        taken
    }
}

fn is_nonzero_digit(b: u8) -> bool {
    matches!(b, b'1'..=b'9')
}

/// The symbol is optional, so this never fails; it only advances past one if present.
fn skip_symbol(cur: &mut Cursor<'_>) {
    if cur.eat(b'$') {
        return;
    }
    if cur.eat_while(|b| b.is_ascii_alphabetic(), usize::MAX) > 0 {
        cur.eat(b'$');
    }
}

fn integer_part(cur: &mut Cursor<'_>) -> bool {
    if cur.eat(b'0') {
        return true;
    }
    if !cur.eat_if(is_nonzero_digit) {
        return false;
    }
    let lead = 1 + cur.eat_while(|b| b.is_ascii_digit(), 2);
    if lead == 3 {
        // A three-digit lead cannot start a thousands group.
        return true;
    }

    loop {
        let save = cur.pos;
        if !(cur.eat(b'.') && cur.eat_while(|b| b.is_ascii_digit(), 3) == 3) {
            cur.pos = save;
            return true;
        }
    }
}

fn plain_amount(cur: &mut Cursor<'_>) -> bool {
    integer_part(cur) && cur.eat(b',') && cur.eat_while(|b| b.is_ascii_digit(), usize::MAX) >= 2
}

fn amount(cur: &mut Cursor<'_>) -> bool {
    if cur.eat(b'-') {
        return plain_amount(cur);
    }
    if cur.eat(b'(') {
        return plain_amount(cur) && cur.eat(b')');
    }
    plain_amount(cur)
}

/// Whole-string match without a regex engine.
pub fn matches_grammar(line: &str) -> bool {
    let mut cur = Cursor::new(line);
    skip_symbol(&mut cur);
    amount(&mut cur) && cur.eof()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GrammarValidator;

impl LineValidator for GrammarValidator {
    fn is_valid(&self, line: &str) -> bool {
        matches_grammar(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validator::is_valid_amount;

    #[test]
    fn test_reference_cases() {
        assert!(matches_grammar("1,00"));
        assert!(matches_grammar("0,00"));
        assert!(!matches_grammar("01,00"));
        assert!(matches_grammar("1.234,56"));
        assert!(!matches_grammar("1.23,56"));
        assert!(matches_grammar("$1.234,00"));
        assert!(matches_grammar("R$1.234,00"));
        assert!(matches_grammar("R$-1.234,00"));
        assert!(matches_grammar("(1.234,00)"));
        assert!(matches_grammar("$(1.234,00)"));
        assert!(!matches_grammar("-1.234,0"));
        assert!(!matches_grammar("1.234"));
        assert!(!matches_grammar("$"));
        assert!(!matches_grammar(""));
    }

    #[test]
    fn test_three_digit_lead_cannot_group() {
        assert!(matches_grammar("123,00"));
        assert!(!matches_grammar("123.456,00"));
        assert!(matches_grammar("12.345.678,00"));
    }

    #[test]
    fn test_trailing_input_rejected() {
        assert!(!matches_grammar("1,00)"));
        assert!(!matches_grammar("(1,00)x"));
        assert!(!matches_grammar("1.234.,00"));
        assert!(!matches_grammar("1.2345,00"));
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert!(!matches_grammar("Ré$1,00"));
        assert!(!matches_grammar("1,0٠"));
    }

    /// Every string up to five symbols over the grammar's alphabet.
    #[test]
    fn test_agrees_with_regex_exhaustively() {
        const ALPHABET: [char; 11] = ['0', '1', '9', '.', ',', '-', '(', ')', '$', 'R', ' '];
        let mut frontier = vec![String::new()];
        for _ in 0..5 {
            let mut next = Vec::with_capacity(frontier.len() * ALPHABET.len());
            for prefix in &frontier {
                for c in ALPHABET {
                    let mut s = prefix.clone();
                    s.push(c);
                    assert_eq!(
                        matches_grammar(&s),
                        is_valid_amount(&s),
                        "validators disagree on {s:?}"
                    );
                    next.push(s);
                }
            }
            frontier = next;
        }
    }

    #[test]
    fn test_agrees_with_regex_on_longer_samples() {
        let samples = [
            "USD$1.000.000,00",
            "USD$$1.000.000,00",
            "abc(99.999,1234)",
            "abc-(99.999,12)",
            "$-0,00",
            "$-00,00",
            "R$12.345.678.901,99",
            "R$12.345.678.9012,99",
            "1.000,00.000",
            "(((1,00)))",
        ];
        for s in samples {
            assert_eq!(matches_grammar(s), is_valid_amount(s), "validators disagree on {s:?}");
        }
    }
}
