//! Splitting a raw input line into argument strings.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Outside any argument, skipping whitespace.
    Between,
    /// Accumulating an unquoted stretch of the current argument.
    Word,
    /// Inside a single-quoted literal region of the current argument.
    Quoted,
}

struct Splitter {
    state: State,
    current: String,
    tokens: Vec<String>,
}

impl Splitter {
    fn new() -> Self {
        Splitter {
            state: State::Between,
            current: String::new(),
            tokens: Vec::new(),
        }
    }

    fn feed(&mut self, ch: char) {
        match self.state {
            State::Between => match ch {
                c if c.is_whitespace() => {}
                '\'' => self.state = State::Quoted,
                c => {
                    self.current.push(c);
                    self.state = State::Word;
                }
            },
            State::Word => match ch {
                c if c.is_whitespace() => {
                    self.tokens.push(std::mem::take(&mut self.current));
                    self.state = State::Between;
                }
                '\'' => self.state = State::Quoted,
                c => self.current.push(c),
            },
            // Whitespace is literal here; only the closing quote leaves the
            // region, and it does not end the argument.
            State::Quoted => match ch {
                '\'' => self.state = State::Word,
                c => self.current.push(c),
            },
        }
    }

    fn finish(mut self) -> Vec<String> {
        if self.state != State::Between {
            self.tokens.push(self.current);
        }
        self.tokens
    }
}

/// Split `line` into arguments.
///
/// Unquoted whitespace separates arguments and runs of it collapse, so blank
/// input yields an empty sequence. A single quote opens a literal region in
/// which every character, whitespace included, is kept; the quote characters
/// themselves are dropped and a closing quote does not end the argument
/// (`a'b c'd` is the one argument `ab cd`). A quoted empty region (`''`)
/// yields an empty argument. A line that ends inside an open region keeps the
/// remainder as literal text rather than dropping it, so tokenization never
/// fails.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut splitter = Splitter::new();
    for ch in line.chars() {
        splitter.feed(ch);
    }
    splitter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(tokenize("echo hello world"), owned(&["echo", "hello", "world"]));
    }

    #[test]
    fn collapses_runs_of_whitespace() {
        assert_eq!(tokenize("echo hello   world"), owned(&["echo", "hello", "world"]));
        assert_eq!(tokenize("  a \t b  "), owned(&["a", "b"]));
    }

    #[test]
    fn blank_input_yields_nothing() {
        assert_eq!(tokenize(""), Vec::<String>::new());
        assert_eq!(tokenize("   \t  "), Vec::<String>::new());
    }

    #[test]
    fn single_quotes_preserve_whitespace() {
        assert_eq!(tokenize("'a b' c"), owned(&["a b", "c"]));
        assert_eq!(tokenize("echo 'hello   world'"), owned(&["echo", "hello   world"]));
    }

    #[test]
    fn quote_characters_are_not_part_of_the_argument() {
        assert_eq!(tokenize("echo 'hello'"), owned(&["echo", "hello"]));
    }

    #[test]
    fn closing_quote_does_not_end_the_argument() {
        assert_eq!(tokenize("a'b c'd"), owned(&["ab cd"]));
        assert_eq!(tokenize("pre'fix' rest"), owned(&["prefix", "rest"]));
    }

    #[test]
    fn quoted_empty_region_is_an_empty_argument() {
        assert_eq!(tokenize("''"), owned(&[""]));
        assert_eq!(tokenize("echo '' x"), owned(&["echo", "", "x"]));
    }

    #[test]
    fn unmatched_quote_keeps_the_rest_of_the_line() {
        assert_eq!(tokenize("echo 'abc def"), owned(&["echo", "abc def"]));
        assert_eq!(tokenize("echo '"), owned(&["echo", ""]));
    }
}
