use onecard_core::{parse_selection, Card, MoveSource, Selection, TableView};
use std::io::{self, BufRead, Write};

/// Human seat: prompts for a 1-based card number and reads one line.
pub struct PromptMoveSource<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl PromptMoveSource<io::StdinLock<'static>, io::Stdout> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptMoveSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, player: usize, count: usize) -> io::Result<String> {
        write!(
            self.output,
            "Player {}, choose a card to play (1~{}): ",
            player + 1,
            count
        )?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> MoveSource for PromptMoveSource<R, W> {
    fn select(&mut self, view: &TableView<'_>, legal: &[Card]) -> Selection {
        match self.prompt(view.current_player, legal.len()) {
            Ok(line) => parse_selection(&line, legal.len()),
            Err(err) => {
                tracing::warn!(%err, "could not read a selection");
                Selection::Invalid
            }
        }
    }
}
