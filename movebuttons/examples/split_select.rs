//! Interactive split multi-select in the terminal.
//!
//! Up/Down move the cursor, Space toggles the option under it, Tab switches
//! list, `>` / `<` press Add / Remove, `u` / `d` press Move up / Move down,
//! `q` or Esc quits and prints the chosen values.

use std::fs::File;
use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType},
};
use formdom::{Document, NodeId};
use movebuttons::{
    init_move_buttons, value_from_document, SplitMultiSelect, SplitMultiSelectHandle,
};
use simplelog::{Config, LevelFilter, WriteLogger};
use unicode_width::UnicodeWidthStr;

const FIELD: &str = "fruits";

struct Demo {
    doc: Document,
    lists: [NodeId; 2],
    focus: usize,
    cursor: [usize; 2],
    add: Option<NodeId>,
    remove: Option<NodeId>,
    up: Option<NodeId>,
    down: Option<NodeId>,
}

impl Demo {
    fn new() -> io::Result<Self> {
        let mut doc = Document::new();
        let body = doc.body();
        let SplitMultiSelectHandle {
            available, chosen, ..
        } = SplitMultiSelect::new(
            FIELD,
            [
                ("apple", "Apple"),
                ("banana", "Banana"),
                ("cherry", "Cherry"),
                ("date", "Date"),
                ("elderberry", "Elderberry"),
                ("fig", "Fig"),
                ("grape", "Grape"),
            ],
        )
        .value(["cherry"])
        .ordering(true)
        .mount(&mut doc, body)
        .map_err(io::Error::other)?;

        let wiring = init_move_buttons(&mut doc).map_err(io::Error::other)?;
        log::info!("wired {} button(s)", wiring.wired());

        let button = |doc: &Document, selector: String| doc.query_selector(&selector).ok().flatten();
        let add = button(&doc, format!(".move-option[data-source={FIELD}_0]"));
        let remove = button(&doc, format!(".move-option[data-source={FIELD}_1]"));
        let up = button(&doc, format!(".move-option-up[data-target={FIELD}_1]"));
        let down = button(&doc, format!(".move-option-down[data-target={FIELD}_1]"));

        Ok(Self {
            doc,
            lists: [available, chosen],
            focus: 0,
            cursor: [0, 0],
            add,
            remove,
            up,
            down,
        })
    }

    fn focused_options(&self) -> Vec<NodeId> {
        self.doc.options(self.lists[self.focus])
    }

    fn clamp_cursors(&mut self) {
        for (i, &list) in self.lists.iter().enumerate() {
            let len = self.doc.options(list).len();
            self.cursor[i] = self.cursor[i].min(len.saturating_sub(1));
        }
    }

    fn press(&mut self, button: Option<NodeId>) {
        let Some(button) = button else {
            return;
        };
        if let Err(e) = self.doc.click(button) {
            log::warn!("click failed: {e}");
        }
        self.clamp_cursors();
    }

    /// Returns false when the demo should exit.
    fn handle(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Tab => self.focus = 1 - self.focus,
            KeyCode::Up => self.cursor[self.focus] = self.cursor[self.focus].saturating_sub(1),
            KeyCode::Down => {
                let len = self.focused_options().len();
                if self.cursor[self.focus] + 1 < len {
                    self.cursor[self.focus] += 1;
                }
            }
            KeyCode::Char(' ') => {
                if let Some(&option) = self.focused_options().get(self.cursor[self.focus]) {
                    let selected = self.doc.is_selected(option);
                    if let Err(e) = self.doc.set_selected(option, !selected) {
                        log::warn!("toggle failed: {e}");
                    }
                }
            }
            KeyCode::Char('>') => self.press(self.add),
            KeyCode::Char('<') => self.press(self.remove),
            KeyCode::Char('u') => self.press(self.up),
            KeyCode::Char('d') => self.press(self.down),
            _ => {}
        }
        true
    }

    fn cell(&self, list: usize, row: usize) -> String {
        let Some(&option) = self.doc.options(self.lists[list]).get(row) else {
            return String::new();
        };
        let mark = if self.doc.is_selected(option) { "[x]" } else { "[ ]" };
        format!("{mark} {}", self.doc.option_label(option))
    }

    fn render(&self, out: &mut impl Write) -> io::Result<()> {
        let rows = self
            .lists
            .iter()
            .map(|&list| self.doc.options(list).len())
            .max()
            .unwrap_or(0);
        let width = (0..rows)
            .map(|row| self.cell(0, row).width())
            .chain(["Available".width()])
            .max()
            .unwrap_or(0)
            + 4;

        queue!(out, cursor::MoveTo(0, 0), Clear(ClearType::All))?;
        queue!(
            out,
            Print(pad("Available", width)),
            Print("Chosen"),
            cursor::MoveToNextLine(1)
        )?;

        for row in 0..rows {
            for list in 0..2 {
                let text = self.cell(list, row);
                let under_cursor = list == self.focus && row == self.cursor[list] && !text.is_empty();
                if under_cursor {
                    queue!(out, SetAttribute(Attribute::Reverse))?;
                }
                queue!(out, Print(&text), SetAttribute(Attribute::Reset))?;
                if list == 0 {
                    queue!(out, Print(" ".repeat(width.saturating_sub(text.width()))))?;
                }
            }
            queue!(out, cursor::MoveToNextLine(1))?;
        }

        queue!(
            out,
            cursor::MoveToNextLine(1),
            Print("space select  tab switch  > add  < remove  u/d reorder  q quit")
        )?;
        out.flush()
    }
}

fn pad(text: &str, width: usize) -> String {
    format!("{text}{}", " ".repeat(width.saturating_sub(text.width())))
}

fn run(demo: &mut Demo, out: &mut impl Write) -> io::Result<()> {
    loop {
        demo.render(out)?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && !demo.handle(key.code) {
                return Ok(());
            }
        }
    }
}

fn main() -> io::Result<()> {
    match File::create("split_select.log") {
        Ok(log_file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
                eprintln!("logger unavailable: {e}");
            }
        }
        Err(e) => eprintln!("cannot create log file: {e}"),
    }

    let mut demo = Demo::new()?;
    let mut stdout = io::stdout();

    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut demo, &mut stdout);

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result?;

    let value = value_from_document(&demo.doc, FIELD);
    println!("{FIELD}: {}", value.join(", "));
    Ok(())
}
