use log::debug;

use crate::line::{LineKind, ListKind, ListState};

/// Group runs of list item lines into `<ul>`/`<ol>` blocks.
///
/// A whole run becomes one output line: `<ul><li>a</li><li>b</li></ul>`. Any
/// non-item line, or an item of the other kind, closes the open list first.
/// Output lines are joined with `\n`, so a trailing line terminator in the input
/// is not carried over.
pub fn lists(text: &str) -> String {
    let mut state = ScanState::default();

    for line in text.lines() {
        process_line(line, &mut state);
    }

    state.finish()
}

#[derive(Default)]
struct ScanState {
    list: ListState,
    // Completed output lines
    lines: Vec<String>,
    // Markup for the list currently open, flushed into `lines` on close
    run: String,
}

fn process_line(line: &str, state: &mut ScanState) {
    match LineKind::classify(line) {
        LineKind::Item { kind, content } => {
            if state.list != ListState::Open(kind) {
                state.close_list();
                state.open_list(kind);
            }
            state.run.push_str("<li>");
            state.run.push_str(content);
            state.run.push_str("</li>");
        }
        LineKind::Plain => {
            state.close_list();
            state.lines.push(line.to_string());
        }
    }
}

impl ScanState {
    fn open_list(&mut self, kind: ListKind) {
        debug!("opening {kind:?} list at output line {}", self.lines.len() + 1);
        self.run.push_str(kind.open_tag());
        self.list = ListState::Open(kind);
    }

    fn close_list(&mut self) {
        if let ListState::Open(kind) = self.list {
            let mut run = std::mem::take(&mut self.run);
            run.push_str(kind.close_tag());
            self.lines.push(run);
            self.list = ListState::Closed;
        }
    }

    fn finish(mut self) -> String {
        self.close_list();
        self.lines.join("\n")
    }
}
