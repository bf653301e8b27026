use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    text::{Line, Text},
};

use crate::ui::widgets::style;

use super::{ScreenTransition, StartRequest};

const NAME_LIMIT: usize = 16;

/// Mode selection and name entry, shown before (and between) games.
#[derive(Debug)]
pub struct SetupScreen {
    stage: Stage,
}

#[derive(Debug)]
enum Stage {
    ModeSelect { vs_computer: bool },
    NameEntry(NameEntry),
}

#[derive(Debug)]
struct NameEntry {
    vs_computer: bool,
    fields: [String; 2],
    focus: usize,
    error: Option<&'static str>,
}

impl SetupScreen {
    pub fn new() -> Self {
        Self {
            stage: Stage::ModeSelect { vs_computer: false },
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> ScreenTransition {
        let Some(key) = event.as_key_event() else {
            return ScreenTransition::Stay;
        };

        match &mut self.stage {
            Stage::ModeSelect { vs_computer } => match key.code {
                KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                    *vs_computer = !*vs_computer;
                    ScreenTransition::Stay
                }
                KeyCode::Enter => {
                    let vs_computer = *vs_computer;
                    self.stage = Stage::NameEntry(NameEntry::new(vs_computer));
                    ScreenTransition::Stay
                }
                KeyCode::Char('q') | KeyCode::Esc => ScreenTransition::Exit,
                _ => ScreenTransition::Stay,
            },
            Stage::NameEntry(entry) => match key.code {
                KeyCode::Esc => {
                    let vs_computer = entry.vs_computer;
                    self.stage = Stage::ModeSelect { vs_computer };
                    ScreenTransition::Stay
                }
                KeyCode::Tab | KeyCode::Up | KeyCode::Down if !entry.vs_computer => {
                    entry.focus = 1 - entry.focus;
                    ScreenTransition::Stay
                }
                KeyCode::Backspace => {
                    entry.fields[entry.focus].pop();
                    ScreenTransition::Stay
                }
                KeyCode::Enter => entry.submit(),
                KeyCode::Char(ch) if !ch.is_control() => {
                    let field = &mut entry.fields[entry.focus];
                    if field.chars().count() < NAME_LIMIT {
                        field.push(ch);
                    }
                    ScreenTransition::Stay
                }
                _ => ScreenTransition::Stay,
            },
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn draw(&self, frame: &mut Frame) {
        let mut lines = vec![Line::styled("N O X O", style::STATUS), Line::raw("")];

        match &self.stage {
            Stage::ModeSelect { vs_computer } => {
                lines.push(Line::raw("Choose a game mode:"));
                lines.push(Line::raw(""));
                lines.push(mode_line("2 Players", !vs_computer));
                lines.push(mode_line("Vs Computer", *vs_computer));
            }
            Stage::NameEntry(entry) => {
                let prompt = if entry.vs_computer {
                    "Enter your name to play against the Bot:"
                } else {
                    "Enter the names for both players:"
                };
                lines.push(Line::raw(prompt));
                lines.push(Line::raw(""));
                lines.push(entry.field_line(0, "Player 1"));
                if !entry.vs_computer {
                    lines.push(entry.field_line(1, "Player 2"));
                }
                if let Some(error) = entry.error {
                    lines.push(Line::raw(""));
                    lines.push(Line::styled(error, style::NOTICE));
                }
            }
        }

        let help = match &self.stage {
            Stage::ModeSelect { .. } => "Controls: ↑ ↓ (Select) | Enter (Confirm) | Q (Quit)",
            Stage::NameEntry(entry) if entry.vs_computer => "Controls: Enter (Start) | Esc (Back)",
            Stage::NameEntry(_) => "Controls: Tab (Switch Field) | Enter (Start) | Esc (Back)",
        };

        let text = Text::from(lines).centered();
        let [main_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());
        let [text_area] = Layout::vertical([Constraint::Length(text.height() as u16)])
            .flex(Flex::Center)
            .areas(main_area);
        frame.render_widget(text, text_area);
        frame.render_widget(Text::styled(help, style::HELP).centered(), help_area);
    }
}

fn mode_line(label: &str, selected: bool) -> Line<'static> {
    if selected {
        Line::styled(format!("► {label}"), style::CURSOR)
    } else {
        Line::raw(format!("  {label}"))
    }
}

impl NameEntry {
    fn new(vs_computer: bool) -> Self {
        Self {
            vs_computer,
            fields: [String::new(), String::new()],
            focus: 0,
            error: None,
        }
    }

    fn submit(&mut self) -> ScreenTransition {
        let player1 = self.fields[0].trim().to_owned();
        let player2 = self.fields[1].trim().to_owned();
        if player1.is_empty() || (!self.vs_computer && player2.is_empty()) {
            self.error = Some("Please enter valid names for all players!");
            return ScreenTransition::Stay;
        }

        let request = if self.vs_computer {
            StartRequest::VsComputer { player1 }
        } else {
            StartRequest::TwoPlayer { player1, player2 }
        };
        ScreenTransition::ToGame(request)
    }

    fn field_line(&self, index: usize, label: &str) -> Line<'static> {
        let value = &self.fields[index];
        let focused = self.focus == index;
        let marker = if focused { "_" } else { "" };
        let text = format!("{label}: {value}{marker}");
        if focused {
            Line::styled(text, style::CURSOR)
        } else {
            Line::raw(text)
        }
    }
}
