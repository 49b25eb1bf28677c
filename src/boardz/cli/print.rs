use boardz::api::{CmdMessage, DraftState, MessageLevel};
use boardz::config::BoardzConfig;
use boardz::counter::TextStats;
use boardz::model::{Mode, Note};
use boardz::profile::{repo_description, ProfileView};
use boardz::quiz::{Question, Quiz};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_notes(notes: &[Note]) {
    print!("{}", render_notes(notes));
}

/// One line per note: id, bold title, then as much content as fits.
pub(super) fn render_notes(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes found.\n".to_string();
    }

    let id_width = notes
        .iter()
        .map(|n| n.id.to_string().len())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for note in notes {
        let id = format!("{:>width$}. ", note.id, width = id_width);
        let available = LINE_WIDTH.saturating_sub(id.width());

        let title = truncate_to_width(&flatten(&note.title), available);
        let remaining = available.saturating_sub(title.width() + 2);
        let preview = if remaining > 1 {
            truncate_to_width(&flatten(&note.content), remaining)
        } else {
            String::new()
        };

        out.push_str(&format!(
            "{}{}  {}\n",
            id.yellow(),
            title.bold(),
            preview.dimmed()
        ));
    }
    out
}

pub(super) fn print_draft(state: &DraftState) {
    let mode = match state.mode {
        Mode::Creating => "new note".to_string(),
        Mode::Editing(id) => format!("editing note {}", id),
    };
    println!("{}", format!("[{}]", mode).cyan());
    println!("  title:   {}", state.draft.title);
    println!("  content: {}", state.draft.content);
}

pub(super) fn prompt(mode: Mode) -> String {
    match mode {
        Mode::Creating => "new> ".to_string(),
        Mode::Editing(id) => format!("edit {}> ", id),
    }
}

pub(super) fn print_profile(view: &ProfileView) {
    print!("{}", render_profile(view));
}

pub(super) fn render_profile(view: &ProfileView) -> String {
    let p = &view.profile;
    let mut out = String::new();
    out.push_str(&format!("{}  {}\n", p.login.bold(), p.html_url.underline()));
    if !view.bio().is_empty() {
        out.push_str(&format!("{}\n", view.bio()));
    }
    out.push_str(&format!(
        "{} Followers  {} Following  {}\n",
        p.followers,
        p.following,
        view.location()
    ));
    out.push_str(&format!("{}\n", p.avatar_url.dimmed()));

    if !view.repos.is_empty() {
        out.push_str(&format!("\n{}\n", "Repositories".bold()));
        for repo in &view.repos {
            out.push_str(&format!(
                "\n  {}  ★ {}  ⑂ {}\n",
                repo.name.cyan(),
                repo.stargazers_count,
                repo.forks_count
            ));
            out.push_str(&format!("  {}\n", repo_description(repo)));
            out.push_str(&format!("  {}\n", view.repo_url(repo).dimmed()));
        }
    }
    out
}

pub(super) fn print_stats(stats: &TextStats) {
    println!(
        "{} words  {} characters",
        stats.words.to_string().bold(),
        stats.chars.to_string().bold()
    );
}

pub(super) fn print_config(config: &BoardzConfig) {
    for (key, value) in config.entries() {
        println!("{} = {}", key, value);
    }
}

pub(super) fn print_question(quiz: &Quiz, question: &Question) {
    println!();
    println!(
        "{}",
        format!("Question {}/{}", quiz.position() + 1, quiz.len()).bold()
    );
    println!("{}", question.text);
    for (i, answer) in question.answers.iter().enumerate() {
        println!("  {}. {}", i + 1, answer.text);
    }
    println!("{}", format!("Score: {}", quiz.score()).dimmed());
}

fn flatten(s: &str) -> String {
    s.chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
