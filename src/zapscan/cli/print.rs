use chrono::Utc;
use colored::{ColoredString, Colorize};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use zapscan::api::{CmdMessage, MessageLevel};
use zapscan::config::ZapConfig;
use zapscan::model::{ScanKind, ScanRecord};
use zapscan::presenter::{DisplayRecord, HistoryFilter};
use zapscan::result::{ResultView, ShareRequest};
use zapscan::theme::{Palette, Rgb};

pub const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;

fn paint(text: &str, color: Rgb) -> ColoredString {
    text.truecolor(color.0, color.1, color.2)
}

pub(super) fn print_messages(messages: &[CmdMessage], palette: &Palette) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", paint(&message.content, palette.primary)),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", paint(&message.content, palette.danger)),
        }
    }
}

pub(super) fn print_history(records: &[DisplayRecord], filter: HistoryFilter, palette: &Palette) {
    let tabs: Vec<String> = HistoryFilter::ALL
        .iter()
        .map(|f| {
            if *f == filter {
                format!("[{}]", f).bold().to_string()
            } else {
                format!(" {} ", f)
            }
        })
        .collect();
    println!("Filter {}", tabs.join(" "));
    println!();

    if records.is_empty() {
        println!("{}", paint("No history found", palette.text_secondary));
        return;
    }

    for dr in records {
        println!("{}", history_line(dr, palette));
    }
}

fn history_line(dr: &DisplayRecord, palette: &Palette) -> String {
    let idx = format!("{:>3}. ", dr.index);
    let icon = kind_icon(dr.record.kind);
    let time = format_time_ago(&dr.record);

    let fixed = idx.width() + icon.width() + 1 + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed);
    let data: String = dr
        .record
        .data
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    let shown = truncate_to_width(&data, available);
    let padding = available.saturating_sub(shown.width());

    format!(
        "{}{} {}{}{}",
        idx,
        paint(icon, palette.primary),
        shown,
        " ".repeat(padding),
        paint(&time, palette.text_secondary)
    )
}

fn kind_icon(kind: ScanKind) -> &'static str {
    match kind {
        ScanKind::Url => "[web]",
        ScanKind::Text => "[txt]",
    }
}

pub(super) fn print_view(view: &ResultView, palette: &Palette) {
    match view {
        ResultView::Web { uri } => {
            println!("{}", paint(view.title(), palette.primary).bold());
            println!("Open in web view: {}", uri.underline());
        }
        ResultView::Text { content } => {
            println!("{}", paint(view.title(), palette.primary).bold());
            println!("{}", "-".repeat(32));
            println!("{}", content);
        }
    }
}

pub(super) fn print_share(share: &ShareRequest) {
    match serde_json::to_string_pretty(share) {
        Ok(json) => println!("{}", json),
        Err(_) => println!("{}", share.message),
    }
}

pub(super) fn print_config(config: &ZapConfig) {
    for key in zapscan::config::CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

pub(super) fn describe(record: &ScanRecord) -> String {
    let when = record
        .saved_at()
        .map(|t| t.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();
    format!("{} {} ({})", kind_icon(record.kind), record.data, when)
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
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn format_time_ago(record: &ScanRecord) -> String {
    let Some(saved) = record.saved_at() else {
        return format!("{:>width$}", "", width = TIME_WIDTH);
    };
    let duration = Utc::now().signed_duration_since(saved);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
