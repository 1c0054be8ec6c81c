use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

const BINDINGS: &[(&str, &str)] = &[
    (" \u{2191}\u{2193}/jk", "Mover o cursor"),
    (" g/G", "Primeira / última tarefa"),
    (" Enter/Espaço", "Concluir a tarefa selecionada"),
    (" a", "Nova tarefa"),
    (" d", "Alternar modo escuro"),
    (" s", "Alternar baixo estímulo"),
    (" ?", "Mostrar / esconder esta ajuda"),
    (" q, Ctrl+C", "Sair"),
];

const FORM_BINDINGS: &[(&str, &str)] = &[
    (" Tab/\u{2193}", "Próximo campo"),
    (" Shift+Tab/\u{2191}", "Campo anterior"),
    (" Enter", "Salvar (ou Cancelar, se focado)"),
];

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Atalhos", header_style)));
    lines.push(Line::from(""));
    for (key, desc) in BINDINGS {
        add_binding(&mut lines, key, desc, key_style, desc_style);
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Formulário", header_style)));
    for (key, desc) in FORM_BINDINGS {
        add_binding(&mut lines, key, desc, key_style, desc_style);
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " O mouse também funciona nos botões.",
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let overlay_area = centered_rect_fixed(56, lines.len() as u16 + 2, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 20;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}
