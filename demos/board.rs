//! Board Example - Full pipeline, printed as plain text
//!
//! Builds a small kanban board, renders it, and prints:
//! - the framebuffer rows
//! - how many cells the first flush sends
//! - how many cells change when one card moves
//!
//! Run with: cargo run --example board

use lattice_tui::{
    Align, BorderStyle, BoxStyle, Color, Edges, FlexDirection, Justify, RenderOptions, Renderable,
    Renderer, Size, TextAlign, TextStyle,
};

struct Card<'a> {
    id: u32,
    title: &'a str,
}

fn card(item: &Card) -> Renderable {
    Renderable::boxed(
        BoxStyle::default()
            .border(BorderStyle::Rounded)
            .border_fg(Color::GRAY)
            .padding(Edges::symmetric(0, 1)),
        [
            Renderable::styled_span(format!("#{}", item.id), TextStyle::default().fg(Color::YELLOW).bold()),
            Renderable::text(item.title),
        ],
    )
}

fn column(name: &str, cards: &[Card]) -> Renderable {
    let header = Renderable::styled_span(
        format!("{name} ({})", cards.len()),
        TextStyle::default().underline().align(TextAlign::Center),
    );

    let mut children = vec![header];
    children.extend(cards.iter().map(card));

    Renderable::boxed(
        BoxStyle::default()
            .width(Size::Fill)
            .height(Size::Fill)
            .align(Align::Stretch)
            .border(BorderStyle::Single)
            .padding(Edges::symmetric(0, 1)),
        children,
    )
}

fn board(todo: &[Card], doing: &[Card], done: &[Card]) -> Renderable {
    let title = Renderable::boxed(
        BoxStyle::default()
            .direction(FlexDirection::Row)
            .justify(Justify::SpaceBetween)
            .bg(Color::rgb(20, 20, 30)),
        [
            Renderable::styled_span("lattice board", TextStyle::default().fg(Color::CYAN).bold()),
            Renderable::styled_span("q: quit", TextStyle::default().dim()),
        ],
    );

    let columns = Renderable::boxed(
        BoxStyle::default()
            .direction(FlexDirection::Row)
            .height(Size::Fill)
            .gap(1),
        [
            column("Todo", todo),
            column("Doing", doing),
            column("Done", done),
        ],
    );

    Renderable::boxed(
        BoxStyle::default().align(Align::Stretch),
        [title, columns],
    )
}

fn main() {
    println!("=== lattice-tui Board Example ===\n");

    let mut todo = vec![
        Card { id: 1, title: "Write the layout engine docs" },
        Card { id: 2, title: "Triage 日本語 issues" },
    ];
    let doing = vec![Card { id: 3, title: "Ship v0.1" }];
    let mut done: Vec<Card> = Vec::new();

    let mut renderer = Renderer::new(72, 16, RenderOptions::default());
    renderer.render(&board(&todo, &doing, &done));

    for line in renderer.buffer().text_lines() {
        println!("{line}");
    }

    // A real writer would turn the cells into escape sequences.
    let sent = renderer.flush(|_cells| Ok::<(), std::convert::Infallible>(()));
    println!("\nfirst flush: {} cells", sent.unwrap_or_default());

    if let Some(moved) = todo.pop() {
        done.push(moved);
    }
    renderer.render(&board(&todo, &doing, &done));

    for line in renderer.buffer().text_lines() {
        println!("{line}");
    }
    println!("\nafter moving a card: {} cells changed", renderer.buffer().dirty_count());
}
